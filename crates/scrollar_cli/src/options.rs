//! Option file handling

use anyhow::{Context, Result};
use scrollar_core::ScrollarOptions;
use std::fs;
use std::path::Path;

/// Option file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Json,
    Toml,
}

impl OptionsFormat {
    /// `.json` is JSON, anything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OptionsFormat::Json,
            _ => OptionsFormat::Toml,
        }
    }
}

pub fn parse_options(content: &str, format: OptionsFormat) -> Result<ScrollarOptions> {
    let options = match format {
        OptionsFormat::Json => ScrollarOptions::from_json(content)?,
        OptionsFormat::Toml => ScrollarOptions::from_toml(content)?,
    };
    Ok(options)
}

/// Load and normalize an option file
pub fn load_options(path: &Path) -> Result<ScrollarOptions> {
    if !path.exists() {
        anyhow::bail!("No options file found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_options(&content, OptionsFormat::from_path(path))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Render normalized options as TOML
pub fn render_options(options: &ScrollarOptions) -> Result<String> {
    options.to_toml().context("Failed to serialize options")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_by_extension() {
        assert_eq!(OptionsFormat::from_path(Path::new("a.json")), OptionsFormat::Json);
        assert_eq!(OptionsFormat::from_path(Path::new("a.JSON")), OptionsFormat::Json);
        assert_eq!(OptionsFormat::from_path(Path::new("scrollar.toml")), OptionsFormat::Toml);
        assert_eq!(OptionsFormat::from_path(Path::new("noext")), OptionsFormat::Toml);
    }

    #[test]
    fn test_json_normalizes_to_toml() {
        let options =
            parse_options(r#"{ "container": "main", "autoUpdate": 5 }"#, OptionsFormat::Json)
                .unwrap();
        let rendered = render_options(&options).unwrap();

        assert_eq!(
            parse_options(&rendered, OptionsFormat::Toml).unwrap(),
            ScrollarOptions::container("main")
        );
        assert!(rendered.contains("autoUpdate = false"), "{rendered}");
    }

    #[test]
    fn test_missing_file() {
        let err = load_options(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("No options file"));
    }
}
