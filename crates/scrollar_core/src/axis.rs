//! Scroll axes and per-axis storage

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal (left / scrollLeft / width)
    X,
    /// Vertical (top / scrollTop / height)
    Y,
}

impl Axis {
    /// Both axes, horizontal first
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// The edge whose offset the native scroll position is measured from
    pub fn near_edge(self) -> Edge {
        match self {
            Axis::X => Edge::Left,
            Axis::Y => Edge::Top,
        }
    }

    /// The opposite edge, used for distance-from-end operations
    pub fn far_edge(self) -> Edge {
        match self {
            Axis::X => Edge::Right,
            Axis::Y => Edge::Bottom,
        }
    }

    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// An edge of the scrollable region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Y,
            Edge::Left | Edge::Right => Axis::X,
        }
    }

    /// Whether offsets for this edge are measured from the end of the content
    pub fn is_far(self) -> bool {
        matches!(self, Edge::Bottom | Edge::Right)
    }
}

/// A point in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The coordinate along the given axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// The set of enabled axes
pub type AxisSet = SmallVec<[Axis; 2]>;

/// A value stored for each axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerAxis<T> {
    values: [T; 2],
}

impl<T> PerAxis<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { values: [x, y] }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.values.iter())
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.values[axis.index()]
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.values[axis.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_map_to_axes() {
        assert_eq!(Axis::X.near_edge(), Edge::Left);
        assert_eq!(Axis::X.far_edge(), Edge::Right);
        assert_eq!(Axis::Y.near_edge(), Edge::Top);
        assert_eq!(Axis::Y.far_edge(), Edge::Bottom);

        for edge in [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right] {
            let axis = edge.axis();
            if edge.is_far() {
                assert_eq!(axis.far_edge(), edge);
            } else {
                assert_eq!(axis.near_edge(), edge);
            }
        }
    }

    #[test]
    fn test_point_along_axis() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(p.along(Axis::X), 3.0);
        assert_eq!(p.along(Axis::Y), 7.0);
    }

    #[test]
    fn test_per_axis_indexing() {
        let mut values = PerAxis::new(1, 2);
        values[Axis::Y] += 10;
        assert_eq!(values[Axis::X], 1);
        assert_eq!(values[Axis::Y], 12);

        let collected: Vec<_> = values.iter().map(|(a, v)| (a, *v)).collect();
        assert_eq!(collected, vec![(Axis::X, 1), (Axis::Y, 12)]);
    }
}
