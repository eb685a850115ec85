use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

/// A 2-D position or force.
///
/// `norm_squared()` (the dot product with itself) is the squared magnitude; `norm()` the
/// magnitude.
pub type Point = nalgebra::Vector2<f64>;

/// Final node coordinates, in node-index (sorted) order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayoutResult<N: Hash + Eq> {
    positions: IndexMap<N, Point>,
}

impl<N: Hash + Eq> Default for LayoutResult<N> {
    fn default() -> Self {
        Self {
            positions: IndexMap::new(),
        }
    }
}

impl<N: Hash + Eq + Clone> LayoutResult<N> {
    pub(crate) fn from_points(nodes: &[N], points: Vec<Point>) -> Self {
        debug_assert_eq!(nodes.len(), points.len());
        Self {
            positions: nodes.iter().cloned().zip(points).collect(),
        }
    }
}

impl<N: Hash + Eq> LayoutResult<N> {
    pub fn get(&self, node: &N) -> Option<&Point> {
        self.positions.get(node)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, N, Point> {
        self.positions.iter()
    }

    pub fn positions(&self) -> &IndexMap<N, Point> {
        &self.positions
    }

    pub fn into_positions(self) -> IndexMap<N, Point> {
        self.positions
    }

    pub fn points(&self) -> Vec<Point> {
        self.positions.values().copied().collect()
    }

    /// Largest distance of any node from the origin.
    pub fn max_radius(&self) -> f64 {
        self.positions.values().map(|p| p.norm()).fold(0.0, f64::max)
    }

    /// `(min, max)` corners of the axis-aligned bounding box.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut iter = self.positions.values();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p))))
    }
}

impl<'a, N: Hash + Eq> IntoIterator for &'a LayoutResult<N> {
    type Item = (&'a N, &'a Point);
    type IntoIter = indexmap::map::Iter<'a, N, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
