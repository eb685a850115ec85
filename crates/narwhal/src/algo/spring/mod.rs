//! Spring layout: attraction along links via the spring matrix, inverse-distance repulsion
//! between every pair of nodes, and a tanh speed cap that anneals linearly over the run.

use std::hash::Hash;

use narwhal_graph::Graph;

use crate::algo::LayoutOptions;
use crate::error::Result;
use crate::result::LayoutResult;

mod force;
mod schedule;
mod simulate;

pub use force::SpringMatrix;
pub use schedule::SpeedSchedule;
pub use simulate::{Frame, Trajectory};

/// A graph paired with its spring matrix.
///
/// The spring matrix is computed once in [`ForceLayout::new`] and shared by every run; runs only
/// borrow it, so one `ForceLayout` can serve many (including concurrent) layouts.
#[derive(Debug, Clone)]
pub struct ForceLayout<N> {
    graph: Graph<N>,
    spring: SpringMatrix,
}

impl<N> ForceLayout<N> {
    pub fn new(graph: &Graph<N>) -> Self {
        Self {
            graph: graph.clone(),
            spring: SpringMatrix::new(graph),
        }
    }

    pub fn graph(&self) -> &Graph<N> {
        &self.graph
    }

    pub fn spring(&self) -> &SpringMatrix {
        &self.spring
    }

    /// Lazily simulated frames, starting with the initial positions.
    pub fn trajectory(&self, opts: &LayoutOptions) -> Result<Trajectory<'_>> {
        Trajectory::new(&self.spring, self.graph.len(), opts)
    }
}

impl<N> ForceLayout<N>
where
    N: Hash + Eq + Clone,
{
    /// Final layout, centred on the origin and scaled so the farthest node lies on the unit
    /// circle. Intermediate frames are discarded.
    pub fn run(&self, opts: &LayoutOptions) -> Result<LayoutResult<N>> {
        let mut points = self.trajectory(opts)?.finish();
        simulate::recenter(&mut points);

        let result = LayoutResult::from_points(self.graph.nodes(), points);
        tracing::debug!(
            nodes = result.len(),
            max_radius = result.max_radius(),
            "spring layout finished"
        );
        Ok(result)
    }
}
