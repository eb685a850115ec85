#![forbid(unsafe_code)]

//! Headless force-directed graph layout.
//!
//! `narwhal` turns a [`Graph`] into 2-D node coordinates. Links pull their endpoints together
//! through a normalized spring matrix, every pair of nodes pushes apart with an inverse-distance
//! force, and a tanh speed cap that shrinks over the run lets the layout settle. The result is
//! centred on the origin and fits inside the unit circle.
//!
//! ```no_run
//! use narwhal::{Graph, LayoutOptions};
//!
//! let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
//! let layout = narwhal::layout(&graph, &LayoutOptions::default().with_seed(7))?;
//! for (node, p) in &layout {
//!     println!("{node}: ({:.3}, {:.3})", p.x, p.y);
//! }
//! # Ok::<(), narwhal::Error>(())
//! ```

pub mod algo;
pub mod error;
pub mod result;

use std::hash::Hash;

pub use algo::spring::{ForceLayout, Frame, SpeedSchedule, SpringMatrix, Trajectory};
pub use algo::{InitialPositions, LayoutOptions, SpeedRange};
pub use error::{Error, Result};
pub use narwhal_graph::{Graph, Link, LinkRef, SparseMatrix};
pub use result::{LayoutResult, Point};

/// Headless layout entry point.
pub fn layout<N>(graph: &Graph<N>, opts: &LayoutOptions) -> Result<LayoutResult<N>>
where
    N: Hash + Eq + Clone,
{
    ForceLayout::new(graph).run(opts)
}
