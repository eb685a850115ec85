#![forbid(unsafe_code)]

//! Weighted, directed link tables over a sorted node index, plus the sparse adjacency matrices
//! derived from them.
//!
//! `narwhal-graph` is the input side of `narwhal`: it canonicalizes raw edge lists (typed edge
//! iterators, string tables, JSON rows) into an immutable [`Graph`] and converts a graph into a
//! [`SparseMatrix`] whose rows and columns follow the node index.

pub mod adjacency;
pub mod error;
pub mod graph;

pub use adjacency::SparseMatrix;
pub use error::{Error, Result};
pub use graph::{Graph, Link, LinkRef, Links};
