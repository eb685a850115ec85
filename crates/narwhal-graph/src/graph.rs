//! Canonical weighted link table over a sorted node index.
//!
//! A [`Graph`] is built once from raw edges and is read-only afterwards. Nodes live in a sorted
//! arena (`nodes`) with a lookup table back to their positions; links refer to nodes by position
//! only, so every matrix built from a graph shares the same row/column order.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use rustc_hash::FxBuildHasher;

use crate::adjacency::SparseMatrix;
use crate::error::{Error, Result};

mod link;
mod rows;

pub use link::{Link, LinkRef};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug)]
struct GraphData<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    links: Vec<Link>,
}

/// Directed, weighted graph.
///
/// Duplicate `(source, target)` pairs are merged (weights summed, or occurrences counted for
/// unweighted input) and links whose merged weight is exactly zero are dropped. Clones share the
/// underlying storage.
#[derive(Debug)]
pub struct Graph<N> {
    data: Arc<GraphData<N>>,
}

impl<N> Clone for Graph<N> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            data: Arc::new(GraphData {
                nodes: Vec::new(),
                index: HashMap::default(),
                links: Vec::new(),
            }),
        }
    }
}

impl<N> Graph<N>
where
    N: Ord + Hash + Clone,
{
    /// Unweighted edges: every occurrence of an ordered pair adds 1 to its weight.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut merged: BTreeMap<(N, N), f64> = BTreeMap::new();
        for (source, target) in edges {
            *merged.entry((source, target)).or_insert(0.0) += 1.0;
        }
        Self::from_merged(merged)
    }

    /// Weighted edges: weights of the same ordered pair are summed.
    ///
    /// A non-finite weight, or a sum that overflows, fails at the row that produced it.
    pub fn from_weighted_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut merged: BTreeMap<(N, N), f64> = BTreeMap::new();
        for (row, (source, target, weight)) in edges.into_iter().enumerate() {
            if !weight.is_finite() {
                return Err(Error::NonFiniteWeight { row, weight });
            }
            let sum = merged.entry((source, target)).or_insert(0.0);
            *sum += weight;
            // finite weights can still overflow once summed
            if !sum.is_finite() {
                return Err(Error::NonFiniteWeight { row, weight: *sum });
            }
        }
        Ok(Self::from_merged(merged))
    }

    /// Equivalent graph sharing `other`'s immutable storage.
    pub fn from_graph(other: &Graph<N>) -> Self {
        other.clone()
    }

    fn from_merged(merged: BTreeMap<(N, N), f64>) -> Self {
        let merged: Vec<((N, N), f64)> = merged
            .into_iter()
            .filter(|(_, weight)| *weight != 0.0)
            .collect();

        let mut nodes: Vec<N> = Vec::with_capacity(merged.len() * 2);
        for ((source, target), _) in &merged {
            nodes.push(source.clone());
            nodes.push(target.clone());
        }
        nodes.sort();
        nodes.dedup();

        let index: HashMap<N, usize> = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.clone(), pos))
            .collect();

        // `merged` iterates in (source, target) order, which is also position order.
        let links = merged
            .into_iter()
            .map(|((source, target), weight)| Link {
                source: index[&source],
                target: index[&target],
                weight,
            })
            .collect();

        Self {
            data: Arc::new(GraphData {
                nodes,
                index,
                links,
            }),
        }
    }

    pub fn position(&self, node: &N) -> Option<usize> {
        self.data.index.get(node).copied()
    }
}

impl<N> Graph<N> {
    /// Sorted union of all link endpoints.
    pub fn nodes(&self) -> &[N] {
        &self.data.nodes
    }

    pub fn node_count(&self) -> usize {
        self.data.nodes.len()
    }

    pub fn node(&self, pos: usize) -> Option<&N> {
        self.data.nodes.get(pos)
    }

    /// Links sorted by `(source, target)` position.
    pub fn links(&self) -> &[Link] {
        &self.data.links
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.data.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.links.is_empty()
    }

    pub fn iter(&self) -> Links<'_, N> {
        Links {
            nodes: &self.data.nodes,
            links: self.data.links.iter(),
        }
    }

    /// Source column encoded against [`Graph::nodes`].
    pub fn sources(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.links.iter().map(|l| l.source)
    }

    /// Target column encoded against [`Graph::nodes`].
    pub fn targets(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.links.iter().map(|l| l.target)
    }

    pub fn total_weight(&self) -> f64 {
        self.data.links.iter().map(|l| l.weight).sum()
    }

    /// Sparse `N x N` adjacency matrix; `A[i][j]` is the weight of link `i -> j`.
    pub fn adjacency(&self) -> SparseMatrix {
        SparseMatrix::from_sorted_links(self.node_count(), &self.data.links)
    }

    /// Whether both graphs share the same storage.
    pub fn ptr_eq(&self, other: &Graph<N>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<'a, N> IntoIterator for &'a Graph<N> {
    type Item = LinkRef<'a, N>;
    type IntoIter = Links<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a graph's links resolved to node identifiers.
#[derive(Debug, Clone)]
pub struct Links<'a, N> {
    nodes: &'a [N],
    links: std::slice::Iter<'a, Link>,
}

impl<'a, N> Iterator for Links<'a, N> {
    type Item = LinkRef<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        let l = self.links.next()?;
        Some(LinkRef {
            source: &self.nodes[l.source],
            target: &self.nodes[l.target],
            weight: l.weight,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl<N> ExactSizeIterator for Links<'_, N> {}

impl<N: fmt::Display> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with {} links", self.len())?;
        for link in self.iter() {
            write!(f, "\n{} {} {}", link.source, link.target, link.weight)?;
        }
        Ok(())
    }
}
