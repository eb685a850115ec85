//! Link records stored by [`Graph`](super::Graph).

/// A merged, directed link between two node positions.
///
/// `source` and `target` index into [`Graph::nodes`](super::Graph::nodes); both columns are
/// encoded against the same sorted node index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

impl Link {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A [`Link`] resolved back to node identifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkRef<'a, N> {
    pub source: &'a N,
    pub target: &'a N,
    pub weight: f64,
}
