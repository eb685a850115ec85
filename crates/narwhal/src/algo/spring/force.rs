//! Attraction forces.
//!
//! The spring matrix is the negated out-degree Laplacian of the self-loop-free adjacency matrix,
//! normalized so the total spring constant equals the node count:
//!
//! ```text
//! A' = (A - diag(A)) * N / sum(A - diag(A))
//! S  = -(D_out - A') = A' - D_out
//! ```
//!
//! `(S P)_i = sum_j A'_ij (P_j - P_i)`, i.e. every node is pulled towards its out-neighbours in
//! proportion to the link weight.

use nalgebra::DMatrix;
use narwhal_graph::{Graph, SparseMatrix};

use crate::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct SpringMatrix {
    matrix: SparseMatrix,
}

impl SpringMatrix {
    pub fn new<N>(graph: &Graph<N>) -> Self {
        Self::from_adjacency(&graph.adjacency())
    }

    pub fn from_adjacency(adjacency: &SparseMatrix) -> Self {
        let n = adjacency.dim();
        let off_diagonal: Vec<(usize, usize, f64)> =
            adjacency.triplets().filter(|&(i, j, _)| i != j).collect();

        // Summed relative to the largest weight so totals past f64::MAX still normalize.
        let peak = off_diagonal
            .iter()
            .fold(0.0_f64, |acc, &(_, _, v)| acc.max(v.abs()));
        let total: f64 = if peak > 0.0 {
            off_diagonal.iter().map(|&(_, _, v)| v / peak).sum()
        } else {
            0.0
        };
        let (peak, factor) = if total == 0.0 || !total.is_finite() {
            tracing::debug!(
                nodes = n,
                "no net link weight between distinct nodes; normalization skipped"
            );
            (1.0, 1.0)
        } else {
            (peak, n as f64 / total)
        };
        let scaled = |v: f64| v / peak * factor;

        let mut out_degree = vec![0.0; n];
        for &(i, _, v) in &off_diagonal {
            out_degree[i] += scaled(v);
        }

        let entries = off_diagonal
            .into_iter()
            .map(|(i, j, v)| (i, j, scaled(v)))
            .chain(
                out_degree
                    .into_iter()
                    .enumerate()
                    .map(|(i, d)| (i, i, -d)),
            );

        Self {
            matrix: SparseMatrix::from_triplets(n, entries),
        }
    }

    pub fn dim(&self) -> usize {
        self.matrix.dim()
    }

    pub fn matrix(&self) -> &SparseMatrix {
        &self.matrix
    }

    /// `true` when no pair of distinct nodes attracts each other.
    pub fn is_zero(&self) -> bool {
        self.matrix.is_zero()
    }

    pub fn to_dense(&self) -> DMatrix<f64> {
        self.matrix.to_dense()
    }

    /// Attraction on every node, `S . P`.
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        debug_assert_eq!(points.len(), self.dim());
        (0..self.dim())
            .map(|i| {
                self.matrix
                    .row(i)
                    .fold(Point::zeros(), |acc, (j, s)| acc + points[j] * s)
            })
            .collect()
    }
}
