//! Compressed sparse row (CSR) matrices.
//!
//! Row `i` spans `columns[offsets[i]..offsets[i + 1]]`, with columns strictly increasing inside a
//! row and no stored zeros.

use nalgebra::DMatrix;

use crate::graph::Link;

#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    dim: usize,
    offsets: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<f64>,
}

impl SparseMatrix {
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            offsets: vec![0; dim + 1],
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Assembles a `dim x dim` matrix from `(row, column, value)` triplets.
    ///
    /// Duplicate coordinates are summed; entries that sum to zero and out-of-range coordinates are
    /// dropped.
    pub fn from_triplets<I>(dim: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new(); dim];
        for (i, j, v) in triplets {
            if i < dim && j < dim {
                rows[i].push((j, v));
            }
        }

        let mut offsets = Vec::with_capacity(dim + 1);
        let mut columns = Vec::new();
        let mut values = Vec::new();
        offsets.push(0);

        for mut row in rows {
            row.sort_by_key(|&(j, _)| j);
            let mut iter = row.into_iter().peekable();
            while let Some((j, mut v)) = iter.next() {
                while let Some(&(next_j, next_v)) = iter.peek() {
                    if next_j != j {
                        break;
                    }
                    v += next_v;
                    iter.next();
                }
                if v != 0.0 {
                    columns.push(j);
                    values.push(v);
                }
            }
            offsets.push(columns.len());
        }

        Self {
            dim,
            offsets,
            columns,
            values,
        }
    }

    /// O(L) build from links already sorted by `(source, target)` without duplicates.
    pub(crate) fn from_sorted_links(dim: usize, links: &[Link]) -> Self {
        let mut offsets = vec![0usize; dim + 1];
        for l in links {
            offsets[l.source + 1] += 1;
        }
        for i in 0..dim {
            offsets[i + 1] += offsets[i];
        }

        Self {
            dim,
            offsets,
            columns: links.iter().map(|l| l.target).collect(),
            values: links.iter().map(|l| l.weight).collect(),
        }
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i >= self.dim {
            return 0.0;
        }
        let (start, end) = (self.offsets[i], self.offsets[i + 1]);
        match self.columns[start..end].binary_search(&j) {
            Ok(k) => self.values[start + k],
            Err(_) => 0.0,
        }
    }

    /// Stored `(column, value)` entries of row `i`.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let (start, end) = if i < self.dim {
            (self.offsets[i], self.offsets[i + 1])
        } else {
            (0, 0)
        };
        self.columns[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// All stored `(row, column, value)` triplets in row-major order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.dim).flat_map(move |i| self.row(i).map(move |(j, v)| (i, j, v)))
    }

    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.dim).map(|i| self.get(i, i)).collect()
    }

    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.dim).map(|i| self.row(i).map(|(_, v)| v).sum()).collect()
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.values.is_empty()
    }

    /// Dense copy; intended for small matrices.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut out = DMatrix::<f64>::zeros(self.dim, self.dim);
        for (i, j, v) in self.triplets() {
            out[(i, j)] = v;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::SparseMatrix;

    #[test]
    fn triplets_merge_duplicates_and_drop_cancelled_entries() {
        let m = SparseMatrix::from_triplets(
            3,
            [(0, 2, 1.0), (0, 2, 2.0), (1, 0, 4.0), (1, 0, -4.0), (2, 1, 5.0)],
        );
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn out_of_range_triplets_are_ignored() {
        let m = SparseMatrix::from_triplets(2, [(0, 5, 1.0), (7, 0, 1.0), (1, 1, 2.0)]);
        assert_eq!(m.triplets().collect::<Vec<_>>(), vec![(1, 1, 2.0)]);
        assert_eq!(m.get(9, 9), 0.0);
    }

    #[test]
    fn zeros_has_no_entries() {
        let m = SparseMatrix::zeros(4);
        assert!(m.is_zero());
        assert_eq!(m.row_sums(), vec![0.0; 4]);
        assert_eq!(m.to_dense().nrows(), 4);
    }
}
