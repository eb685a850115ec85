#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("edge table needs at least 2 columns (source, target), got {columns}")]
    TooFewColumns { columns: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: weight {value:?} is not a number")]
    NonNumericWeight { row: usize, value: String },

    #[error("row {row}: weight {weight} is not finite")]
    NonFiniteWeight { row: usize, weight: f64 },

    #[error("row {row}, column {column}: missing value")]
    MissingCell { row: usize, column: usize },

    #[error("input is not a row-oriented table: {reason}")]
    NotTabular { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
