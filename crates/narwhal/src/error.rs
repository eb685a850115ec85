#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] narwhal_graph::Error),

    #[error("initial {axis} coordinates have {found} entries, graph has {expected} nodes")]
    InitialPositionsMismatch {
        axis: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("initial {axis} coordinate at node {index} is not finite")]
    NonFiniteInitialPosition { axis: &'static str, index: usize },

    #[error("invalid layout option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("trajectory exhausted after {frames} frames")]
    Exhausted { frames: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
