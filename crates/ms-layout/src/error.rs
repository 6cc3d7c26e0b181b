// ABOUTME: Errors surfaced by split pane model operations.
// ABOUTME: Every variant maps onto an invalid-argument or index-out-of-range kind.

/// Broad category of a [`PaneError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    IndexOutOfRange,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaneError {
    #[error("Ratio must be strictly between 0 and 1, got {0}")]
    InvalidRatio(f64),

    #[error("A split already exists at ratio {0}")]
    DuplicateRatio(f64),

    #[error("Expected one size per pane ({expected}), got {actual}")]
    SizeCountMismatch { expected: usize, actual: usize },

    #[error("Fixed pane size must be positive, got {0}")]
    InvalidSize(i32),

    #[error("Pane index {index} out of range (pane count {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl PaneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaneError::InvalidRatio(_)
            | PaneError::DuplicateRatio(_)
            | PaneError::InvalidSize(_)
            | PaneError::SizeCountMismatch { .. } => ErrorKind::InvalidArgument,
            PaneError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}
