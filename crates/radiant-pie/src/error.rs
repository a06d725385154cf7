/// Errors returned by index-addressed series edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieError {
    /// The element index does not exist.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for PieError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieError::IndexOutOfRange { index, len } => write!(
                f,
                "Element index {} out of range (series has {} elements)",
                index, len
            ),
        }
    }
}

impl std::error::Error for PieError {}

/// Result type for series edits.
pub type PieResult<T> = Result<T, PieError>;
