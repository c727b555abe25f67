/// Errors that can occur during query manipulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Empty key passed to a query operation
    EmptyKey,
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyKey => "Empty query key",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueryError {}

/// Result type for query manipulation operations
pub type Result<T> = core::result::Result<T, QueryError>;
