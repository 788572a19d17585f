//! Errors

/// Error raised when a sequence of values does not fit the dimension of a point
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum DimensionError {
    /// The number of values differs from the dimension
    #[error("expected {expected} components, found {found}")]
    Mismatch {
        /// The dimension of the point
        expected: usize,
        /// The number of values given
        found: usize,
    },
}
