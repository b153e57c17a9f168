//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Backing storage for new entries could not be obtained
    Allocation {
        /// Number of additional slots that were requested
        requested: usize,
    },
    /// Coordinate exceeds the configured maximum addressable index
    InvalidCoordinate {
        row: usize,
        column: usize,
        max_index: usize,
    },
    /// A value could not be represented in the target element type
    ///
    /// `position` is `None` when the failing value is the default value.
    Conversion { position: Option<(usize, usize)> },
}

/// Broad classification of an error, for callers that only need to branch
/// on the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The allocator refused a request
    Resource,
    /// The caller passed an unusable argument
    Input,
    /// A value could not be converted between element types
    Conversion,
}

impl SpmatError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::Allocation { .. } => ErrorCategory::Resource,
            SpmatError::InvalidCoordinate { .. } => ErrorCategory::Input,
            SpmatError::Conversion { .. } => ErrorCategory::Conversion,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::Allocation { requested } => {
                write!(f, "Allocation failed for {requested} additional slot(s)")
            }
            SpmatError::InvalidCoordinate {
                row,
                column,
                max_index,
            } => write!(
                f,
                "Coordinate ({row}, {column}) exceeds maximum index {max_index}"
            ),
            SpmatError::Conversion {
                position: Some((row, column)),
            } => write!(f, "Value at ({row}, {column}) is not representable"),
            SpmatError::Conversion { position: None } => {
                write!(f, "Default value is not representable")
            }
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
