//! Configuration for matrix storage and text rendering

/// Default capacity reserved for each newly created row
pub const DEFAULT_COLUMN_CAPACITY: usize = 4;

/// Storage configuration for a [`SparseMatrix`](crate::SparseMatrix)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixConfig {
    /// Capacity reserved up front for the row directory
    pub row_capacity: usize,
    /// Capacity reserved for each newly created row
    pub column_capacity: usize,
    /// Largest accepted row or column index, unbounded when `None`
    pub max_index: Option<usize>,
}

impl MatrixConfig {
    /// Create config with a maximum addressable index
    pub fn with_max_index(max_index: usize) -> Self {
        Self {
            max_index: Some(max_index),
            ..Self::default()
        }
    }

    /// Set the row directory capacity
    pub fn with_row_capacity(mut self, row_capacity: usize) -> Self {
        self.row_capacity = row_capacity;
        self
    }

    /// Set the per-row capacity
    pub fn with_column_capacity(mut self, column_capacity: usize) -> Self {
        self.column_capacity = column_capacity;
        self
    }

    /// Remove any maximum index
    pub fn unbounded(mut self) -> Self {
        self.max_index = None;
        self
    }

    /// Load config from a JSON document; missing fields keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize config to a JSON document
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            row_capacity: 0,
            column_capacity: DEFAULT_COLUMN_CAPACITY,
            max_index: None,
        }
    }
}

/// Layout of the dense text rendering
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Written after every `[value]` cell
    pub separator: String,
    /// Written after every row
    pub line_end: String,
}

impl RenderConfig {
    /// Set the cell separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the row terminator
    pub fn with_line_end(mut self, line_end: impl Into<String>) -> Self {
        self.line_end = line_end.into();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
            line_end: "\n".to_string(),
        }
    }
}
