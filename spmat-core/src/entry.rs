//! The stored cell record

/// One explicitly stored cell of a sparse matrix
///
/// Entries are handed out by value; holding one never aliases the storage
/// of the matrix it came from. The derived ordering compares `row` first,
/// then `column`, which is the row-major order iteration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
    /// Stored value
    pub value: T,
}

impl<T> Entry<T> {
    /// Create a new entry
    pub const fn new(row: usize, column: usize, value: T) -> Self {
        Self { row, column, value }
    }

    /// Get the (row, column) coordinate of this entry
    pub const fn coordinate(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Split the entry into its parts
    pub fn into_parts(self) -> (usize, usize, T) {
        (self.row, self.column, self.value)
    }
}

impl<T> From<(usize, usize, T)> for Entry<T> {
    fn from((row, column, value): (usize, usize, T)) -> Self {
        Self::new(row, column, value)
    }
}
