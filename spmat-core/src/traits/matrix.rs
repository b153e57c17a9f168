//! Core matrix abstraction traits
//!
//! Consumers such as predicate counting are written against these traits
//! rather than a concrete storage type.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::Entry;

/// Read-only access to a default-valued sparse matrix
///
/// Every coordinate is addressable. Coordinates that were never assigned
/// read back as [`SparseAccess::default_element`].
pub trait SparseAccess {
    /// The element type stored in this matrix
    type Element;

    /// Iterator over the stored entries in row-major order
    type Entries<'a>: Iterator<Item = Entry<Self::Element>>
    where
        Self: 'a;

    /// Get the value at the specified position
    ///
    /// Returns the default value when nothing is stored there.
    fn get_element(&self, row: usize, column: usize) -> Self::Element;

    /// Get the extent as (max row index, max column index)
    ///
    /// These are the largest indices ever assigned, not counts.
    fn extent(&self) -> (usize, usize);

    /// Get number of explicitly stored entries
    fn nnz(&self) -> usize;

    /// Get the value shared by every unassigned coordinate
    fn default_element(&self) -> &Self::Element;

    /// Iterate the stored entries, ascending by row then column
    fn entries(&self) -> Self::Entries<'_>;
}

/// Extension trait for row/column slicing (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait SparseRows: SparseAccess {
    /// Get all stored entries in a row, in column order
    fn get_row(&self, row: usize) -> Vec<Entry<Self::Element>>;

    /// Get all stored entries in a column, in row order
    fn get_col(&self, column: usize) -> Vec<Entry<Self::Element>>;
}
