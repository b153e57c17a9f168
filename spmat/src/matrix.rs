//! Default-valued sparse matrix storage
//!
//! Occupied cells live in a row directory sorted by row index; each row
//! keeps its occupied columns sorted. Both levels are located by binary
//! search, so insertion and lookup cost `O(log rows + log cells_in_row)`
//! comparisons. Every allocation goes through `try_reserve`, which lets
//! insertion, copy and conversion report allocator refusal and leave the
//! matrix exactly as it was.

use log::{debug, trace};
use spmat_core::{validate_coordinate, Entry, Result, SparseAccess, SparseRows, SpmatError};

use crate::config::MatrixConfig;
use crate::iter::{Cells, IntoIter, Iter};

mod row;

pub(crate) use row::{try_reserve, Row};

/// A two-dimensional matrix storing only explicitly assigned cells
///
/// Every coordinate that was never assigned reads back as the default
/// value. `rows()` and `columns()` report the largest row and column index
/// ever assigned, so the dense equivalent is a
/// `(rows() + 1) x (columns() + 1)` grid.
///
/// ```
/// use spmat::SparseMatrix;
///
/// let mut m = SparseMatrix::new();
/// m.add(2, 3, 5)?;
/// m.add(4, 1, 9)?;
///
/// assert_eq!(m.get(2, 3), 5);
/// assert_eq!(m.get(0, 0), 0);
/// assert_eq!((m.rows(), m.columns(), m.size()), (4, 3, 2));
/// # Ok::<(), spmat::SpmatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SparseMatrix<T> {
    rows: Vec<Row<T>>,
    default_value: T,
    max_row: usize,
    max_column: usize,
    size: usize,
    config: MatrixConfig,
}

impl<T: Default> SparseMatrix<T> {
    /// Create an empty matrix whose default value is `T::default()`
    pub fn new() -> Self {
        Self::with_default(T::default())
    }
}

impl<T: Default> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseMatrix<T> {
    /// Create an empty matrix with the supplied default value
    pub fn with_default(default_value: T) -> Self {
        Self {
            rows: Vec::new(),
            default_value,
            max_row: 0,
            max_column: 0,
            size: 0,
            config: MatrixConfig::default(),
        }
    }

    /// Create an empty matrix with the supplied default value and storage
    /// configuration
    pub fn with_config(default_value: T, config: MatrixConfig) -> Result<Self> {
        let mut rows = Vec::new();
        try_reserve(&mut rows, config.row_capacity)?;
        Ok(Self {
            rows,
            default_value,
            max_row: 0,
            max_column: 0,
            size: 0,
            config,
        })
    }

    /// Build a matrix from entries; later entries replace earlier ones at
    /// the same coordinate
    pub fn from_entries<I>(default_value: T, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Entry<T>>,
    {
        let mut matrix = Self::with_default(default_value);
        for entry in entries {
            let (row, column, value) = entry.into_parts();
            matrix.add(row, column, value)?;
        }
        Ok(matrix)
    }

    /// Store `value` at (`row`, `column`)
    ///
    /// An existing value at that coordinate is replaced; otherwise a new
    /// entry is created and `size()` grows by one. The extent grows to cover
    /// the coordinate in both cases.
    ///
    /// # Errors
    ///
    /// - [`SpmatError::InvalidCoordinate`] when a configured maximum index
    ///   is exceeded
    /// - [`SpmatError::Allocation`] when storage for the entry cannot be
    ///   obtained
    ///
    /// On error the matrix is unchanged.
    pub fn add(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        validate_coordinate(row, column, self.config.max_index)?;

        match self.rows.binary_search_by_key(&row, |r| r.index()) {
            Ok(pos) => {
                if self.rows[pos].upsert(column, value)? {
                    trace!("add ({row}, {column}): new cell in existing row");
                    self.size += 1;
                } else {
                    trace!("add ({row}, {column}): replaced value");
                }
            }
            Err(pos) => {
                try_reserve(&mut self.rows, 1)?;
                let mut new_row = Row::try_with_capacity(row, self.config.column_capacity)?;
                new_row.upsert(column, value)?;
                self.rows.insert(pos, new_row);
                self.size += 1;
                trace!("add ({row}, {column}): new row");
            }
        }

        self.max_row = self.max_row.max(row);
        self.max_column = self.max_column.max(column);
        Ok(())
    }

    /// Get the value at (`row`, `column`), or the default value
    pub fn get(&self, row: usize, column: usize) -> T
    where
        T: Clone,
    {
        self.get_ref(row, column).clone()
    }

    /// Borrow the value at (`row`, `column`), or the default value
    pub fn get_ref(&self, row: usize, column: usize) -> &T {
        self.find(row, column).unwrap_or(&self.default_value)
    }

    /// Whether an entry is stored at (`row`, `column`)
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.find(row, column).is_some()
    }

    fn find(&self, row: usize, column: usize) -> Option<&T> {
        let pos = self.rows.binary_search_by_key(&row, |r| r.index()).ok()?;
        self.rows[pos].get(column)
    }

    /// Number of stored entries
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether no entry has been stored
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Largest row index ever assigned (0 for an empty matrix)
    pub fn rows(&self) -> usize {
        self.max_row
    }

    /// Largest column index ever assigned (0 for an empty matrix)
    pub fn columns(&self) -> usize {
        self.max_column
    }

    /// The value returned for every unassigned coordinate
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Replace the default value; stored entries are not affected
    pub fn set_default(&mut self, value: T) {
        self.default_value = value;
    }

    /// Get the storage configuration
    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Iterate the stored entries in row-major order
    ///
    /// Entries are yielded by value. The iterator borrows the matrix, so
    /// the matrix cannot be modified while it is alive; calling `iter()`
    /// again after a modification sees the current contents.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.cells())
    }

    /// Iterate the stored entries of one row, in column order
    pub fn row_entries(&self, row: usize) -> Iter<'_, T> {
        match self.rows.binary_search_by_key(&row, |r| r.index()) {
            Ok(pos) => {
                let slot = &self.rows[pos..=pos];
                Iter::new(Cells::new(slot, slot[0].len()))
            }
            Err(_) => Iter::new(Cells::new(&[], 0)),
        }
    }

    /// Iterate the stored entries of one column, in row order
    pub fn column_entries(&self, column: usize) -> impl Iterator<Item = Entry<T>> + '_
    where
        T: Clone,
    {
        self.rows.iter().filter_map(move |row| {
            row.get(column)
                .map(|value| Entry::new(row.index(), column, value.clone()))
        })
    }

    /// Indices of rows holding at least one entry, ascending
    pub fn occupied_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().map(|r| r.index())
    }

    pub(crate) fn cells(&self) -> Cells<'_, T> {
        Cells::new(&self.rows, self.size)
    }

    /// Copy this matrix, reporting allocation failure instead of aborting
    ///
    /// The copy shares no storage with `self`. A failed copy is discarded
    /// before the error is returned.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        debug!("copying matrix with {} entries", self.size);
        self.try_map_indexed(|_, value| Ok::<T, SpmatError>(value.clone()))
    }

    /// Replace the contents of `self` with an independent copy of `other`
    ///
    /// The copy is completed before `self` is touched, so on error `self`
    /// keeps its previous contents.
    pub fn assign_from(&mut self, other: &Self) -> Result<()>
    where
        T: Clone,
    {
        let staged = other.try_clone()?;
        debug!(
            "assigning {} entries over {} existing",
            staged.size, self.size
        );
        *self = staged;
        Ok(())
    }

    /// Build a converted copy into a staging matrix
    ///
    /// The rule sees each stored value with its coordinate in row-major
    /// order, then the default value with no coordinate. The staging matrix
    /// is only returned once every value converted.
    pub(crate) fn try_map_indexed<U, E, F>(
        &self,
        mut rule: F,
    ) -> core::result::Result<SparseMatrix<U>, E>
    where
        F: FnMut(Option<(usize, usize)>, &T) -> core::result::Result<U, E>,
        E: From<SpmatError>,
    {
        let mut rows = Vec::new();
        try_reserve(&mut rows, self.rows.len())?;
        for row in &self.rows {
            rows.push(row.try_map(&mut rule)?);
        }
        let default_value = rule(None, &self.default_value)?;

        Ok(SparseMatrix {
            rows,
            default_value,
            max_row: self.max_row,
            max_column: self.max_column,
            size: self.size,
            config: self.config.clone(),
        })
    }

    pub(crate) fn into_rows(self) -> (Vec<Row<T>>, usize) {
        (self.rows, self.size)
    }
}

/// Two matrices are equal when they share the default value, the extent
/// and the stored entries. Storage configuration is not compared.
impl<T: PartialEq> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.default_value == other.default_value
            && self.max_row == other.max_row
            && self.max_column == other.max_column
            && self.rows == other.rows
    }
}

impl<T: Eq> Eq for SparseMatrix<T> {}

impl<T: Clone> SparseAccess for SparseMatrix<T> {
    type Element = T;
    type Entries<'a> = Iter<'a, T> where Self: 'a;

    fn get_element(&self, row: usize, column: usize) -> T {
        self.get(row, column)
    }

    fn extent(&self) -> (usize, usize) {
        (self.max_row, self.max_column)
    }

    fn nnz(&self) -> usize {
        self.size
    }

    fn default_element(&self) -> &T {
        &self.default_value
    }

    fn entries(&self) -> Iter<'_, T> {
        self.iter()
    }
}

impl<T: Clone> SparseRows for SparseMatrix<T> {
    fn get_row(&self, row: usize) -> Vec<Entry<T>> {
        self.row_entries(row).collect()
    }

    fn get_col(&self, column: usize) -> Vec<Entry<T>> {
        self.column_entries(column).collect()
    }
}

impl<'a, T: Clone> IntoIterator for &'a SparseMatrix<T> {
    type Item = Entry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SparseMatrix<T> {
    type Item = Entry<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (rows, size) = self.into_rows();
        IntoIter::new(rows, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::ErrorCategory;

    fn scenario() -> SparseMatrix<i32> {
        let mut m = SparseMatrix::new();
        m.add(2, 3, 5).unwrap();
        m.add(2, 5, 7).unwrap();
        m.add(4, 1, 9).unwrap();
        m
    }

    #[test]
    fn test_empty_matrix() {
        let m: SparseMatrix<f64> = SparseMatrix::new();
        assert_eq!(m.size(), 0);
        assert!(m.is_empty());
        assert_eq!((m.rows(), m.columns()), (0, 0));
        assert_eq!(*m.default_value(), 0.0);
        assert_eq!(m.get(123, 456), 0.0);
        assert_eq!(m.iter().count(), 0);
    }

    #[test]
    fn test_scenario_accessors() {
        let m = scenario();
        assert_eq!(m.rows(), 4);
        assert_eq!(m.columns(), 5);
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(2, 3), 5);
        assert_eq!(m.get(2, 5), 7);
        assert_eq!(m.get(4, 1), 9);
        assert_eq!(m.get(0, 0), 0);
        assert!(m.contains(4, 1));
        assert!(!m.contains(4, 2));
    }

    #[test]
    fn test_upsert_replaces_value() {
        let mut m = scenario();
        m.add(2, 3, 50).unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(2, 3), 50);
    }

    #[test]
    fn test_out_of_order_inserts_iterate_row_major() {
        let mut m = SparseMatrix::with_default(-1);
        for &(r, c, v) in &[(9, 0, 1), (0, 9, 2), (4, 4, 3), (0, 0, 4), (9, 9, 5), (4, 0, 6)] {
            m.add(r, c, v).unwrap();
        }

        let coords: Vec<_> = m.iter().map(|e| e.coordinate()).collect();
        assert_eq!(coords, vec![(0, 0), (0, 9), (4, 0), (4, 4), (9, 0), (9, 9)]);
        assert_eq!(m.occupied_rows().collect::<Vec<_>>(), vec![0, 4, 9]);
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let m = scenario();
        let _ = m.get(100, 100);
        let _ = m.get_ref(3, 3);
        assert_eq!(m.size(), 3);
        assert_eq!((m.rows(), m.columns()), (4, 5));
    }

    #[test]
    fn test_set_default_leaves_entries() {
        let mut m = scenario();
        m.set_default(-7);
        assert_eq!(m.get(0, 0), -7);
        assert_eq!(m.get(2, 3), 5);
        assert_eq!(m.size(), 3);
    }

    #[test]
    fn test_max_index_rejects_without_mutation() {
        let mut m = SparseMatrix::with_config(0u8, MatrixConfig::with_max_index(10)).unwrap();
        m.add(10, 10, 1).unwrap();

        let err = m.add(11, 0, 2).unwrap_err();
        assert_eq!(
            err,
            SpmatError::InvalidCoordinate {
                row: 11,
                column: 0,
                max_index: 10
            }
        );
        assert_eq!(m.size(), 1);
        assert_eq!((m.rows(), m.columns()), (10, 10));
    }

    #[test]
    fn test_add_allocation_failure_leaves_matrix() {
        let config = MatrixConfig::default().with_column_capacity(usize::MAX);
        let mut m = SparseMatrix::with_config(0u8, config).unwrap();

        let err = m.add(3, 3, 1).unwrap_err();
        assert!(matches!(err, SpmatError::Allocation { .. }));
        assert_eq!(err.category(), ErrorCategory::Resource);
        assert_eq!(m.size(), 0);
        assert_eq!((m.rows(), m.columns()), (0, 0));
        assert!(!m.contains(3, 3));
        assert_eq!(m.iter().count(), 0);
    }

    #[test]
    fn test_with_config_reports_allocation_failure() {
        let config = MatrixConfig::default().with_row_capacity(usize::MAX);
        let err = SparseMatrix::with_config(0u64, config).unwrap_err();
        assert_eq!(
            err,
            SpmatError::Allocation {
                requested: usize::MAX
            }
        );
    }

    #[test]
    fn test_failed_insert_keeps_earlier_entries() {
        let mut m = scenario();
        m.config.column_capacity = usize::MAX;

        assert!(matches!(
            m.add(3, 0, 1),
            Err(SpmatError::Allocation { .. })
        ));
        assert_eq!(m, scenario());

        // Existing rows grow one cell at a time and still accept inserts
        m.add(2, 4, 6).unwrap();
        assert_eq!(m.size(), 4);
    }

    #[test]
    fn test_row_and_column_views() {
        let m = scenario();
        let row: Vec<_> = m.row_entries(2).map(|e| e.into_parts()).collect();
        assert_eq!(row, vec![(2, 3, 5), (2, 5, 7)]);
        assert_eq!(m.row_entries(3).count(), 0);

        assert_eq!(m.get_col(1), vec![Entry::new(4, 1, 9)]);
        assert_eq!(m.get_row(4), vec![Entry::new(4, 1, 9)]);
        assert!(m.get_col(0).is_empty());
    }

    #[test]
    fn test_try_clone_is_independent() {
        let mut a = scenario();
        let mut b = a.try_clone().unwrap();
        assert_eq!(a, b);

        b.add(0, 0, 1).unwrap();
        a.add(1, 1, 2).unwrap();
        assert_eq!(a.get(0, 0), 0);
        assert_eq!(b.get(1, 1), 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_assign_from_replaces_everything() {
        let source = scenario();
        let mut target = SparseMatrix::with_default(3);
        target.add(10, 10, 1).unwrap();

        target.assign_from(&source).unwrap();
        assert_eq!(target, source);
        assert_eq!(target.rows(), 4);
        assert_eq!(*target.default_value(), 0);
        assert!(!target.contains(10, 10));
    }

    #[test]
    fn test_from_entries_upserts() {
        let m = SparseMatrix::from_entries(
            0,
            vec![Entry::new(1, 1, 1), Entry::new(0, 2, 2), Entry::new(1, 1, 3)],
        )
        .unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.get(1, 1), 3);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = SparseMatrix::new();
        let mut b = SparseMatrix::new();
        a.add(1, 2, 'x').unwrap();
        a.add(0, 0, 'y').unwrap();
        b.add(0, 0, 'y').unwrap();
        b.add(1, 2, 'x').unwrap();
        assert_eq!(a, b);
    }
}
