//! Per-row storage: the occupied columns of one row, sorted ascending

use spmat_core::{Result, SpmatError};

/// Reserve room for `additional` more items, reporting allocator refusal
/// as [`SpmatError::Allocation`] instead of aborting
pub(crate) fn try_reserve<V>(vec: &mut Vec<V>, additional: usize) -> Result<()> {
    vec.try_reserve(additional)
        .map_err(|_| SpmatError::Allocation {
            requested: additional,
        })
}

/// One occupied row
///
/// `cells` is sorted by column with no duplicate columns and is never
/// empty once the row is linked into a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Row<T> {
    index: usize,
    cells: Vec<(usize, T)>,
}

impl<T> Row<T> {
    /// Create an empty row with room for `capacity` cells
    pub(crate) fn try_with_capacity(index: usize, capacity: usize) -> Result<Self> {
        let mut cells = Vec::new();
        try_reserve(&mut cells, capacity.max(1))?;
        Ok(Self { index, cells })
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn cells(&self) -> &[(usize, T)] {
        &self.cells
    }

    pub(crate) fn into_cells(self) -> Vec<(usize, T)> {
        self.cells
    }

    fn position(&self, column: usize) -> core::result::Result<usize, usize> {
        self.cells.binary_search_by_key(&column, |(c, _)| *c)
    }

    pub(crate) fn get(&self, column: usize) -> Option<&T> {
        match self.position(column) {
            Ok(pos) => Some(&self.cells[pos].1),
            Err(_) => None,
        }
    }

    /// Store `value` at `column`, replacing any previous value
    ///
    /// Returns `true` when a new cell was created. On error the row is
    /// unchanged.
    pub(crate) fn upsert(&mut self, column: usize, value: T) -> Result<bool> {
        match self.position(column) {
            Ok(pos) => {
                self.cells[pos].1 = value;
                Ok(false)
            }
            Err(pos) => {
                try_reserve(&mut self.cells, 1)?;
                self.cells.insert(pos, (column, value));
                Ok(true)
            }
        }
    }

    /// Build a converted copy of this row
    ///
    /// The rule receives the coordinate and value of each cell in column
    /// order; the first error aborts the copy and the partial row is dropped.
    pub(crate) fn try_map<U, E, F>(&self, rule: &mut F) -> core::result::Result<Row<U>, E>
    where
        F: FnMut(Option<(usize, usize)>, &T) -> core::result::Result<U, E>,
        E: From<SpmatError>,
    {
        let mut cells = Vec::new();
        try_reserve(&mut cells, self.cells.len())?;
        for (column, value) in &self.cells {
            cells.push((*column, rule(Some((self.index, *column)), value)?));
        }
        Ok(Row {
            index: self.index,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_keeps_columns_sorted() {
        let mut row = Row::try_with_capacity(3, 0).unwrap();
        assert!(row.upsert(5, 'b').unwrap());
        assert!(row.upsert(1, 'a').unwrap());
        assert!(row.upsert(9, 'c').unwrap());
        assert!(!row.upsert(5, 'B').unwrap());

        assert_eq!(row.index(), 3);
        assert_eq!(row.len(), 3);
        assert_eq!(row.cells(), &[(1, 'a'), (5, 'B'), (9, 'c')]);
        assert_eq!(row.get(5), Some(&'B'));
        assert_eq!(row.get(4), None);
    }

    #[test]
    fn test_try_map_reports_coordinates() {
        let mut row = Row::try_with_capacity(2, 2).unwrap();
        row.upsert(0, 10u32).unwrap();
        row.upsert(7, 300u32).unwrap();

        let mut seen = Vec::new();
        let mapped: core::result::Result<Row<u8>, SpmatError> = row.try_map(&mut |pos: Option<(usize, usize)>, v: &u32| {
            seen.push(pos);
            u8::try_from(*v).map_err(|_| SpmatError::Conversion { position: pos })
        });

        assert_eq!(
            mapped,
            Err(SpmatError::Conversion {
                position: Some((2, 7))
            })
        );
        assert_eq!(seen, vec![Some((2, 0)), Some((2, 7))]);
    }
}
