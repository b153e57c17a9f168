//! Coordinate bounds and cell-count arithmetic
//!
//! Cell totals are computed in `u128` so the product of two `usize`
//! extents never overflows. Implicit-cell figures are signed because the
//! addressable-space total can be smaller than the number of stored entries.

use crate::SpmatError;

/// Validate a coordinate against an optional maximum index
///
/// `None` means the index space is unbounded and every coordinate is
/// accepted.
pub const fn validate_coordinate(
    row: usize,
    column: usize,
    max_index: Option<usize>,
) -> Result<(), SpmatError> {
    if let Some(max_index) = max_index {
        if row > max_index || column > max_index {
            return Err(SpmatError::InvalidCoordinate {
                row,
                column,
                max_index,
            });
        }
    }
    Ok(())
}

/// Product of the maximum row and column indices
///
/// This is the addressable-space figure used by predicate counting. It is
/// one row and one column short of the dense grid.
pub const fn addressable_cells(rows: usize, columns: usize) -> u128 {
    rows as u128 * columns as u128
}

/// Number of cells in the dense (rows + 1) x (columns + 1) grid
///
/// Saturates at `u128::MAX` for a `usize::MAX x usize::MAX` extent.
pub const fn dense_cells(rows: usize, columns: usize) -> u128 {
    (rows as u128 + 1).saturating_mul(columns as u128 + 1)
}

/// `total - nnz` as a signed figure
///
/// Negative when `nnz` exceeds `total`, which happens with the
/// addressable-space figure when every entry sits in row 0 or column 0.
/// Totals above `i128::MAX` saturate.
pub const fn implicit_cells(total: u128, nnz: usize) -> i128 {
    let total = if total > i128::MAX as u128 {
        i128::MAX
    } else {
        total as i128
    };
    total - nnz as i128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coordinate() {
        assert_eq!(validate_coordinate(7, 3, None), Ok(()));
        assert_eq!(validate_coordinate(usize::MAX, usize::MAX, None), Ok(()));
        assert_eq!(validate_coordinate(8, 8, Some(8)), Ok(()));

        assert_eq!(
            validate_coordinate(9, 0, Some(8)),
            Err(SpmatError::InvalidCoordinate {
                row: 9,
                column: 0,
                max_index: 8
            })
        );
        assert_eq!(
            validate_coordinate(0, 9, Some(8)),
            Err(SpmatError::InvalidCoordinate {
                row: 0,
                column: 9,
                max_index: 8
            })
        );
    }

    #[test]
    fn test_cell_counts() {
        assert_eq!(addressable_cells(4, 5), 20);
        assert_eq!(dense_cells(4, 5), 30);
        assert_eq!(dense_cells(0, 0), 1);
        assert_eq!(dense_cells(usize::MAX, usize::MAX), u128::MAX);

        // No overflow at the top of the index space
        assert_eq!(
            addressable_cells(usize::MAX, usize::MAX),
            (usize::MAX as u128) * (usize::MAX as u128)
        );
    }

    #[test]
    fn test_implicit_cells() {
        assert_eq!(implicit_cells(20, 3), 17);
        assert_eq!(implicit_cells(0, 2), -2);
        assert_eq!(implicit_cells(u128::MAX, 1), i128::MAX - 1);
    }
}
