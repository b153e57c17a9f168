//! Predicate counting over stored and implicit cells
//!
//! These functions are written against [`SparseAccess`], so they make one
//! pass over the stored entries and otherwise rely on O(1) accessors. They
//! never mutate the matrix.
//!
//! [`count_matching`] sizes the implicit region as `rows() * columns()`,
//! the product of the maximum indices. That is one row and one column
//! smaller than the dense grid the renderer prints. [`count_matching_dense`]
//! uses the full `(rows() + 1) * (columns() + 1)` grid instead.
//!
//! Counts are signed. When every stored entry sits in row 0 or column 0 the
//! addressable space is smaller than `size()`, and a default value that
//! satisfies the predicate then lowers the count below the explicit matches,
//! possibly below zero.

use core::convert::Infallible;

use log::debug;
use spmat_core::{addressable_cells, dense_cells, implicit_cells, SparseAccess};

/// Count stored entries satisfying `predicate`, plus the implicit cells of
/// the addressable space when the default value satisfies it
///
/// The implicit contribution is `rows() * columns() - size()` and is not
/// clamped, so it is negative when `size()` exceeds the product.
///
/// ```
/// use spmat::{count_matching, SparseMatrix};
///
/// let mut m = SparseMatrix::new();
/// m.add(2, 3, 5)?;
/// m.add(2, 5, 7)?;
/// m.add(4, 1, 9)?;
///
/// // 4 * 5 addressable cells, 3 of them stored
/// assert_eq!(count_matching(&m, |v| *v == 0), 17);
///
/// // Entries confined to row 0 leave no addressable space
/// let mut flat = SparseMatrix::new();
/// flat.add(0, 0, 1)?;
/// flat.add(0, 1, 2)?;
/// flat.add(0, 2, 3)?;
/// assert_eq!(count_matching(&flat, |v| *v == 0), -3);
/// # Ok::<(), spmat::SpmatError>(())
/// ```
pub fn count_matching<M, P>(matrix: &M, mut predicate: P) -> i128
where
    M: SparseAccess + ?Sized,
    P: FnMut(&M::Element) -> bool,
{
    let (rows, columns) = matrix.extent();
    into_ok(count_over(matrix, addressable_cells(rows, columns), |v| {
        Ok(predicate(v))
    }))
}

/// Like [`count_matching`] with a predicate that can fail
///
/// The first predicate error is returned unchanged.
pub fn try_count_matching<M, P, E>(matrix: &M, predicate: P) -> Result<i128, E>
where
    M: SparseAccess + ?Sized,
    P: FnMut(&M::Element) -> Result<bool, E>,
{
    let (rows, columns) = matrix.extent();
    count_over(matrix, addressable_cells(rows, columns), predicate)
}

/// Count matching cells of the full `(rows() + 1) x (columns() + 1)` grid
///
/// Every stored entry lies inside the grid, so this count is never
/// negative.
pub fn count_matching_dense<M, P>(matrix: &M, mut predicate: P) -> i128
where
    M: SparseAccess + ?Sized,
    P: FnMut(&M::Element) -> bool,
{
    let (rows, columns) = matrix.extent();
    into_ok(count_over(matrix, dense_cells(rows, columns), |v| {
        Ok(predicate(v))
    }))
}

fn count_over<M, P, E>(matrix: &M, total_cells: u128, mut predicate: P) -> Result<i128, E>
where
    M: SparseAccess + ?Sized,
    P: FnMut(&M::Element) -> Result<bool, E>,
{
    let mut explicit: i128 = 0;
    for entry in matrix.entries() {
        if predicate(&entry.value)? {
            explicit += 1;
        }
    }

    let implicit = if predicate(matrix.default_element())? {
        implicit_cells(total_cells, matrix.nnz())
    } else {
        0
    };

    debug!("predicate count: {explicit} stored, {implicit} implicit of {total_cells}");
    Ok(explicit.saturating_add(implicit))
}

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
