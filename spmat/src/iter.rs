//! Row-major iterators over stored entries

use core::iter::FusedIterator;
use core::slice;
use std::vec;

use spmat_core::Entry;

use crate::matrix::Row;

/// Cursor over the cells of a single row
#[derive(Clone)]
struct RowCursor<'a, T> {
    row: usize,
    cells: slice::Iter<'a, (usize, T)>,
}

impl<'a, T> RowCursor<'a, T> {
    fn new(row: &'a Row<T>) -> Self {
        Self {
            row: row.index(),
            cells: row.cells().iter(),
        }
    }
}

/// Borrowing walk over `(row, column, &value)` in row-major order
///
/// Front and back cursors work like `Flatten`: each end opens rows from
/// its own side of the directory and falls back to the other side's open
/// row once the directory is exhausted.
#[derive(Clone)]
pub(crate) struct Cells<'a, T> {
    rows: slice::Iter<'a, Row<T>>,
    front: Option<RowCursor<'a, T>>,
    back: Option<RowCursor<'a, T>>,
    remaining: usize,
}

impl<'a, T> Cells<'a, T> {
    /// `remaining` must equal the total number of cells in `rows`
    pub(crate) fn new(rows: &'a [Row<T>], remaining: usize) -> Self {
        Self {
            rows: rows.iter(),
            front: None,
            back: None,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(front) = &mut self.front {
                if let Some((column, value)) = front.cells.next() {
                    self.remaining -= 1;
                    return Some((front.row, *column, value));
                }
                self.front = None;
            }

            match self.rows.next() {
                Some(row) => self.front = Some(RowCursor::new(row)),
                None => {
                    let back = self.back.as_mut()?;
                    let (column, value) = back.cells.next()?;
                    self.remaining -= 1;
                    return Some((back.row, *column, value));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Cells<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(back) = &mut self.back {
                if let Some((column, value)) = back.cells.next_back() {
                    self.remaining -= 1;
                    return Some((back.row, *column, value));
                }
                self.back = None;
            }

            match self.rows.next_back() {
                Some(row) => self.back = Some(RowCursor::new(row)),
                None => {
                    let front = self.front.as_mut()?;
                    let (column, value) = front.cells.next_back()?;
                    self.remaining -= 1;
                    return Some((front.row, *column, value));
                }
            }
        }
    }
}

impl<T> ExactSizeIterator for Cells<'_, T> {}

impl<T> FusedIterator for Cells<'_, T> {}

/// Iterator over the stored entries of a matrix, in row-major order
///
/// Created by [`SparseMatrix::iter`](crate::SparseMatrix::iter). Each entry
/// is an owned copy; default-valued cells are never yielded.
#[derive(Clone)]
pub struct Iter<'a, T> {
    cells: Cells<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(cells: Cells<'a, T>) -> Self {
        Self { cells }
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        self.cells
            .next()
            .map(|(row, column, value)| Entry::new(row, column, value.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<T: Clone> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Entry<T>> {
        self.cells
            .next_back()
            .map(|(row, column, value)| Entry::new(row, column, value.clone()))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<'_, T> {}

impl<T: Clone> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the entries of a matrix, in row-major order
pub struct IntoIter<T> {
    rows: vec::IntoIter<Row<T>>,
    front: Option<(usize, vec::IntoIter<(usize, T)>)>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(rows: Vec<Row<T>>, remaining: usize) -> Self {
        Self {
            rows: rows.into_iter(),
            front: None,
            remaining,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        loop {
            if let Some((row, cells)) = &mut self.front {
                if let Some((column, value)) = cells.next() {
                    self.remaining -= 1;
                    return Some(Entry::new(*row, column, value));
                }
            }

            let row = self.rows.next()?;
            self.front = Some((row.index(), row.into_cells().into_iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
