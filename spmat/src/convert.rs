//! Element-type conversion
//!
//! Every conversion builds a complete staging matrix before returning it.
//! If the rule or the allocator fails part way through, the staging matrix
//! is dropped and the source is untouched.

use log::{debug, warn};
use num_traits::{AsPrimitive, NumCast};
use spmat_core::{MatrixElement, Result, SpmatError};

use crate::matrix::SparseMatrix;

impl<T> SparseMatrix<T> {
    fn staged<U, E, F>(&self, operation: &str, rule: F) -> core::result::Result<SparseMatrix<U>, E>
    where
        F: FnMut(Option<(usize, usize)>, &T) -> core::result::Result<U, E>,
        E: From<SpmatError>,
    {
        debug!("{operation}: converting {} entries", self.size());
        let staged = self.try_map_indexed(rule);
        if staged.is_err() {
            warn!(
                "{operation}: discarding partially converted matrix of {} entries",
                self.size()
            );
        }
        staged
    }

    /// Convert every value and the default value with a fallible rule
    ///
    /// Values are converted in row-major order, the default value last.
    /// The first failure is returned unchanged and nothing is kept. The
    /// rule's error type must absorb [`SpmatError`] so allocation failures
    /// travel through the same channel.
    ///
    /// ```
    /// use spmat::{SparseMatrix, SpmatError};
    ///
    /// let mut m = SparseMatrix::with_default(1i64);
    /// m.add(0, 3, -4)?;
    ///
    /// let abs = m.try_map(|v| Ok::<u64, SpmatError>(v.unsigned_abs()))?;
    /// assert_eq!(abs.get(0, 3), 4);
    /// # Ok::<(), SpmatError>(())
    /// ```
    pub fn try_map<U, E, F>(&self, mut rule: F) -> core::result::Result<SparseMatrix<U>, E>
    where
        F: FnMut(&T) -> core::result::Result<U, E>,
        E: From<SpmatError>,
    {
        self.staged("try_map", |_, value| rule(value))
    }

    /// Convert every value and the default value with an infallible rule
    pub fn map<U, F>(&self, mut rule: F) -> Result<SparseMatrix<U>>
    where
        F: FnMut(&T) -> U,
    {
        self.staged("map", |_, value| Ok(rule(value)))
    }

    /// Convert through `From`
    pub fn convert<U>(&self) -> Result<SparseMatrix<U>>
    where
        T: Clone,
        U: From<T>,
    {
        self.map(|value| U::from(value.clone()))
    }

    /// Numeric cast with `as` semantics
    ///
    /// Narrowing truncates or wraps exactly like an `as` expression, and
    /// floats saturate when cast to integers.
    pub fn cast<U>(&self) -> Result<SparseMatrix<U>>
    where
        T: MatrixElement + AsPrimitive<U>,
        U: MatrixElement,
    {
        debug!("cast: {} -> {}", T::kind(), U::kind());
        self.map(|value| (*value).as_())
    }

    /// Numeric cast that fails when a value does not fit the target type
    ///
    /// # Errors
    ///
    /// [`SpmatError::Conversion`] carrying the coordinate of the first value
    /// out of range, or no coordinate when only the default value is.
    pub fn checked_cast<U>(&self) -> Result<SparseMatrix<U>>
    where
        T: MatrixElement,
        U: MatrixElement,
    {
        debug!("checked_cast: {} -> {}", T::kind(), U::kind());
        self.staged("checked_cast", |position, value| {
            <U as NumCast>::from(*value).ok_or(SpmatError::Conversion { position })
        })
    }
}
