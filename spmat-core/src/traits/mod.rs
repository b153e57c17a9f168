//! Abstract interfaces for default-valued sparse matrices
//!
//! Traits are pure interfaces - implementations live in the `spmat` crate.

pub mod element;
pub mod matrix;

pub use element::{ElementKind, MatrixElement};
pub use matrix::SparseAccess;
#[cfg(feature = "alloc")]
pub use matrix::SparseRows;
