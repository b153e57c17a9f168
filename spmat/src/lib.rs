//! spmat - Default-Valued Sparse Matrix
//!
//! A two-dimensional container over an unbounded index space that stores
//! only explicitly assigned cells. Every other cell reads back as one
//! shared default value.
//!
//! ## Architecture
//!
//! spmat follows a definition/implementation split:
//!
//! - **spmat-core**: entry record, error taxonomy, access traits and
//!   coordinate validation (no I/O)
//! - **spmat**: the storage engine, iterators, conversion, rendering and
//!   predicate counting
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::{count_matching, SparseMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let mut matrix = SparseMatrix::with_default(0);
//!     matrix.add(2, 3, 5)?;
//!     matrix.add(2, 5, 7)?;
//!     matrix.add(4, 1, 9)?;
//!
//!     for entry in &matrix {
//!         println!("({}, {}) = {}", entry.row, entry.column, entry.value);
//!     }
//!     assert_eq!(count_matching(&matrix, |v| *v == 0), 17);
//!
//!     // Independent copy, then a checked narrowing conversion
//!     let bytes = matrix.try_clone()?.checked_cast::<u8>()?;
//!     print!("{bytes}");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Ordered storage**: binary-searched row directory with sorted rows
//! - **Fallible allocation**: insertion, copy and conversion report
//!   allocator refusal and leave the matrix unchanged
//! - **serde** (default): `Serialize`/`Deserialize` for entries and
//!   configuration, JSON config loading

// Re-export core abstractions
pub use spmat_core::{
    // Core traits
    ElementKind, MatrixElement, SparseAccess, SparseRows,
    // Data model
    Entry,
    // Error handling
    ErrorCategory, Result, SpmatError,
};

// Implementation modules
pub mod config;
mod convert;
pub mod iter;
pub mod matrix;
pub mod predicate;
mod render;

// Public exports
pub use config::{MatrixConfig, RenderConfig};
pub use iter::{IntoIter, Iter};
pub use matrix::SparseMatrix;
pub use predicate::{count_matching, count_matching_dense, try_count_matching};
