#![no_std]

//! spmat-core - Default-Valued Sparse Matrix Definitions
//!
//! This crate provides the format-agnostic pieces shared by sparse matrix
//! implementations: the stored entry record, the error taxonomy, access
//! traits and coordinate validation. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod entry;
pub mod error;
pub mod traits;
pub mod validation;

pub use entry::*;
pub use error::*;
pub use traits::*;
pub use validation::*;
