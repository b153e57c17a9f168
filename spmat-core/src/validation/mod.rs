//! Coordinate and extent validation utilities
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;

pub use bounds::{
    addressable_cells, dense_cells, implicit_cells, validate_coordinate,
};
