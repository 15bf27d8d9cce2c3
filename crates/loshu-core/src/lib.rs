//! Magic-square matrix math and vector reduction.
//!
//! A magic square is an n×n integer matrix whose row sums, column sums,
//! and both diagonal sums all equal the same constant. This crate holds
//! the matrix type, the line-sum predicate, and the sum-of-products
//! reducer.
//!
//! Zero I/O — pure math with no opinions about where matrices come from.

pub mod error;
pub mod matrix;
pub mod reduce;

pub use error::{CoreError, Result};
pub use matrix::SquareMatrix;
pub use reduce::sum_product;
