//! Bundled static resources for the loshu package.
//!
//! The precomputed magic squares ship as NumPy `.npy` binaries embedded
//! at compile time, alongside a plain-text quote. Lookups are read-only
//! and decoded on demand; nothing here mutates or caches state.

pub mod error;
pub mod npy;
pub mod squares;

pub use error::{AssetError, Result};
pub use squares::{SUPPORTED_SIZES, load_magic_square, quote};
