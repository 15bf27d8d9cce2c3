//! The bundled resource catalog: precomputed magic squares and the quote.

use loshu_core::SquareMatrix;

use crate::error::{AssetError, Result};
use crate::npy;

/// Square sizes with a bundled matrix.
pub const SUPPORTED_SIZES: [i64; 2] = [3, 4];

static SQUARE_3: &[u8] = include_bytes!("../assets/magic_square/3.npy");
static SQUARE_4: &[u8] = include_bytes!("../assets/magic_square/4.npy");
static WILDE: &str = include_str!("../assets/wilde.txt");

/// Look up the bundled magic square of size `n`.
///
/// Only the sizes in [`SUPPORTED_SIZES`] ship with the package. Any other
/// size is a normal branch, not a fault: a debug diagnostic and `None`.
/// The asset is decoded on every call; nothing is cached.
pub fn load_magic_square(n: i64) -> Option<SquareMatrix> {
    let bytes = match n {
        3 => SQUARE_3,
        4 => SQUARE_4,
        _ => {
            tracing::debug!("no bundled magic square for n={n}, have {SUPPORTED_SIZES:?}");
            return None;
        }
    };

    match decode_square(bytes) {
        Ok(square) => Some(square),
        Err(e) => {
            tracing::error!("bundled magic square for n={n} failed to decode: {e}");
            None
        }
    }
}

/// Decode an embedded NPY matrix, requiring it to be square.
fn decode_square(bytes: &[u8]) -> Result<SquareMatrix> {
    let m = npy::read_i64_matrix(bytes)?;
    if m.rows != m.cols {
        return Err(AssetError::Shape(format!(
            "{}x{} is not square",
            m.rows, m.cols
        )));
    }
    SquareMatrix::from_vec(m.rows, m.data).map_err(|e| AssetError::Shape(e.to_string()))
}

/// The bundled Oscar Wilde quote, trimmed of surrounding whitespace.
pub fn quote() -> &'static str {
    WILDE.trim()
}
