//! Minimal reader for NumPy `.npy` files.
//!
//! Supports exactly what the bundled assets need: format version 1.0 or
//! 2.0, little-endian 8-byte integers (`<i8`), C order, two-dimensional
//! shape. Everything else is rejected up front.

use crate::error::{AssetError, Result};

const MAGIC: &[u8] = b"\x93NUMPY";

/// Decoded two-dimensional integer array.
#[derive(Debug)]
pub struct I64Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<i64>,
}

/// Decode a full `.npy` byte stream into an [`I64Matrix`].
pub fn read_i64_matrix(bytes: &[u8]) -> Result<I64Matrix> {
    let (header, payload) = split_header(bytes)?;
    let (rows, cols) = parse_header(header)?;

    let expected = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(8))
        .ok_or_else(|| AssetError::Shape(format!("shape ({rows}, {cols}) overflows")))?;
    if payload.len() < expected {
        return Err(AssetError::Truncated {
            expected,
            actual: payload.len(),
        });
    }

    let mut data = Vec::with_capacity(rows * cols);
    for chunk in payload[..expected].chunks_exact(8) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        data.push(i64::from_le_bytes(buf));
    }

    Ok(I64Matrix { rows, cols, data })
}

/// Validate magic and version, returning the header text and the payload.
fn split_header(bytes: &[u8]) -> Result<(&str, &[u8])> {
    if bytes.len() < MAGIC.len() + 2 || &bytes[..MAGIC.len()] != MAGIC {
        return Err(AssetError::BadMagic);
    }
    let major = bytes[6];
    let minor = bytes[7];

    // v1.0 uses a u16 header length, v2.0 widens it to u32
    let (header_len, header_start) = match (major, minor) {
        (1, 0) => {
            if bytes.len() < 10 {
                return Err(AssetError::Truncated {
                    expected: 10,
                    actual: bytes.len(),
                });
            }
            (u16::from_le_bytes([bytes[8], bytes[9]]) as usize, 10)
        }
        (2, 0) => {
            if bytes.len() < 12 {
                return Err(AssetError::Truncated {
                    expected: 12,
                    actual: bytes.len(),
                });
            }
            (
                u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize,
                12,
            )
        }
        _ => return Err(AssetError::UnsupportedVersion { major, minor }),
    };

    let end = header_start + header_len;
    if bytes.len() < end {
        return Err(AssetError::Truncated {
            expected: end,
            actual: bytes.len(),
        });
    }

    let header = std::str::from_utf8(&bytes[header_start..end])
        .map_err(|_| AssetError::Header("header is not UTF-8".to_string()))?;
    Ok((header, &bytes[end..]))
}

/// Parse the Python-dict header for descr, fortran_order, and shape.
fn parse_header(header: &str) -> Result<(usize, usize)> {
    let descr = quoted_value(header_value(header, "descr")?)
        .ok_or_else(|| AssetError::Header("descr is not quoted".to_string()))?;
    if descr != "<i8" {
        return Err(AssetError::UnsupportedDescr(descr.to_string()));
    }

    let order = header_value(header, "fortran_order")?;
    if order.starts_with("True") {
        return Err(AssetError::FortranOrder);
    }
    if !order.starts_with("False") {
        return Err(AssetError::Header(
            "fortran_order is neither True nor False".to_string(),
        ));
    }

    let shape = header_value(header, "shape")?;
    parse_shape(shape)
}

/// The raw text following `'key':`, leading whitespace stripped.
fn header_value<'a>(header: &'a str, key: &str) -> Result<&'a str> {
    let pat = format!("'{key}':");
    let start = header
        .find(&pat)
        .ok_or_else(|| AssetError::Header(format!("missing '{key}'")))?;
    Ok(header[start + pat.len()..].trim_start())
}

/// Extract the value between the first pair of single quotes.
fn quoted_value(s: &str) -> Option<&str> {
    let start = s.find('\'')?;
    let end = s[start + 1..].find('\'')?;
    Some(&s[start + 1..start + 1 + end])
}

/// Parse a `(rows, cols)` tuple; only two-dimensional shapes are accepted.
fn parse_shape(s: &str) -> Result<(usize, usize)> {
    let open = s
        .find('(')
        .ok_or_else(|| AssetError::Shape("missing '('".to_string()))?;
    let close = s[open..]
        .find(')')
        .ok_or_else(|| AssetError::Shape("missing ')'".to_string()))?;
    let inner = &s[open + 1..open + close];

    let dims: Vec<usize> = inner
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| {
            d.parse::<usize>()
                .map_err(|_| AssetError::Shape(format!("bad dimension '{d}'")))
        })
        .collect::<Result<_>>()?;

    match dims.as_slice() {
        [rows, cols] => Ok((*rows, *cols)),
        other => Err(AssetError::Shape(format!(
            "expected 2 dimensions, got {}",
            other.len()
        ))),
    }
}
