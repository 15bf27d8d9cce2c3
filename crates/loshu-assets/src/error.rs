use std::fmt;

#[derive(Debug)]
pub enum AssetError {
    BadMagic,
    UnsupportedVersion { major: u8, minor: u8 },
    Header(String),
    UnsupportedDescr(String),
    FortranOrder,
    Shape(String),
    Truncated { expected: usize, actual: usize },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::BadMagic => write!(f, "not an NPY file"),
            AssetError::UnsupportedVersion { major, minor } => {
                write!(f, "unsupported NPY version {major}.{minor}")
            }
            AssetError::Header(msg) => write!(f, "bad NPY header: {msg}"),
            AssetError::UnsupportedDescr(descr) => {
                write!(f, "unsupported dtype '{descr}', only '<i8' is readable")
            }
            AssetError::FortranOrder => write!(f, "Fortran-order arrays are not supported"),
            AssetError::Shape(msg) => write!(f, "bad array shape: {msg}"),
            AssetError::Truncated { expected, actual } => {
                write!(f, "truncated payload: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for AssetError {}

pub type Result<T> = std::result::Result<T, AssetError>;
