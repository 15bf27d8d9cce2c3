use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    ShapeMismatch { cells: usize, order: usize },
    LengthMismatch { left: usize, right: usize },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::ShapeMismatch { cells, order } => {
                write!(f, "{cells} cells cannot form a {order}x{order} matrix")
            }
            CoreError::LengthMismatch { left, right } => {
                write!(f, "vector lengths differ: {left} vs {right}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;
