use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Immutable square matrix of integers (row-major storage).
///
/// The magic-square predicate is defined over its lines: all `order` row
/// sums, all `order` column sums, and both main diagonal sums.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareMatrix {
    order: usize,
    cells: Vec<i64>,
}

impl SquareMatrix {
    /// Build an `order`×`order` matrix from row-major cells.
    pub fn from_vec(order: usize, cells: Vec<i64>) -> Result<Self> {
        if cells.len() != order * order {
            return Err(CoreError::ShapeMismatch {
                cells: cells.len(),
                order,
            });
        }
        Ok(Self { order, cells })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Cell at (row, col). Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.order + col]
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    /// Row as a slice into the row-major storage.
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.order;
        &self.cells[start..start + self.order]
    }

    /// Column as an owned vector.
    pub fn column(&self, col: usize) -> Vec<i64> {
        (0..self.order).map(|row| self.get(row, col)).collect()
    }

    pub fn row_sum(&self, row: usize) -> i64 {
        self.row(row).iter().sum()
    }

    pub fn col_sum(&self, col: usize) -> i64 {
        (0..self.order).map(|row| self.get(row, col)).sum()
    }

    /// Main diagonal sum (top-left to bottom-right).
    pub fn diag_sum(&self) -> i64 {
        (0..self.order).map(|i| self.get(i, i)).sum()
    }

    /// Anti-diagonal sum (top-right to bottom-left).
    pub fn anti_diag_sum(&self) -> i64 {
        (0..self.order)
            .map(|i| self.get(i, self.order - 1 - i))
            .sum()
    }

    /// All line sums: rows, then columns, then the two diagonals.
    pub fn line_sums(&self) -> Vec<i64> {
        let mut sums = Vec::with_capacity(2 * self.order + 2);
        sums.extend((0..self.order).map(|i| self.row_sum(i)));
        sums.extend((0..self.order).map(|j| self.col_sum(j)));
        sums.push(self.diag_sum());
        sums.push(self.anti_diag_sum());
        sums
    }

    /// The single shared line sum, if every line agrees on one.
    pub fn magic_constant(&self) -> Option<i64> {
        let sums = self.line_sums();
        let first = *sums.first()?;
        sums.iter().all(|&s| s == first).then_some(first)
    }

    pub fn is_magic(&self) -> bool {
        self.magic_constant().is_some()
    }
}

/// Console form: cells right-aligned to width 3, one row per line.
impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.order {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.order {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>3}", self.get(row, col))?;
            }
        }
        Ok(())
    }
}
