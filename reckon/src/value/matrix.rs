//! Matrices: fixed row-by-column grids of values
//!
//! Storage is row-major over full [`Value`] elements. Pairwise combination
//! reconciles mismatched shapes one axis at a time, rows first, then columns:
//! a single-row (or single-column) operand is repeated across the larger
//! shape, any other mismatch zero-pads the smaller side. Reconciliation
//! builds fresh grids; neither operand is mutated.

use crate::{ReckonError, ReckonResult, Value};
use nalgebra::DMatrix;
use serde::Serialize;
use std::fmt;

/// A fixed R×C grid of values, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    elements: Vec<Value>,
}

impl Matrix {
    /// Create a matrix from row-major element values
    ///
    /// Fails unless `rows * cols` matches the element count.
    pub fn new(rows: usize, cols: usize, elements: Vec<Value>) -> ReckonResult<Self> {
        if rows * cols != elements.len() {
            return Err(ReckonError::Type(format!(
                "a {}x{} matrix needs {} elements, got {}",
                rows,
                cols,
                rows * cols,
                elements.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            elements,
        })
    }

    /// Create a matrix from rows of element values
    ///
    /// Fails unless every row has the same length.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> ReckonResult<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |row| row.len());
        for row in &rows {
            if row.len() != col_count {
                return Err(ReckonError::Type(format!(
                    "matrix rows must all have {} elements, got a row of {}",
                    col_count,
                    row.len()
                )));
            }
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            elements: rows.into_iter().flatten().collect(),
        })
    }

    /// Create a matrix from a concrete numeric matrix, wrapping every entry
    /// as a `Number` leaf
    pub fn from_dmatrix(matrix: &DMatrix<f64>) -> Self {
        let mut elements = Vec::with_capacity(matrix.nrows() * matrix.ncols());
        for r in 0..matrix.nrows() {
            for c in 0..matrix.ncols() {
                elements.push(Value::Number(matrix[(r, c)]));
            }
        }
        Self {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            elements,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        if row < self.rows && col < self.cols {
            self.elements.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row-major element slice
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Scalar reduction: the sum of every element's numeric view
    pub fn sum(&self) -> ReckonResult<f64> {
        let mut total = 0.0;
        for element in &self.elements {
            total += element.as_number()?;
        }
        Ok(total)
    }

    /// Map a pure scalar function over every numeric leaf, preserving shape
    pub fn apply_scalar_fn(&self, f: &dyn Fn(f64) -> f64) -> ReckonResult<Matrix> {
        self.map_elements(&|element| element.apply_scalar_fn(f))
    }

    /// Element-wise fallible map producing a same-shape matrix
    pub fn map_elements(
        &self,
        f: &dyn Fn(&Value) -> ReckonResult<Value>,
    ) -> ReckonResult<Matrix> {
        let elements = self
            .elements
            .iter()
            .map(f)
            .collect::<ReckonResult<Vec<_>>>()?;
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            elements,
        })
    }

    /// Combine with another matrix element-wise after shape reconciliation
    pub fn pairwise(
        &self,
        other: &Matrix,
        f: &dyn Fn(&Value, &Value) -> ReckonResult<Value>,
    ) -> ReckonResult<Matrix> {
        let (lhs, rhs) = reconciled_shapes(self, other);
        let elements = lhs
            .elements
            .iter()
            .zip(&rhs.elements)
            .map(|(a, b)| f(a, b))
            .collect::<ReckonResult<Vec<_>>>()?;
        Ok(Matrix {
            rows: lhs.rows,
            cols: lhs.cols,
            elements,
        })
    }

    /// Short rendering used where a full grid would drown the output
    pub fn short_form(&self) -> String {
        format!("[{}x{} matrix]", self.rows, self.cols)
    }
}

/// Reconcile two matrices to a common shape, rows first, then columns
fn reconciled_shapes(a: &Matrix, b: &Matrix) -> (Matrix, Matrix) {
    let target_rows = a.rows.max(b.rows);
    let a = with_row_count(a, target_rows);
    let b = with_row_count(b, target_rows);

    let target_cols = a.cols.max(b.cols);
    (with_col_count(&a, target_cols), with_col_count(&b, target_cols))
}

/// Grow a matrix to `target` rows: a single row is repeated, anything else is
/// padded with zero rows
fn with_row_count(matrix: &Matrix, target: usize) -> Matrix {
    if matrix.rows == target {
        return matrix.clone();
    }
    let mut elements = Vec::with_capacity(target * matrix.cols);
    if matrix.rows == 1 {
        for _ in 0..target {
            elements.extend_from_slice(&matrix.elements);
        }
    } else {
        elements.extend_from_slice(&matrix.elements);
        elements.resize(target * matrix.cols, Value::Number(0.0));
    }
    Matrix {
        rows: target,
        cols: matrix.cols,
        elements,
    }
}

/// Grow a matrix to `target` columns: a single column is repeated per row,
/// anything else pads each row with zeros
fn with_col_count(matrix: &Matrix, target: usize) -> Matrix {
    if matrix.cols == target {
        return matrix.clone();
    }
    let mut elements = Vec::with_capacity(matrix.rows * target);
    for row in matrix.elements.chunks(matrix.cols.max(1)) {
        if matrix.cols == 1 {
            for _ in 0..target {
                elements.push(row[0].clone());
            }
        } else {
            elements.extend_from_slice(row);
            for _ in matrix.cols..target {
                elements.push(Value::Number(0.0));
            }
        }
    }
    Matrix {
        rows: matrix.rows,
        cols: target,
        elements,
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{{")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.elements[r * self.cols + c])?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}
