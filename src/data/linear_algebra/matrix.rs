//! # Matrix implementations
//!
//! A dense, row major matrix with the elementary row operations used while pivoting.
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use crate::data::number_types::traits::Value;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Value> DenseMatrix<F> {
    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in self.data[i].iter_mut() {
            *value = *value * factor;
        }
    }

    /// Divide all values in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(divisor != F::zero());

        for value in self.data[i].iter_mut() {
            *value = *value / divisor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            let write = &mut self.data[write_row][j];
            *write = *write + factor * read;
        }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i][j]
    }
}
