//! Dense 2D grids for wind component and coordinate arrays.

use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// A dense row-major 2D array of f64 values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2 {
    /// Create a grid from row-major data. The data length must equal
    /// `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> ChartResult<Self> {
        if data.len() != rows * cols {
            return Err(ChartError::ShapeMismatch(format!(
                "expected {} values for a {}x{} grid, got {}",
                rows * cols,
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a grid filled with a single value.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Create a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at (row, col), or None when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Row-major view of the underlying data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Block-average the grid by integer factors per axis.
    ///
    /// Output shape is `(rows / rebinx, cols / rebiny)`; each output cell is
    /// the mean of its `rebinx * rebiny` block. Both dimensions must divide
    /// evenly by their factor.
    pub fn rebin(&self, rebinx: usize, rebiny: usize) -> ChartResult<Grid2> {
        if rebinx == 0 || self.rows % rebinx != 0 {
            return Err(ChartError::InvalidRebinFactor {
                axis: "rows",
                len: self.rows,
                factor: rebinx,
            });
        }
        if rebiny == 0 || self.cols % rebiny != 0 {
            return Err(ChartError::InvalidRebinFactor {
                axis: "cols",
                len: self.cols,
                factor: rebiny,
            });
        }

        let out_rows = self.rows / rebinx;
        let out_cols = self.cols / rebiny;
        let block = (rebinx * rebiny) as f64;

        let mut data = Vec::with_capacity(out_rows * out_cols);
        for br in 0..out_rows {
            for bc in 0..out_cols {
                let mut sum = 0.0;
                for r in br * rebinx..(br + 1) * rebinx {
                    for c in bc * rebiny..(bc + 1) * rebiny {
                        sum += self.data[r * self.cols + c];
                    }
                }
                data.push(sum / block);
            }
        }

        Ok(Grid2 {
            rows: out_rows,
            cols: out_cols,
            data,
        })
    }

    /// Return a copy of the grid with one row removed.
    pub fn drop_row(&self, index: usize) -> ChartResult<Grid2> {
        if index >= self.rows {
            return Err(ChartError::RowOutOfRange {
                index,
                rows: self.rows,
            });
        }

        let mut data = Vec::with_capacity((self.rows - 1) * self.cols);
        for r in 0..self.rows {
            if r == index {
                continue;
            }
            data.extend_from_slice(&self.data[r * self.cols..(r + 1) * self.cols]);
        }

        Ok(Grid2 {
            rows: self.rows - 1,
            cols: self.cols,
            data,
        })
    }
}
