//! Cell-centred square survey grid.
//!
//! The survey area is a square of side `length` with isotropic station
//! spacing `dx`, giving `n = floor(length / dx)` cells per axis. Cell
//! centers are symmetric about the origin; both axes share the same
//! center coordinates.

use ndarray::Array2;

use crate::forward::ForwardError;

/// A square, cell-centred survey grid.
#[derive(Debug, Clone)]
pub struct SurveyGrid {
    centers: Vec<f64>,
    n: usize,
    dx: f64,
}

impl SurveyGrid {
    /// Build a grid of `floor(length / dx)` cells per axis, centred on the
    /// origin.
    pub fn new(length: f64, dx: f64) -> Result<Self, ForwardError> {
        if !(dx > 0.0) || !(length > 0.0) {
            return Err(ForwardError::InvalidGrid {
                length,
                spacing: dx,
            });
        }
        let n = (length / dx).floor() as usize;
        if n < 1 {
            return Err(ForwardError::InvalidGrid {
                length,
                spacing: dx,
            });
        }

        let half = n as f64 * dx / 2.0;
        let centers = (0..n)
            .map(|i| (i as f64 + 0.5) * dx - half)
            .collect();

        Ok(Self { centers, n, dx })
    }

    /// Number of cells along each axis.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Station spacing (m).
    pub fn spacing(&self) -> f64 {
        self.dx
    }

    /// Cell-center coordinates, shared by both axes.
    pub fn cell_centers(&self) -> &[f64] {
        &self.centers
    }

    /// Spatial extent [x_min, x_max, y_min, y_max] of the cell edges.
    pub fn extent(&self) -> [f64; 4] {
        let half = self.n as f64 * self.dx / 2.0;
        [-half, half, -half, half]
    }

    /// All cell-center coordinates at a fixed height, as an (n², 3) array
    /// with x varying fastest (row index = iy·n + ix).
    pub fn points_at_height(&self, z: f64) -> Array2<f64> {
        let n = self.n;
        let mut pts = Array2::zeros((n * n, 3));
        for iy in 0..n {
            for ix in 0..n {
                let row = iy * n + ix;
                pts[[row, 0]] = self.centers[ix];
                pts[[row, 1]] = self.centers[iy];
                pts[[row, 2]] = z;
            }
        }
        pts
    }

    /// Flat index of the cell whose center is closest to (x, y).
    pub fn nearest_cell(&self, x: f64, y: f64) -> usize {
        let ix = self.nearest_axis_index(x);
        let iy = self.nearest_axis_index(y);
        iy * self.n + ix
    }

    fn nearest_axis_index(&self, coord: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, &c) in self.centers.iter().enumerate() {
            let dist = (c - coord).abs();
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best
    }
}
