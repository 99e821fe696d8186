//! Toroidal 3x3 convolution.
//!
//! Reads only the input field and writes only the output buffer, so rows can be
//! scored in any order or in parallel without seeing partially updated values.

use rayon::prelude::*;

use super::grid::{create_field, Field};
use super::kernel::Kernel;

/// Score every cell of `field` against `kernel`, returning a new field of the same shape.
pub fn convolve(field: &Field, kernel: &Kernel) -> Field {
    let mut scores = create_field(field.rows(), field.cols());
    convolve_into(field, kernel, &mut scores.cells);
    scores
}

/// Score every cell of `field` into `out`, which must hold `rows * cols` values.
///
/// `out[r * cols + c] = Σ field[(r+dy) mod rows][(c+dx) mod cols] * kernel[dy+1][dx+1]`.
pub fn convolve_into(field: &Field, kernel: &Kernel, out: &mut [f64]) {
    let rows = field.rows();
    let cols = field.cols();
    assert_eq!(out.len(), rows * cols, "score buffer does not match field");

    out.par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, out_row)| convolve_row(field, kernel, row, out_row));
}

/// Score a single row. Neighbor rows and columns wrap at the edges.
fn convolve_row(field: &Field, kernel: &Kernel, row: usize, out_row: &mut [f64]) {
    let rows = field.rows();
    let cols = field.cols();

    let above = field.row((row + rows - 1) % rows);
    let here = field.row(row);
    let below = field.row((row + 1) % rows);
    let bands = [(-1isize, above), (0, here), (1, below)];

    for (col, score) in out_row.iter_mut().enumerate() {
        let left = (col + cols - 1) % cols;
        let right = (col + 1) % cols;

        let mut acc = 0.0;
        for &(dy, band) in &bands {
            acc += band[left] * kernel.at(dy, -1);
            acc += band[col] * kernel.at(dy, 0);
            acc += band[right] * kernel.at(dy, 1);
        }
        *score = acc;
    }
}
