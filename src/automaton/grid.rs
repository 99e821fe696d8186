//! Field storage, toroidal addressing, and random seeding.

use rand::Rng;

use super::activation::{ALIVE, DEAD};

/// A dense 2D field of `f64` cells, stored row-major.
///
/// Extents are fixed at creation. All neighborhood reads go through
/// [`wrap_coord`], so the grid has no edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<f64>,
}

impl Field {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell values in row-major order.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }
}

/// Create a zero-filled field. Callers validate that both extents are positive.
pub fn create_field(rows: usize, cols: usize) -> Field {
    Field {
        rows,
        cols,
        cells: vec![DEAD; rows * cols],
    }
}

/// Build a field from row-major values. Returns `None` if the length does not match.
pub fn field_from_cells(rows: usize, cols: usize, cells: Vec<f64>) -> Option<Field> {
    if rows == 0 || cols == 0 || cells.len() != rows * cols {
        return None;
    }
    Some(Field { rows, cols, cells })
}

/// Reduce a possibly negative or overflowing coordinate onto `0..extent`.
#[inline]
pub fn wrap_coord(value: isize, extent: usize) -> usize {
    value.rem_euclid(extent as isize) as usize
}

/// Linear index for an in-range `(row, col)`.
#[inline]
pub fn index_of(field: &Field, row: usize, col: usize) -> usize {
    row * field.cols + col
}

/// Linear index for any `(row, col)`, wrapping toroidally.
#[inline]
pub fn wrapped_index(field: &Field, row: isize, col: isize) -> usize {
    index_of(
        field,
        wrap_coord(row, field.rows),
        wrap_coord(col, field.cols),
    )
}

/// Read a cell, wrapping out-of-range coordinates.
pub fn field_get(field: &Field, row: isize, col: isize) -> f64 {
    field.cells[wrapped_index(field, row, col)]
}

/// Write a cell, wrapping out-of-range coordinates.
pub fn field_set(field: &mut Field, row: isize, col: isize, value: f64) {
    let idx = wrapped_index(field, row, col);
    field.cells[idx] = value;
}

/// Overwrite every cell with an independent uniform draw from {0, 1}.
pub fn seed_binary<R: Rng + ?Sized>(field: &mut Field, rng: &mut R) {
    for cell in field.cells.iter_mut() {
        *cell = if rng.gen_bool(0.5) { ALIVE } else { DEAD };
    }
}
