//! Localized edits: square brush painting and pattern stamping.
//!
//! Both wrap toroidally, so a brush or pattern near an edge continues on the
//! opposite side. A square wider than the field covers each cell once.

use super::activation::ALIVE;
use super::grid::{wrap_coord, Field};

/// Set every cell of the inclusive square `[row-h, row+h] x [col-h, col+h]` to `value`.
///
/// # Returns
/// Number of distinct cells written.
pub fn fill_square(
    field: &mut Field,
    row: isize,
    col: isize,
    half_size: usize,
    value: f64,
) -> usize {
    let rows = field.rows();
    let cols = field.cols();

    // Clamp the span to the extent so oversized brushes don't revisit cells.
    let span = half_size.saturating_mul(2).saturating_add(1);
    let span_rows = span.min(rows);
    let span_cols = span.min(cols);
    let top = row - half_size.min(rows) as isize;
    let left = col - half_size.min(cols) as isize;

    for dr in 0..span_rows {
        let r = wrap_coord(top + dr as isize, rows);
        let start = r * cols;
        for dc in 0..span_cols {
            let c = wrap_coord(left + dc as isize, cols);
            field.cells[start + c] = value;
        }
    }

    span_rows * span_cols
}

/// Paint the square brush around `(row, col)` with live cells.
pub fn paint(field: &mut Field, row: isize, col: isize, half_size: usize) -> usize {
    fill_square(field, row, col, half_size, ALIVE)
}

/// Set each `(row, col)` offset, relative to the anchor, to a live cell.
///
/// # Returns
/// Number of offsets applied.
pub fn stamp(
    field: &mut Field,
    anchor_row: isize,
    anchor_col: isize,
    offsets: &[(isize, isize)],
) -> usize {
    let rows = field.rows();
    let cols = field.cols();

    for &(dr, dc) in offsets {
        let r = wrap_coord(anchor_row + dr, rows);
        let c = wrap_coord(anchor_col + dc, cols);
        field.cells[r * cols + c] = ALIVE;
    }

    offsets.len()
}
