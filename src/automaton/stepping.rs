//! One generation: convolve, activate, verify, commit.

use rayon::prelude::*;

use super::convolve::convolve_into;
use super::grid::Field;
use super::rules::RuleSet;
use crate::error::EngineError;

/// Advance `field` by one generation under `rule`.
///
/// Scores and activations are written into `back`, which is resized to the
/// field if needed. The buffers are swapped only after every new value is
/// finite; on a non-finite value the field keeps its previous contents and
/// the first offending cell (in row-major order) is reported.
pub fn step_field(
    field: &mut Field,
    back: &mut Vec<f64>,
    rule: &RuleSet,
) -> Result<(), EngineError> {
    let len = field.cells.len();
    if back.len() != len {
        back.resize(len, 0.0);
    }

    convolve_into(field, &rule.kernel, back);

    let activation = rule.activation;
    back.par_iter_mut().for_each(|cell| *cell = activation.apply(*cell));

    if let Some(idx) = back.par_iter().position_first(|v| !v.is_finite()) {
        let cols = field.cols();
        return Err(EngineError::NonFiniteResult {
            rule: rule.name.clone(),
            row: idx / cols,
            col: idx % cols,
            value: back[idx],
        });
    }

    std::mem::swap(&mut field.cells, back);
    Ok(())
}
