//! Fail-fast input validation, run before any solving or extraction.

use crate::error::{PatchError, Result};

/// Check patch/step inputs against the image shape.
///
/// Order matters: a caller-fixed step is rejected first, then oversized
/// patches, then zero patches. A zero patch extent must be caught here
/// because the step solver floor-divides by `extent / patch`.
pub(crate) fn check_split_inputs(
    shape: &[usize],
    patch: &[usize],
    fixed_step: Option<usize>,
) -> Result<()> {
    debug_assert_eq!(shape.len(), patch.len());

    if let Some(step) = fixed_step {
        if step < 1 {
            return Err(PatchError::StepTooSmall);
        }
    }

    for (axis, (&extent, &p)) in shape.iter().zip(patch.iter()).enumerate() {
        if p > extent {
            return Err(PatchError::PatchTooLarge {
                axis,
                patch: p,
                extent,
            });
        }
    }

    for (axis, &p) in patch.iter().enumerate() {
        if p < 1 {
            return Err(PatchError::PatchTooSmall { axis });
        }
    }

    Ok(())
}

/// Every resolved step must be at least one pixel.
pub(crate) fn check_steps(steps: &[usize]) -> Result<()> {
    if steps.iter().any(|&s| s < 1) {
        return Err(PatchError::StepTooSmall);
    }
    Ok(())
}
