//! Reconstruction of a 2D image from a 4-D grid of patches.
//!
//! The inverse of [`crate::split_with_step`]: each patch writes only its
//! non-overlapping leading region, so overlapped pixels are never double
//! counted. The last grid row and column write their full span to cover the
//! image border, and the bottom-right patch lands unmodified. Overlap
//! regions follow last-write-wins semantics in grid order; there is no
//! blending.
//!
//! Only the 4-D -> 2-D case is supported. All checks run before the first
//! write: reconstruction is all-or-nothing per call.

use log::debug;
use ndarray::{s, Array2, ArrayViewD, Ix4};

use crate::error::{PatchError, Result};
use crate::float_trait::PatchFloat;
use crate::params::GridStep;
use crate::resample::resize_bilinear;

/// Reconstruct the original 2D image from a grid of patches.
///
/// `patches` must have rank 4, shaped
/// `(grid_rows, grid_cols, patch_rows, patch_cols)`; `step` is the step the
/// grid was split with. The assembled array has extent
/// `(step.rows * (grid_rows - 1) + patch_rows, step.cols * (grid_cols - 1) + patch_cols)`,
/// which can fall short of `original_dims` when the split excluded pixels.
/// With `resize` set, the result is resampled bilinearly to exactly
/// `original_dims`; otherwise it is returned at its natural extent.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use patchgrid::{merge, split_with_step};
///
/// let image = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0], [9.0, 10.0, 11.0, 12.0]];
/// let (patches, step) = split_with_step(image.view(), (2, 2), None).unwrap();
/// let restored = merge(patches.into_dyn(), (3, 4), step, true).unwrap();
/// assert_eq!(restored, image);
/// ```
pub fn merge<F: PatchFloat>(
    patches: ArrayViewD<'_, F>,
    original_dims: (usize, usize),
    step: GridStep,
    resize: bool,
) -> Result<Array2<F>> {
    let shape = patches.shape().to_vec();
    let grid = patches
        .into_dimensionality::<Ix4>()
        .map_err(|_| PatchError::UnsupportedRank {
            shape: shape.clone(),
        })?;

    let (rows, cols, patch_r, patch_c) = grid.dim();
    if rows == 0 || cols == 0 || patch_r == 0 || patch_c == 0 {
        return Err(PatchError::UnsupportedRank { shape });
    }

    let (step_r, step_c) = (step.rows, step.cols);
    if step_r < 1 || step_c < 1 {
        return Err(PatchError::StepTooSmall);
    }
    if step_r > patch_r {
        return Err(PatchError::StepTooLarge {
            axis: 0,
            step: step_r,
            patch: patch_r,
        });
    }
    if step_c > patch_c {
        return Err(PatchError::StepTooLarge {
            axis: 1,
            step: step_c,
            patch: patch_c,
        });
    }

    let out_h = step_r * (rows - 1) + patch_r;
    let out_w = step_c * (cols - 1) + patch_c;
    let mut out = Array2::<F>::zeros((out_h, out_w));
    debug!(
        "merge {}x{} grid of {}x{} patches at step ({}, {}) -> {}x{}",
        rows, cols, patch_r, patch_c, step_r, step_c, out_h, out_w
    );

    // Interior cells: only the leading (step_r, step_c) region, disjoint by
    // construction.
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            out.slice_mut(s![r * step_r..(r + 1) * step_r, c * step_c..(c + 1) * step_c])
                .assign(&grid.slice(s![r, c, ..step_r, ..step_c]));
        }
    }

    // Last column: full patch width over the rightmost band.
    let band_c = (cols - 1) * step_c;
    for r in 0..rows - 1 {
        out.slice_mut(s![r * step_r..(r + 1) * step_r, band_c..])
            .assign(&grid.slice(s![r, cols - 1, ..step_r, ..]));
    }

    // Last row: full patch height over the bottom band.
    let band_r = (rows - 1) * step_r;
    for c in 0..cols - 1 {
        out.slice_mut(s![band_r.., c * step_c..(c + 1) * step_c])
            .assign(&grid.slice(s![rows - 1, c, .., ..step_c]));
    }

    // Bottom-right corner: the full patch, unmodified.
    out.slice_mut(s![band_r.., band_c..])
        .assign(&grid.slice(s![rows - 1, cols - 1, .., ..]));

    if resize && (out_h, out_w) != original_dims {
        return Ok(resize_bilinear(out.view(), original_dims));
    }
    Ok(out)
}
