//! Public split operations.
//!
//! Two policies over the same windowing machinery:
//!
//! - [`split`] / [`split3`] — adaptive: derive the per-axis overlap so the
//!   grid covers the image without excluding pixels, at the cost of uneven
//!   overlap between the axes.
//! - [`split_with_step`] — minimal overlap, optionally overridden by a
//!   caller-fixed step; also returns the resolved step, which [`crate::merge`]
//!   needs to reverse the split.
//!
//! All variants validate first, solve second, and only then build the view;
//! a failure never produces a partial result. The `_report` variants return
//! the structured [`SplitReport`] alongside the grid instead of printing
//! diagnostics.

use ndarray::{ArrayView2, ArrayView3, ArrayView4, ArrayView6};

use crate::error::Result;
use crate::params::{GridStep, PatchSize};
use crate::stepping::{solve_adaptive, solve_minimal, SplitReport};
use crate::validate::{check_split_inputs, check_steps};
use crate::windows::{window_view2, window_view3};

/// Split a 2D image into a grid of possibly-overlapping patches, choosing
/// the per-axis overlap so that no pixel is excluded.
///
/// `step` overrides the solver with a fixed step on both axes. The returned
/// grid is a zero-copy view with shape
/// `(grid_rows, grid_cols, patch_rows, patch_cols)`.
///
/// # Examples
///
/// ```
/// use ndarray::array;
///
/// let image = array![[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]];
/// // 2x2 grid of 2x2 patches: overlap 1 on the row axis, none on the
/// // column axis, zero pixels excluded.
/// let patches = patchgrid::split(image.view(), 2, None).unwrap();
/// assert_eq!(patches.shape(), &[2, 2, 2, 2]);
/// ```
pub fn split<'a, A>(
    image: ArrayView2<'a, A>,
    patch_size: impl Into<PatchSize>,
    step: Option<usize>,
) -> Result<ArrayView4<'a, A>> {
    split_with_report(image, patch_size, step).map(|(grid, _)| grid)
}

/// [`split`] with the structured diagnostics record.
pub fn split_with_report<'a, A>(
    image: ArrayView2<'a, A>,
    patch_size: impl Into<PatchSize>,
    step: Option<usize>,
) -> Result<(ArrayView4<'a, A>, SplitReport)> {
    let patch = patch_size.into().resolve2()?;
    let (h, w) = image.dim();
    check_split_inputs(&[h, w], &patch, step)?;

    let (steps, report) = solve_adaptive([h, w], patch, step);
    check_steps(&steps)?;

    let grid = window_view2(image, patch, steps)?;
    Ok((grid, report))
}

/// Adaptive split of a 3D array into a 6-D grid of cuboid patches.
///
/// The first two axes are stepped by the solver exactly as in [`split`];
/// the trailing axis is tiled by its own patch extent (pass a patch depth
/// equal to the image depth to carry the full range through each patch).
pub fn split3<'a, A>(
    image: ArrayView3<'a, A>,
    patch_size: impl Into<PatchSize>,
    step: Option<usize>,
) -> Result<ArrayView6<'a, A>> {
    split3_with_report(image, patch_size, step).map(|(grid, _)| grid)
}

/// [`split3`] with the structured diagnostics record. The report covers the
/// two stepped axes.
pub fn split3_with_report<'a, A>(
    image: ArrayView3<'a, A>,
    patch_size: impl Into<PatchSize>,
    step: Option<usize>,
) -> Result<(ArrayView6<'a, A>, SplitReport)> {
    let patch = patch_size.into().resolve3()?;
    let (d0, d1, d2) = image.dim();
    check_split_inputs(&[d0, d1, d2], &patch, step)?;

    let ([step0, step1], report) = solve_adaptive([d0, d1], [patch[0], patch[1]], step);
    // The trailing axis is never offset: a fixed step broadcasts to it,
    // otherwise it is tiled patch-by-patch.
    let step2 = step.unwrap_or(patch[2]);
    check_steps(&[step0, step1, step2])?;

    let grid = window_view3(image, patch, [step0, step1, step2])?;
    Ok((grid, report))
}

/// Split a 2D image with the least overlap, or with a caller-fixed step.
///
/// Returns the grid together with the resolved [`GridStep`], which
/// [`crate::merge`] requires to stitch the patches back.
///
/// # Examples
///
/// ```
/// use ndarray::array;
///
/// let image = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0], [9.0, 10.0, 11.0, 12.0]];
/// let (patches, step) = patchgrid::split_with_step(image.view(), (2, 2), None).unwrap();
/// assert_eq!(patches.shape(), &[2, 2, 2, 2]);
///
/// let restored = patchgrid::merge(patches.into_dyn(), (3, 4), step, false).unwrap();
/// assert_eq!(restored, image);
/// ```
pub fn split_with_step<'a, A>(
    image: ArrayView2<'a, A>,
    patch_size: impl Into<PatchSize>,
    step: Option<usize>,
) -> Result<(ArrayView4<'a, A>, GridStep)> {
    split_with_step_report(image, patch_size, step).map(|(grid, step, _)| (grid, step))
}

/// [`split_with_step`] with the structured diagnostics record.
pub fn split_with_step_report<'a, A>(
    image: ArrayView2<'a, A>,
    patch_size: impl Into<PatchSize>,
    step: Option<usize>,
) -> Result<(ArrayView4<'a, A>, GridStep, SplitReport)> {
    let patch = patch_size.into().resolve2()?;
    let (h, w) = image.dim();
    check_split_inputs(&[h, w], &patch, step)?;

    let (steps, report) = solve_minimal([h, w], patch, step);
    check_steps(&steps)?;

    let grid = window_view2(image, patch, steps)?;
    Ok((grid, GridStep::from(steps), report))
}
