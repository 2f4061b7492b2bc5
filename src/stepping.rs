//! Per-axis step and overlap derivation.
//!
//! Two sibling policies share the same remainder arithmetic and differ only
//! in how they report the resulting grid:
//!
//! - **adaptive** — choose the smallest per-step overlap so that the grid
//!   covers the axis with no excluded pixels (overlap may differ between the
//!   two axes).
//! - **minimal** — the same derivation, but an externally supplied fixed
//!   step overrides it, and the diagnostics are recomputed from the realized
//!   grid.
//!
//! Axes are solved independently; there is no cross-axis coupling. A third
//! image axis, when present, is never stepped here — it is tiled by its own
//! patch extent in the window extractor.
//!
//! Validation (`patch >= 1`, `patch <= extent`, `step >= 1`) must have run
//! before these functions; the remainder formula floor-divides by
//! `extent / patch`.

use log::debug;

/// Structured diagnostics for a split, indexed per axis (0 = rows,
/// 1 = cols). Reporting only; it never influences the grid geometry itself.
///
/// `excluded_px` is a raw residual count and is not clamped; with a
/// caller-fixed step that leaves gaps, `overlap_px` goes negative. The
/// realized window shape always follows `(extent - patch) / step + 1`
/// regardless of what is reported here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Patch count per axis.
    pub patches: [usize; 2],
    /// Resolved step per axis.
    pub step: [usize; 2],
    /// Overlapping pixel count per axis.
    pub overlap_px: [i64; 2],
    /// Excluded pixel count per axis, unclamped.
    pub excluded_px: [i64; 2],
    /// Total pixel count of the source image.
    pub total_px: usize,
}

/// Minimum per-step overlap letting `n + 1` patches cover the axis, for an
/// extent that is not a multiple of the patch size. Rounded up, so an
/// overlap of 8.3 becomes 9.
fn remainder_overlap(extent: usize, patch: usize) -> (usize, usize) {
    let n = extent / patch;
    let diff = extent - patch * n;
    let overlap = (patch - diff).div_ceil(n);
    (patch - overlap, overlap)
}

/// One axis under the adaptive (no pixel excluded) policy.
///
/// Returns `(step, patches, overlap_px, excluded_px)`. The overlap pixel
/// count spans the full other axis, so it is `overlap * other_extent`.
fn adaptive_axis(
    extent: usize,
    patch: usize,
    other_extent: usize,
    fixed: Option<usize>,
) -> (usize, usize, i64, i64) {
    if let Some(step) = fixed {
        // Caller-fixed step: report from the realized grid.
        let n = (extent - patch) / step + 1;
        let overlap = patch as i64 - step as i64;
        let covered = (patch * n) as i64 - overlap * (n as i64 - 1);
        return (
            step,
            n,
            overlap * other_extent as i64,
            extent as i64 - covered,
        );
    }

    let n = extent / patch;
    if extent % patch == 0 {
        // Exact tiling needs no overlap.
        return (patch, n, 0, 0);
    }

    let (step, overlap) = remainder_overlap(extent, patch);
    // Residual accounting: coverage of n + 1 patches minus the n overlapped
    // seams. Not clamped.
    let covered = (patch * (n + 1)) as i64 - (overlap * n) as i64;
    (
        step,
        n + 1,
        (overlap * other_extent) as i64,
        extent as i64 - covered,
    )
}

/// One axis under the minimal-overlap policy. Diagnostics always derive
/// from the realized patch count, which can differ from the pre-overlap
/// count when a fixed step is supplied.
fn minimal_axis(extent: usize, patch: usize, fixed: Option<usize>) -> (usize, usize, i64, i64) {
    let step = match fixed {
        Some(s) => s,
        None if extent % patch == 0 => patch,
        None => remainder_overlap(extent, patch).0,
    };

    let n = (extent - patch) / step + 1;
    let overlap_px = (patch as i64 - step as i64) * (n as i64 - 1);
    let excluded = extent as i64 - ((patch * n) as i64 - overlap_px);
    (step, n, overlap_px, excluded)
}

/// Solve both axes under the adaptive policy.
pub(crate) fn solve_adaptive(
    shape: [usize; 2],
    patch: [usize; 2],
    fixed: Option<usize>,
) -> ([usize; 2], SplitReport) {
    let (step_r, n_r, ovr_r, exc_r) = adaptive_axis(shape[0], patch[0], shape[1], fixed);
    let (step_c, n_c, ovr_c, exc_c) = adaptive_axis(shape[1], patch[1], shape[0], fixed);

    let report = SplitReport {
        patches: [n_r, n_c],
        step: [step_r, step_c],
        overlap_px: [ovr_r, ovr_c],
        excluded_px: [exc_r, exc_c],
        total_px: shape[0] * shape[1],
    };
    debug!(
        "adaptive split {}x{} patch {:?}: step {:?}, {:?} patches, excluded {:?}",
        shape[0], shape[1], patch, report.step, report.patches, report.excluded_px
    );
    ([step_r, step_c], report)
}

/// Solve both axes under the minimal-overlap policy.
pub(crate) fn solve_minimal(
    shape: [usize; 2],
    patch: [usize; 2],
    fixed: Option<usize>,
) -> ([usize; 2], SplitReport) {
    let (step_r, n_r, ovr_r, exc_r) = minimal_axis(shape[0], patch[0], fixed);
    let (step_c, n_c, ovr_c, exc_c) = minimal_axis(shape[1], patch[1], fixed);

    let report = SplitReport {
        patches: [n_r, n_c],
        step: [step_r, step_c],
        overlap_px: [ovr_r, ovr_c],
        excluded_px: [exc_r, exc_c],
        total_px: shape[0] * shape[1],
    };
    debug!(
        "minimal split {}x{} patch {:?}: step {:?}, {:?} patches, excluded {:?}",
        shape[0], shape[1], patch, report.step, report.patches, report.excluded_px
    );
    ([step_r, step_c], report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_overlap_rounds_up() {
        // extent 3, patch 2: one leftover pixel, one patch of slack over a
        // single seam -> overlap 1, step 1.
        assert_eq!(remainder_overlap(3, 2), (1, 1));
        // extent 11, patch 4: slack 1 over 2 seams rounds up to overlap 1.
        assert_eq!(remainder_overlap(11, 4), (3, 1));
        // extent 9, patch 4: slack 3 over 2 seams rounds up to overlap 2.
        assert_eq!(remainder_overlap(9, 4), (2, 2));
    }

    #[test]
    fn test_adaptive_documented_example() {
        // The 3x4 image with 2x2 patches: overlap 1 on the row axis, exact
        // tiling on the column axis, nothing excluded.
        let (steps, report) = solve_adaptive([3, 4], [2, 2], None);
        assert_eq!(steps, [1, 2]);
        assert_eq!(report.patches, [2, 2]);
        assert_eq!(report.overlap_px, [4, 0]);
        assert_eq!(report.excluded_px, [0, 0]);
        assert_eq!(report.total_px, 12);
    }

    #[test]
    fn test_adaptive_exact_division_has_no_overlap() {
        let (steps, report) = solve_adaptive([8, 8], [4, 4], None);
        assert_eq!(steps, [4, 4]);
        assert_eq!(report.patches, [2, 2]);
        assert_eq!(report.overlap_px, [0, 0]);
        assert_eq!(report.excluded_px, [0, 0]);
    }

    #[test]
    fn test_adaptive_residual_accounting_is_not_clamped() {
        // extent 11, patch 4: rounding the overlap up cannot absorb the
        // whole remainder, so the residual count reports one leftover
        // pixel. Not clamped.
        let (steps, report) = solve_adaptive([11, 8], [4, 4], None);
        assert_eq!(steps, [3, 4]);
        assert_eq!(report.patches, [3, 2]);
        assert_eq!(report.excluded_px, [1, 0]);
    }

    #[test]
    fn test_adaptive_fixed_step_reports_realized_grid() {
        // 8x8 with 4x4 patches at step 2: 3 patches per axis, coverage
        // 3*4 - 2*2 = 8, nothing excluded, overlap 2 columns of 8 pixels.
        let (steps, report) = solve_adaptive([8, 8], [4, 4], Some(2));
        assert_eq!(steps, [2, 2]);
        assert_eq!(report.patches, [3, 3]);
        assert_eq!(report.overlap_px, [16, 16]);
        assert_eq!(report.excluded_px, [0, 0]);
    }

    #[test]
    fn test_adaptive_fixed_step_excludes_remainder() {
        let (_, report) = solve_adaptive([6, 6], [4, 4], Some(3));
        // n = (6-4)/3 + 1 = 1, coverage = 4, excluded = 2 per axis.
        assert_eq!(report.patches, [1, 1]);
        assert_eq!(report.excluded_px, [2, 2]);

        let (_, report) = solve_adaptive([4, 4], [3, 3], Some(1));
        // n = 2, overlap 2, coverage 3*2 - 2*1 = 4 -> excluded 0.
        assert_eq!(report.excluded_px, [0, 0]);
    }

    #[test]
    fn test_minimal_matches_adaptive_remainder_formula() {
        let (steps, report) = solve_minimal([3, 4], [2, 2], None);
        assert_eq!(steps, [1, 2]);
        assert_eq!(report.patches, [2, 2]);
        // Realized accounting: rows cover 2*2 - 1*1 = 3, cols 2*2 - 0.
        assert_eq!(report.overlap_px, [1, 0]);
        assert_eq!(report.excluded_px, [0, 0]);
    }

    #[test]
    fn test_minimal_fixed_step_can_exclude_pixels() {
        // 10 wide, patch 4, fixed step 4: 2 patches cover 8, 2 excluded.
        let (steps, report) = solve_minimal([10, 10], [4, 4], Some(4));
        assert_eq!(steps, [4, 4]);
        assert_eq!(report.patches, [2, 2]);
        assert_eq!(report.overlap_px, [0, 0]);
        assert_eq!(report.excluded_px, [2, 2]);
    }

    #[test]
    fn test_minimal_fixed_step_gaps_report_negative_overlap() {
        // Step beyond the patch extent leaves gaps; the overlap count goes
        // negative and the excluded count picks up the uncovered pixels.
        let (_, report) = solve_minimal([10, 10], [3, 3], Some(4));
        // n = (10-3)/4 + 1 = 2, overlap = (3-4)*1 = -1, coverage 7.
        assert_eq!(report.patches, [2, 2]);
        assert_eq!(report.overlap_px, [-1, -1]);
        assert_eq!(report.excluded_px, [3, 3]);
    }

    #[test]
    fn test_axes_solved_independently() {
        // A rectangular image with a rectangular patch: each axis gets its
        // own remainder arithmetic.
        let (steps, report) = solve_minimal([12, 7], [4, 3], None);
        assert_eq!(steps[0], 4); // 12 % 4 == 0
        assert_eq!(steps[1], 2); // 7 = 2*3 + 1, overlap 1
        assert_eq!(report.patches, [3, 3]);
    }
}
