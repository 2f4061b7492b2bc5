//! Error taxonomy for splitting and merging.
//!
//! Every failure is raised synchronously during validation, before any view
//! or allocation is produced. There are no partial results and no recovery
//! path; callers fix their inputs and re-invoke.

use thiserror::Error;

/// Errors reported by the split and merge operations.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The image buffer is not contiguous row-major. Window views are built
    /// directly over the source slice, so sliced or transposed views must be
    /// copied into a standard-layout array first.
    #[error("image buffer is not contiguous row-major; pass a standard-layout view")]
    NotContiguous,

    /// The patch size tuple arity does not match the image dimensionality.
    #[error("`patch_size` is incompatible with the image shape: {got} entries for {ndim} axes")]
    ShapeMismatch { got: usize, ndim: usize },

    /// A patch extent exceeds the image extent on some axis.
    #[error("`patch_size` is too large: axis {axis} has extent {extent} but the patch wants {patch}")]
    PatchTooLarge {
        axis: usize,
        patch: usize,
        extent: usize,
    },

    /// A patch extent is zero.
    #[error("`patch_size` is too small: axis {axis} has a zero patch extent")]
    PatchTooSmall { axis: usize },

    /// A step value is zero.
    #[error("`step` must be >= 1")]
    StepTooSmall,

    /// A merge step larger than the patch extent means the grid was built
    /// with gaps between patches; such a grid cannot be stitched back.
    #[error("`step` {step} exceeds the patch extent {patch} on axis {axis}; the grid has gaps and cannot be merged")]
    StepTooLarge {
        axis: usize,
        step: usize,
        patch: usize,
    },

    /// Merge only supports a grid of 2D patches.
    #[error("only a grid of 2D patches (rows, cols, patch_rows, patch_cols) is supported, got shape {shape:?}")]
    UnsupportedRank { shape: Vec<usize> },

    /// The window geometry did not fit the source buffer. With validated
    /// inputs this cannot happen; it is surfaced rather than unwrapped.
    #[error("window geometry is inconsistent with the image buffer: {0}")]
    Window(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, PatchError>;
