//! # patchgrid
//!
//! Splits a 2D (or 3D) numeric array into a regular grid of
//! possibly-overlapping rectangular patches, and reconstructs the original
//! 2D array from a 4-D patch grid.
//!
//! Two split policies are provided:
//!
//! - [`split`] derives a per-axis step whose overlap guarantees that no
//!   pixel is excluded (the overlap may differ between the axes).
//! - [`split_with_step`] minimizes overlap instead, falls back to a
//!   caller-fixed step, and returns the resolved step so the grid can be
//!   merged back.
//!
//! Patch grids are zero-copy strided views over the source buffer:
//! overlapping grid cells alias shared elements and nothing is allocated.
//! [`merge`] reverses the split for 2D images, stitching overlapping tiles
//! without double counting and optionally resampling to the exact original
//! extent.
//!
//! ```
//! use ndarray::array;
//! use patchgrid::{merge, split_with_step};
//!
//! let image = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0], [9.0, 10.0, 11.0, 12.0]];
//!
//! // 2x2 grid of 2x2 patches, zero pixels excluded.
//! let (patches, step) = split_with_step(image.view(), (2, 2), None).unwrap();
//! assert_eq!(patches.shape(), &[2, 2, 2, 2]);
//!
//! let restored = merge(patches.into_dyn(), (3, 4), step, true).unwrap();
//! assert_eq!(restored, image);
//! ```

pub mod error;
pub mod float_trait;
pub mod merge;
pub mod params;
pub mod resample;
pub mod split;
pub mod stepping;
pub mod windows;

mod validate;

// Re-export commonly used types at the crate root
pub use error::PatchError;
pub use float_trait::PatchFloat;
pub use merge::merge;
pub use params::{GridStep, PatchSize};
pub use resample::resize_bilinear;
pub use split::{
    split, split3, split3_with_report, split_with_report, split_with_step,
    split_with_step_report,
};
pub use stepping::SplitReport;
