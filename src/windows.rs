//! Zero-copy windowed views over the source image.
//!
//! A patch grid is a pure shape/stride computation: the leading dimensions
//! enumerate grid position (stride = step * source stride per axis), the
//! trailing dimensions address pixels inside a patch (the source's own
//! strides). No element is copied; overlapping grid cells alias shared
//! source elements, and the view remains valid exactly as long as the
//! borrow of the source.
//!
//! Rust forbids aliasing mutable views, so the grid is exposed read-only;
//! the non-copy guarantee is observable through pointer identity (see the
//! tests below).

use ndarray::{ArrayView2, ArrayView3, ArrayView4, ArrayView6, ShapeBuilder};

use crate::error::{PatchError, Result};

/// Number of grid positions along one axis.
#[inline]
pub(crate) fn grid_extent(extent: usize, patch: usize, step: usize) -> usize {
    (extent - patch) / step + 1
}

/// Build the 4-D `(grid_rows, grid_cols, patch_rows, patch_cols)` view of a
/// 2D image.
///
/// The image must be in standard row-major layout; the grid strides are
/// composed directly over its backing slice.
pub fn window_view2<'a, A>(
    image: ArrayView2<'a, A>,
    patch: [usize; 2],
    step: [usize; 2],
) -> Result<ArrayView4<'a, A>> {
    let (h, w) = image.dim();
    let slice = image.to_slice().ok_or(PatchError::NotContiguous)?;

    let shape = (
        grid_extent(h, patch[0], step[0]),
        grid_extent(w, patch[1], step[1]),
        patch[0],
        patch[1],
    );
    // Standard layout: row stride w, column stride 1. Stepping a grid axis
    // advances by step rows/cols in the source.
    let strides = (step[0] * w, step[1], w, 1);

    Ok(ArrayView4::from_shape(shape.strides(strides), slice)?)
}

/// Build the 6-D window view of a 3D image. The first two axes follow the
/// solved steps; the third axis is tiled by its own patch extent, so a
/// patch depth equal to the image depth passes the full range through.
pub fn window_view3<'a, A>(
    image: ArrayView3<'a, A>,
    patch: [usize; 3],
    step: [usize; 3],
) -> Result<ArrayView6<'a, A>> {
    let (d0, d1, d2) = image.dim();
    let slice = image.to_slice().ok_or(PatchError::NotContiguous)?;

    let shape = (
        grid_extent(d0, patch[0], step[0]),
        grid_extent(d1, patch[1], step[1]),
        grid_extent(d2, patch[2], step[2]),
        patch[0],
        patch[1],
        patch[2],
    );
    let (s0, s1, s2) = (d1 * d2, d2, 1);
    let strides = (step[0] * s0, step[1] * s1, step[2] * s2, s0, s1, s2);

    Ok(ArrayView6::from_shape(shape.strides(strides), slice)?)
}
