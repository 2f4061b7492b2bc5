//! Patch size and step parameters.
//!
//! A scalar patch size broadcasts to every axis; a tuple must carry one
//! entry per axis. Normalization to a fixed per-axis array happens here,
//! before any solver or window arithmetic runs.

use crate::error::{PatchError, Result};

/// Requested patch extent, scalar or per-axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchSize {
    /// One extent broadcast across all axes.
    Square(usize),
    /// Per-axis extents for a 2D image, in (rows, cols) order.
    Rect(usize, usize),
    /// Per-axis extents for a 3D image, in array axis order.
    Cuboid(usize, usize, usize),
}

impl From<usize> for PatchSize {
    fn from(p: usize) -> Self {
        PatchSize::Square(p)
    }
}

impl From<(usize, usize)> for PatchSize {
    fn from((r, c): (usize, usize)) -> Self {
        PatchSize::Rect(r, c)
    }
}

impl From<(usize, usize, usize)> for PatchSize {
    fn from((a, b, c): (usize, usize, usize)) -> Self {
        PatchSize::Cuboid(a, b, c)
    }
}

impl PatchSize {
    fn arity(self) -> usize {
        match self {
            PatchSize::Square(_) => 1,
            PatchSize::Rect(..) => 2,
            PatchSize::Cuboid(..) => 3,
        }
    }

    /// Normalize to per-axis extents for a 2D image.
    pub(crate) fn resolve2(self) -> Result<[usize; 2]> {
        match self {
            PatchSize::Square(p) => Ok([p, p]),
            PatchSize::Rect(r, c) => Ok([r, c]),
            PatchSize::Cuboid(..) => Err(PatchError::ShapeMismatch {
                got: self.arity(),
                ndim: 2,
            }),
        }
    }

    /// Normalize to per-axis extents for a 3D image.
    pub(crate) fn resolve3(self) -> Result<[usize; 3]> {
        match self {
            PatchSize::Square(p) => Ok([p, p, p]),
            PatchSize::Cuboid(p, r, c) => Ok([p, r, c]),
            PatchSize::Rect(..) => Err(PatchError::ShapeMismatch {
                got: self.arity(),
                ndim: 3,
            }),
        }
    }
}

/// Resolved per-axis step of a 2D patch grid.
///
/// `rows` is the displacement between vertically adjacent patches (axis 0),
/// `cols` between horizontally adjacent ones (axis 1). Returned by
/// [`crate::split_with_step`] and consumed by [`crate::merge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridStep {
    pub rows: usize,
    pub cols: usize,
}

impl GridStep {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl From<[usize; 2]> for GridStep {
    fn from([rows, cols]: [usize; 2]) -> Self {
        Self { rows, cols }
    }
}
