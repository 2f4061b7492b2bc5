//! Bilinear 2D resampling.
//!
//! Used by [`crate::merge`] to stretch an assembled image back to the
//! declared original dimensions when the split excluded pixels. Pixel
//! centers are aligned the way OpenCV's `INTER_LINEAR` aligns them:
//! `src = (dst + 0.5) * scale - 0.5`, clamped to the source borders.
//! Interpolation happens in f64 and converts back at the end.

use ndarray::{Array2, ArrayView2};

use crate::float_trait::PatchFloat;

/// Resample `src` to exactly `dims = (rows, cols)`.
///
/// Approximating when the extents differ; an equal-extent call returns a
/// plain copy. Empty inputs or outputs yield a zero-filled array.
pub fn resize_bilinear<F: PatchFloat>(src: ArrayView2<'_, F>, dims: (usize, usize)) -> Array2<F> {
    let (src_h, src_w) = src.dim();
    let (dst_h, dst_w) = dims;

    if dst_h == 0 || dst_w == 0 || src_h == 0 || src_w == 0 {
        return Array2::zeros((dst_h, dst_w));
    }
    if (src_h, src_w) == (dst_h, dst_w) {
        return src.to_owned();
    }

    let scale_r = src_h as f64 / dst_h as f64;
    let scale_c = src_w as f64 / dst_w as f64;
    let max_r = (src_h - 1) as f64;
    let max_c = (src_w - 1) as f64;

    Array2::from_shape_fn((dst_h, dst_w), |(r, c)| {
        let src_r = ((r as f64 + 0.5) * scale_r - 0.5).clamp(0.0, max_r);
        let src_c = ((c as f64 + 0.5) * scale_c - 0.5).clamp(0.0, max_c);

        let r0 = src_r.floor() as usize;
        let c0 = src_c.floor() as usize;
        let r1 = (r0 + 1).min(src_h - 1);
        let c1 = (c0 + 1).min(src_w - 1);
        let fr = src_r - r0 as f64;
        let fc = src_c - c0 as f64;

        let p00 = src[[r0, c0]].to_f64().unwrap();
        let p01 = src[[r0, c1]].to_f64().unwrap();
        let p10 = src[[r1, c0]].to_f64().unwrap();
        let p11 = src[[r1, c1]].to_f64().unwrap();

        let top = p00 * (1.0 - fc) + p01 * fc;
        let bottom = p10 * (1.0 - fc) + p11 * fc;
        F::from_f64_c(top * (1.0 - fr) + bottom * fr)
    })
}
