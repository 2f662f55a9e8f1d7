use crate::core::image::{Image, Pixel, Sample};
use crate::types::DisplayRange;

/// Convert `image` to row-major RGBA8 for texture upload.
///
/// Scalar samples go through `range` onto a gray ramp; non-finite samples become
/// transparent. Channel samples are used as colors directly, scaled from
/// `[0, Sample::CHANNEL_MAX]` to `[0, 255]`, and a fourth channel is alpha.
pub fn to_rgba<T: Sample>(image: &Image<T>, range: DisplayRange) -> Vec<u8> {
    let (rows, cols) = (image.nrows(), image.ncols());
    let mut rgba = Vec::with_capacity(rows * cols * 4);

    for row in 0..rows {
        for col in 0..cols {
            match image.pixel(row, col) {
                Some(Pixel::Scalar(v)) => {
                    let v = v.to_f64();
                    if v.is_finite() {
                        let gray = (range.normalize(v) * 255.0).round() as u8;
                        rgba.extend_from_slice(&[gray, gray, gray, 255]);
                    } else {
                        rgba.extend_from_slice(&[0, 0, 0, 0]);
                    }
                }
                Some(Pixel::Channels(c)) => {
                    let mut px = [0u8, 0, 0, 255];
                    for (dst, &src) in px.iter_mut().zip(c.iter()) {
                        *dst = channel_to_u8(src);
                    }
                    rgba.extend_from_slice(&px);
                }
                None => rgba.extend_from_slice(&[0, 0, 0, 0]),
            }
        }
    }

    rgba
}

/// One color channel on the 8-bit display scale.
#[inline]
pub(crate) fn channel_to_u8<T: Sample>(v: T) -> u8 {
    let v = v.to_f64();
    if v.is_nan() {
        return 0;
    }
    ((v / T::CHANNEL_MAX).clamp(0.0, 1.0) * 255.0).round() as u8
}
