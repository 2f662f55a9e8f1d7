use std::sync::Arc;

use crate::core::image::{Image, Pixel, Sample, SampleKind};
use crate::core::raster::channel_to_u8;

/// Template used to render a pixel value in the coordinate readout.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ValueFormat {
    /// `RGB=rrr,ggg,bbb`
    Rgb,
    /// `I=` followed by five decimals in a 12-wide field.
    Float,
    /// `I=` followed by the value in a 12-wide field.
    Integer,
}

impl ValueFormat {
    /// Pick the template for pixels like `probe`.
    pub fn for_probe<T: Sample>(probe: &Pixel<'_, T>) -> Self {
        match probe {
            Pixel::Channels(_) => ValueFormat::Rgb,
            Pixel::Scalar(_) => match T::KIND {
                SampleKind::Float => ValueFormat::Float,
                SampleKind::Integer => ValueFormat::Integer,
            },
        }
    }

    pub fn render<T: Sample>(&self, pixel: &Pixel<'_, T>) -> String {
        match (self, pixel) {
            (_, Pixel::Channels(c)) => match (c.get(0), c.get(1), c.get(2)) {
                (Some(&r), Some(&g), Some(&b)) => format!(
                    "RGB={},{},{}",
                    channel_text(r),
                    channel_text(g),
                    channel_text(b)
                ),
                _ => String::new(),
            },
            (ValueFormat::Float, Pixel::Scalar(v)) => format!("I={:<12.5}", v.to_f64()),
            (_, Pixel::Scalar(v)) => format!("I={:<12}", v),
        }
    }
}

/// Integer channels print as stored; float channels on the 0-255 display scale.
fn channel_text<T: Sample>(v: T) -> String {
    match T::KIND {
        SampleKind::Float => format!("{:03}", channel_to_u8(v)),
        SampleKind::Integer => format!("{:03}", v),
    }
}

/// Status-bar readout of cursor position and the pixel value under it.
///
/// `x` runs along columns and `y` along rows. Coordinates are pixel centres, so
/// a pixel covers `[i - 0.5, i + 0.5)` on each axis.
#[derive(Clone, Debug)]
pub struct FormatCoord<T> {
    image: Arc<Image<T>>,
    value_format: ValueFormat,
}

impl<T: Sample> FormatCoord<T> {
    pub fn new(image: Arc<Image<T>>) -> Self {
        let value_format = image
            .pixel(0, 0)
            .map(|probe| ValueFormat::for_probe(&probe))
            .unwrap_or(ValueFormat::Integer);
        Self {
            image,
            value_format,
        }
    }

    pub fn value_format(&self) -> ValueFormat {
        self.value_format
    }

    /// `(row, col)` of the pixel under `(x, y)`, rounding half up.
    pub fn pixel_index(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let col = (x + 0.5).floor();
        let row = (y + 0.5).floor();
        // NaN fails both comparisons.
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.image.nrows() && col < self.image.ncols()).then_some((row, col))
    }

    pub fn format(&self, x: f64, y: f64) -> String {
        let position = format!("x={:<12.2}y={:<12.2}", x, y);
        match self
            .pixel_index(x, y)
            .and_then(|(row, col)| self.image.pixel(row, col))
        {
            Some(pixel) => position + &self.value_format.render(&pixel),
            None => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, array};

    fn float_3x3() -> FormatCoord<f64> {
        let data = array![[0.0, 0.1, 0.2], [1.0, 1.25, 1.5], [2.0, 2.1, 2.2]];
        FormatCoord::new(Arc::new(Image::gray(data).unwrap()))
    }

    #[test]
    fn float_value_has_five_decimals() {
        let fmt = float_3x3();
        assert_eq!(fmt.value_format(), ValueFormat::Float);
        let s = fmt.format(1.0, 1.0);
        assert_eq!(s, "x=1.00        y=1.00        I=1.25000     ");
        assert!(s.contains("1.25000"));
    }

    #[test]
    fn outside_the_image_only_coordinates() {
        let fmt = float_3x3();
        assert_eq!(fmt.format(10.0, 10.0), "x=10.00       y=10.00       ");
        assert_eq!(fmt.format(-0.6, 0.0), "x=-0.60       y=0.00        ");
        assert_eq!(fmt.pixel_index(f64::NAN, 0.0), None);
    }

    #[test]
    fn half_pixel_rounds_up_on_both_axes() {
        let fmt = float_3x3();
        assert_eq!(fmt.pixel_index(1.5, 0.0), Some((0, 2)));
        assert_eq!(fmt.pixel_index(0.0, 1.5), Some((2, 0)));
        assert_eq!(fmt.pixel_index(1.49, 1.49), Some((1, 1)));
        assert_eq!(fmt.pixel_index(-0.5, -0.5), Some((0, 0)));
        assert_eq!(fmt.pixel_index(2.5, 0.0), None);
    }

    #[test]
    fn x_selects_columns_on_wide_images() {
        let data = Array::from_shape_fn((2, 5), |(i, j)| (i * 10 + j) as u16);
        let fmt = FormatCoord::new(Arc::new(Image::gray(data).unwrap()));
        assert_eq!(fmt.value_format(), ValueFormat::Integer);
        assert_eq!(fmt.pixel_index(4.0, 1.0), Some((1, 4)));
        assert_eq!(fmt.pixel_index(1.0, 4.0), None);
        assert!(fmt.format(4.0, 1.0).ends_with("I=14          "));
    }

    #[test]
    fn channels_render_three_padded_fields() {
        let data = Array::from_shape_vec((1, 2, 4), vec![1u8, 22, 255, 9, 7, 8, 9, 10]).unwrap();
        let fmt = FormatCoord::new(Arc::new(Image::channels(data).unwrap()));
        assert_eq!(fmt.value_format(), ValueFormat::Rgb);
        assert_eq!(fmt.format(0.0, 0.0), "x=0.00        y=0.00        RGB=001,022,255");
        assert!(fmt.format(1.2, 0.3).ends_with("RGB=007,008,009"));
    }

    #[test]
    fn float_channels_render_as_display_integers() {
        let data = Array::from_shape_vec((1, 1, 3), vec![0.5019608f32, 0.25, 1.0]).unwrap();
        let fmt = FormatCoord::new(Arc::new(Image::channels(data).unwrap()));
        assert_eq!(fmt.value_format(), ValueFormat::Rgb);
        assert!(fmt.format(0.0, 0.0).ends_with("RGB=128,064,255"));
    }

    #[test]
    fn sixteen_bit_channels_print_stored_values() {
        let data = Array::from_shape_vec((1, 1, 3), vec![40000u16, 7, 512]).unwrap();
        let fmt = FormatCoord::new(Arc::new(Image::channels(data).unwrap()));
        assert!(fmt.format(0.0, 0.0).ends_with("RGB=40000,007,512"));
    }

    #[test]
    fn format_is_fixed_at_construction() {
        let data = array![[1i32, 2], [3, 4]];
        let fmt = FormatCoord::new(Arc::new(Image::gray(data).unwrap()));
        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (0.7, 0.2)] {
            assert!(fmt.format(x, y).contains("I="));
            assert_eq!(fmt.value_format(), ValueFormat::Integer);
        }
    }
}
