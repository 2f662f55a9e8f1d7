use std::path::Path;

use image::DynamicImage;
use ndarray::{Array2, Array3};
use tracing::debug;

use crate::core::image::{Image, Sample};
use crate::error::Result;

/// A decoded raster file, keeping the sample type of the file where possible.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedImage {
    U8(Image<u8>),
    U16(Image<u16>),
    F32(Image<f32>),
}

impl LoadedImage {
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            LoadedImage::U8(i) => (i.ncols(), i.nrows()),
            LoadedImage::U16(i) => (i.ncols(), i.nrows()),
            LoadedImage::F32(i) => (i.ncols(), i.nrows()),
        }
    }
}

pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let decoded = image::open(path)?;
    debug!("Decoded {:?} as {:?}", path, decoded.color());
    from_dynamic(decoded)
}

fn gray<T: Sample>(w: u32, h: u32, raw: Vec<T>) -> Result<Image<T>> {
    Image::gray(Array2::from_shape_vec((h as usize, w as usize), raw)?)
}

fn channels<T: Sample>(
    w: u32,
    h: u32,
    c: usize,
    raw: Vec<T>,
) -> Result<Image<T>> {
    Image::channels(Array3::from_shape_vec((h as usize, w as usize, c), raw)?)
}

/// Map the decoder's pixel layout onto an `Image`. Gray+alpha drops the alpha
/// channel; layouts without a direct counterpart are converted to RGBA8.
pub fn from_dynamic(decoded: DynamicImage) -> Result<LoadedImage> {
    let (w, h) = (decoded.width(), decoded.height());
    Ok(match decoded {
        DynamicImage::ImageLuma8(buf) => LoadedImage::U8(gray(w, h, buf.into_raw())?),
        img @ DynamicImage::ImageLumaA8(_) => LoadedImage::U8(gray(w, h, img.to_luma8().into_raw())?),
        DynamicImage::ImageLuma16(buf) => LoadedImage::U16(gray(w, h, buf.into_raw())?),
        img @ DynamicImage::ImageLumaA16(_) => {
            LoadedImage::U16(gray(w, h, img.to_luma16().into_raw())?)
        }
        DynamicImage::ImageRgb8(buf) => LoadedImage::U8(channels(w, h, 3, buf.into_raw())?),
        DynamicImage::ImageRgba8(buf) => LoadedImage::U8(channels(w, h, 4, buf.into_raw())?),
        DynamicImage::ImageRgb16(buf) => LoadedImage::U16(channels(w, h, 3, buf.into_raw())?),
        DynamicImage::ImageRgba16(buf) => LoadedImage::U16(channels(w, h, 4, buf.into_raw())?),
        DynamicImage::ImageRgb32F(buf) => LoadedImage::F32(channels(w, h, 3, buf.into_raw())?),
        DynamicImage::ImageRgba32F(buf) => LoadedImage::F32(channels(w, h, 4, buf.into_raw())?),
        other => LoadedImage::U8(channels(w, h, 4, other.to_rgba8().into_raw())?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

    #[test]
    fn gray8_is_rows_by_columns() {
        let buf = GrayImage::from_fn(3, 2, |x, y| Luma([(y * 10 + x) as u8]));
        let loaded = from_dynamic(DynamicImage::ImageLuma8(buf)).unwrap();
        assert_eq!(loaded.dimensions(), (3, 2));
        match loaded {
            LoadedImage::U8(image) => {
                assert!(image.is_gray());
                assert_eq!(
                    image.pixel(1, 2),
                    Some(crate::core::image::Pixel::Scalar(12))
                );
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn gray16_keeps_sixteen_bits() {
        let buf: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(2, 2, Luma([4000u16]));
        let loaded = from_dynamic(DynamicImage::ImageLuma16(buf)).unwrap();
        assert!(matches!(loaded, LoadedImage::U16(_)));
    }

    #[test]
    fn rgb8_has_three_channels() {
        let buf = RgbImage::from_pixel(4, 1, Rgb([1, 2, 3]));
        match from_dynamic(DynamicImage::ImageRgb8(buf)).unwrap() {
            LoadedImage::U8(image) => assert_eq!(image.channel_count(), 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn round_trips_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ramp.png");
        GrayImage::from_fn(4, 4, |x, _| Luma([(x * 60) as u8]))
            .save(&path)
            .unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 4));
    }
}
