use std::fmt;

use ndarray::{Array2, Array3, ArrayView1, Axis};

use crate::error::{Error, Result};

/// Numeric class of a sample type, used to pick the readout template.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SampleKind {
    Float,
    Integer,
}

/// Element types an `Image` can hold.
pub trait Sample: Copy + PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static {
    const KIND: SampleKind;
    /// Full intensity of one color channel: 1.0 for floats, `MAX` for integers.
    const CHANNEL_MAX: f64;

    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    (float: $($t:ty),+) => {
        $( impl_sample!(@one $t, Float, 1.0); )+
    };
    (integer: $($t:ty),+) => {
        $( impl_sample!(@one $t, Integer, <$t>::MAX as f64); )+
    };
    (@one $t:ty, $kind:ident, $max:expr) => {
        impl Sample for $t {
            const KIND: SampleKind = SampleKind::$kind;
            const CHANNEL_MAX: f64 = $max;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_sample!(float: f32, f64);
impl_sample!(integer: u8, u16, u32, u64, i8, i16, i32, i64);

#[derive(Clone, Debug, PartialEq)]
enum Pixels<T> {
    Gray(Array2<T>),
    Channels(Array3<T>),
}

/// A non-empty grayscale (`rows x cols`) or multi-channel (`rows x cols x 3|4`) image.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    pixels: Pixels<T>,
}

/// Value of one pixel: a scalar, or a view over its channels.
#[derive(Debug, PartialEq)]
pub enum Pixel<'a, T> {
    Scalar(T),
    Channels(ArrayView1<'a, T>),
}

impl<T: Sample> Image<T> {
    pub fn gray(data: Array2<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(Self {
            pixels: Pixels::Gray(data),
        })
    }

    /// Multi-channel image; the last axis holds 3 (RGB) or 4 (RGBA) channels.
    pub fn channels(data: Array3<T>) -> Result<Self> {
        let channels = data.len_of(Axis(2));
        if !(3..=4).contains(&channels) {
            return Err(Error::UnsupportedChannels { channels });
        }
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(Self {
            pixels: Pixels::Channels(data),
        })
    }

    pub fn nrows(&self) -> usize {
        match &self.pixels {
            Pixels::Gray(a) => a.nrows(),
            Pixels::Channels(a) => a.len_of(Axis(0)),
        }
    }

    pub fn ncols(&self) -> usize {
        match &self.pixels {
            Pixels::Gray(a) => a.ncols(),
            Pixels::Channels(a) => a.len_of(Axis(1)),
        }
    }

    /// Number of channels per pixel; 1 for grayscale.
    pub fn channel_count(&self) -> usize {
        match &self.pixels {
            Pixels::Gray(_) => 1,
            Pixels::Channels(a) => a.len_of(Axis(2)),
        }
    }

    pub fn is_gray(&self) -> bool {
        matches!(self.pixels, Pixels::Gray(_))
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<Pixel<'_, T>> {
        if row >= self.nrows() || col >= self.ncols() {
            return None;
        }
        match &self.pixels {
            Pixels::Gray(a) => Some(Pixel::Scalar(a[(row, col)])),
            Pixels::Channels(a) => Some(Pixel::Channels(
                a.index_axis(Axis(0), row).index_axis_move(Axis(0), col),
            )),
        }
    }

    /// Every sample in row-major order, channels included.
    pub fn samples(&self) -> Box<dyn Iterator<Item = T> + '_> {
        match &self.pixels {
            Pixels::Gray(a) => Box::new(a.iter().copied()),
            Pixels::Channels(a) => Box::new(a.iter().copied()),
        }
    }

    /// Minimum and maximum over finite samples as `f64`.
    pub fn finite_min_max(&self) -> Option<(f64, f64)> {
        self.samples()
            .map(Sample::to_f64)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((mn, mx)) => Some((mn.min(v), mx.max(v))),
            })
    }

    /// Tag the image with a physical unit name.
    pub fn with_units(self, units: impl Into<String>) -> Quantity<T> {
        Quantity {
            magnitude: self,
            units: Some(units.into()),
        }
    }
}

/// An image with an optional physical unit, shown as the x-axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity<T> {
    pub magnitude: Image<T>,
    pub units: Option<String>,
}

impl<T> Quantity<T> {
    /// Split into the bare image and its unit name.
    pub fn into_parts(self) -> (Image<T>, Option<String>) {
        (self.magnitude, self.units)
    }
}

impl<T> From<Image<T>> for Quantity<T> {
    fn from(magnitude: Image<T>) -> Self {
        Self {
            magnitude,
            units: None,
        }
    }
}
