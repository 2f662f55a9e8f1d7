//! Input loading: delimited text files as plot series and, with the `gui`
//! feature, raster image files through the `image` crate.
pub mod series;
pub use series::{CsvLayout, load_series_csv, read_series_csv};

#[cfg(feature = "gui")]
pub mod raster;
#[cfg(feature = "gui")]
pub use raster::{LoadedImage, load_image};
