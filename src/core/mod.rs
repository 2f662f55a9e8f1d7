//! Core building blocks: sample images, contrast-range estimation, the
//! coordinate readout formatter, raster conversion and figure models. These
//! are GUI-free primitives consumed by the high-level `api` module.
pub mod clim;
pub mod coord;
pub mod figure;
pub mod image;
pub mod params;
pub mod raster;
