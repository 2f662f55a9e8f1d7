#![doc = r#"
pltpreview: quick-look image and line plot display.

This crate wraps an immediate-mode GUI (eframe/egui with egui_plot) with a few
conveniences for looking at numeric arrays: automatic percentile contrast
clipping, a colorbar, titles and axis labels, a status-bar readout of the
pixel under the cursor, and a non-blocking display mode. It powers the
`pltpreview` CLI and can be embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
pltpreview = { version = "0.1", features = ["full"] }
```

Quick start: show an image
--------------------------
```rust,no_run
use ndarray::Array2;
use pltpreview::{Clim, Figures, Image, ShowOptions};

fn main() -> pltpreview::Result<()> {
    let data = Array2::from_shape_fn((256, 512), |(r, c)| (r * c) as f32);
    let image = Image::gray(data)?.with_units("counts");

    let mut figures = Figures::new();
    let handle = figures.show(
        image,
        &ShowOptions {
            title: "ramp".to_string(),
            clim: Some(Clim::Auto),
            block: true,
            ..ShowOptions::default()
        },
    )?;
    println!("clim = {:?}", handle.clim);
    Ok(())
}
```

Non-blocking figures
--------------------
Non-blocking calls queue figures on the `Figures` session; `run` displays all
of them at once and returns when every figure window is closed.

```rust,no_run
use pltpreview::{Figures, PlotOptions, Series};

fn main() -> pltpreview::Result<()> {
    let mut figures = Figures::new();
    let t: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
    let lines = figures.plot(
        vec![
            Series::xy(t.clone(), t.iter().map(|v| v.sin()).collect()).with_label("sin"),
            Series::xy(t.clone(), t.iter().map(|v| v.cos()).collect()).with_label("cos"),
        ],
        &PlotOptions {
            title: "waves".to_string(),
            xlabel: "t [s]".to_string(),
            ..PlotOptions::default()
        },
    )?;
    assert_eq!(lines.len(), 2);
    figures.run()
}
```

Contrast range and readout without a window
-------------------------------------------
```rust
use std::sync::Arc;
use ndarray::array;
use pltpreview::{Clim, FormatCoord, Image, estimate_range};

let image = Image::gray(array![[0.0, 0.5], [1.0, 1.5]]).unwrap();
let range = estimate_range(&image, Some(Clim::Range(0.0, 1.0))).unwrap();
assert_eq!((range.low(), range.high()), (0.0, 1.0));

let readout = FormatCoord::new(Arc::new(image));
assert!(readout.format(1.0, 1.0).ends_with("I=1.50000     "));
```

Error handling
--------------
All public functions return `pltpreview::Result<T>`; match on `pltpreview::Error`
to handle specific cases.

Feature flags
-------------
- `gui`: builds the eframe viewer, image file loading and the CLI binary.
- `full`: enables a complete feature set.

Useful modules
--------------
- [`api`]: the `Figures` session and figure handles.
- [`core`]: images, contrast estimation, readout formatting, raster conversion.
- [`io`]: CSV series and raster file loaders.
- [`types`]: `Clim`, `DisplayRange` and other small enums.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use crate::core::params::{PlotOptions, PreviewConfig, ShowOptions, WindowConfig};
pub use error::{Error, Result};
pub use types::{AUTO_PERCENTILE, Clim, DisplayRange, Interpolation, Orientation};

// Images, contrast and readout
pub use crate::core::clim::{Colorbar, Histogram, colorbar, estimate_range};
pub use crate::core::coord::{FormatCoord, ValueFormat};
pub use crate::core::figure::{Figure, FigureId, Series};
pub use crate::core::image::{Image, Pixel, Quantity, Sample, SampleKind};
pub use crate::core::raster::to_rgba;

// High-level API re-exports
pub use api::{Figures, ImageHandle, LineHandle};
pub use logging::init_logging;
