//! High-level, ergonomic library API: queue image and line-plot figures on an
//! explicit `Figures` session and display them. Prefer these entrypoints over
//! the low-level `core` modules when integrating pltpreview.
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::core::clim::{Colorbar, colorbar, estimate_range};
use crate::core::coord::FormatCoord;
use crate::core::figure::{Figure, FigureId, ImageFigure, PlotFigure, Readout, Series};
use crate::core::image::{Quantity, Sample};
use crate::core::params::{PlotOptions, ShowOptions, WindowConfig};
use crate::core::raster::to_rgba;
use crate::error::{Error, Result};
use crate::types::DisplayRange;

/// Handle to a displayed image
#[derive(Clone)]
pub struct ImageHandle {
    pub figure: FigureId,
    pub width: usize,
    pub height: usize,
    /// Range the samples were scaled with
    pub clim: DisplayRange,
    pub colorbar: Option<Colorbar>,
    pub xlabel: String,
    readout: Readout,
}

impl ImageHandle {
    /// Status text for cursor position `(x, y)` in data coordinates.
    pub fn format_coord(&self, x: f64, y: f64) -> String {
        (self.readout)(x, y)
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("figure", &self.figure)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("clim", &self.clim)
            .field("colorbar", &self.colorbar)
            .field("xlabel", &self.xlabel)
            .finish_non_exhaustive()
    }
}

/// Handle to one drawn line
#[derive(Debug, Clone, PartialEq)]
pub struct LineHandle {
    pub figure: FigureId,
    /// Position of the line within its figure
    pub index: usize,
    pub label: Option<String>,
    pub points: usize,
}

/// Figures waiting to be displayed.
///
/// Every `show`/`plot` call adds a new figure. Non-blocking calls only queue it;
/// `run` (or any blocking call) opens the window with all queued figures and
/// returns once they are closed.
#[derive(Debug, Default)]
pub struct Figures {
    pending: Vec<Figure>,
    next_id: usize,
    window: WindowConfig,
}

impl Figures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(window: WindowConfig) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Figures queued since the last `run`.
    pub fn pending(&self) -> &[Figure] {
        &self.pending
    }

    fn allocate_id(&mut self) -> FigureId {
        self.next_id += 1;
        FigureId(self.next_id)
    }

    /// Show `image` with a value readout and, when the data has dynamic range, a colorbar.
    ///
    /// Units attached to the image become the x-axis label unless
    /// `options.xlabel` overrides them.
    pub fn show<T: Sample>(
        &mut self,
        image: impl Into<Quantity<T>>,
        options: &ShowOptions,
    ) -> Result<ImageHandle> {
        let (image, units) = image.into().into_parts();
        let clim = estimate_range(&image, options.clim)?;
        let bar = colorbar(&image, clim);
        let rgba = to_rgba(&image, clim);
        let (width, height) = (image.ncols(), image.nrows());

        let formatter = FormatCoord::new(Arc::new(image));
        let readout: Readout = Arc::new(move |x: f64, y: f64| formatter.format(x, y));

        let xlabel = options
            .xlabel
            .clone()
            .or(units)
            .unwrap_or_default();
        let id = self.allocate_id();
        info!(
            "{}: image {}x{}, clim=[{}, {}], colorbar={}",
            id,
            width,
            height,
            clim.low(),
            clim.high(),
            bar.is_some()
        );

        let handle = ImageHandle {
            figure: id,
            width,
            height,
            clim,
            colorbar: bar.clone(),
            xlabel: xlabel.clone(),
            readout: readout.clone(),
        };
        self.pending.push(Figure::Image(ImageFigure {
            id,
            title: options.title.clone(),
            xlabel,
            width,
            height,
            rgba,
            clim,
            colorbar: bar,
            interpolation: options.interpolation,
            readout,
        }));

        if options.block {
            self.run()?;
        }
        Ok(handle)
    }

    /// Plot one or more series as lines in a new figure.
    pub fn plot(&mut self, series: Vec<Series>, options: &PlotOptions) -> Result<Vec<LineHandle>> {
        if series.is_empty() {
            return Err(Error::invalid("series", "none given"));
        }
        for s in &series {
            s.validate()?;
        }

        let id = self.allocate_id();
        let handles: Vec<LineHandle> = series
            .iter()
            .enumerate()
            .map(|(index, s)| LineHandle {
                figure: id,
                index,
                label: s.label.clone(),
                points: s.len(),
            })
            .collect();
        info!("{}: plot with {} line(s)", id, handles.len());

        self.pending.push(Figure::Plot(PlotFigure {
            id,
            title: options.title.clone(),
            xlabel: options.xlabel.clone(),
            ylabel: options.ylabel.clone(),
            grid: options.grid,
            legend: options.legend,
            line_width: options.line_width,
            lines: series,
        }));

        if options.block {
            self.run()?;
        }
        Ok(handles)
    }

    /// Display every queued figure and block until they are all closed.
    ///
    /// Can be called again after more figures are queued; ids keep counting up.
    pub fn run(&mut self) -> Result<()> {
        self.run_with(display)
    }

    fn run_with<F>(&mut self, display: F) -> Result<()>
    where
        F: FnOnce(Vec<Figure>, &WindowConfig) -> Result<()>,
    {
        if self.pending.is_empty() {
            debug!("No figures to display");
            return Ok(());
        }
        let figures = std::mem::take(&mut self.pending);
        display(figures, &self.window)
    }
}

#[cfg(feature = "gui")]
fn display(figures: Vec<Figure>, window: &WindowConfig) -> Result<()> {
    crate::gui::run_figures(figures, window)
}

#[cfg(not(feature = "gui"))]
fn display(_figures: Vec<Figure>, _window: &WindowConfig) -> Result<()> {
    Err(Error::GuiUnavailable)
}
