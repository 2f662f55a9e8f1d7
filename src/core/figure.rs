use std::fmt;
use std::sync::Arc;

use crate::core::clim::Colorbar;
use crate::error::{Error, Result};
use crate::types::{DisplayRange, Interpolation};

/// Cursor readout callback: data coordinates in, status text out.
pub type Readout = Arc<dyn Fn(f64, f64) -> String + Send + Sync>;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FigureId(pub usize);

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Figure {}", self.0)
    }
}

/// One line of a plot. Without `x` the samples are placed at `0, 1, 2, ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Option<Vec<f64>>,
    pub y: Vec<f64>,
    pub label: Option<String>,
}

impl Series {
    pub fn new(y: Vec<f64>) -> Self {
        Self {
            x: None,
            y,
            label: None,
        }
    }

    pub fn xy(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x: Some(x),
            y,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        match &self.x {
            Some(x) if x.len() != self.y.len() => Err(Error::LengthMismatch {
                x: x.len(),
                y: self.y.len(),
            }),
            _ => Ok(()),
        }
    }

    /// `[x, y]` pairs for drawing.
    pub fn points(&self) -> Vec<[f64; 2]> {
        match &self.x {
            Some(x) => x.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect(),
            None => self
                .y
                .iter()
                .enumerate()
                .map(|(i, &y)| [i as f64, y])
                .collect(),
        }
    }
}

/// A scalar or color image ready for display.
#[derive(Clone)]
pub struct ImageFigure {
    pub id: FigureId,
    pub title: String,
    pub xlabel: String,
    pub width: usize,
    pub height: usize,
    /// Row-major RGBA8, `width * height * 4` bytes
    pub rgba: Vec<u8>,
    pub clim: DisplayRange,
    pub colorbar: Option<Colorbar>,
    pub interpolation: Interpolation,
    pub readout: Readout,
}

impl fmt::Debug for ImageFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFigure")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("clim", &self.clim)
            .field("colorbar", &self.colorbar)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct PlotFigure {
    pub id: FigureId,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub grid: bool,
    pub legend: bool,
    pub line_width: f32,
    pub lines: Vec<Series>,
}

#[derive(Debug, Clone)]
pub enum Figure {
    Image(ImageFigure),
    Plot(PlotFigure),
}

impl Figure {
    pub fn id(&self) -> FigureId {
        match self {
            Figure::Image(f) => f.id,
            Figure::Plot(f) => f.id,
        }
    }

    /// Window title: the figure title, or `Figure N` when it is empty.
    pub fn window_title(&self) -> String {
        let title = match self {
            Figure::Image(f) => &f.title,
            Figure::Plot(f) => &f.title,
        };
        if title.is_empty() {
            self.id().to_string()
        } else {
            title.clone()
        }
    }
}
