use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::core::figure::{Figure, ImageFigure};
use crate::types::Interpolation;

/// Per-window state of one figure
pub struct FigureState {
    pub figure: Figure,
    pub open: bool,
    /// Uploaded on first draw
    pub texture: Option<TextureHandle>,
    /// Last cursor readout shown under the image
    pub status: String,
}

impl FigureState {
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            open: true,
            texture: None,
            status: String::new(),
        }
    }
}

/// The eframe application showing every figure of one `Figures::run` call.
pub struct FigureViewer {
    pub figures: Vec<FigureState>,
}

impl FigureViewer {
    pub fn new(figures: Vec<Figure>) -> Self {
        Self {
            figures: figures.into_iter().map(FigureState::new).collect(),
        }
    }

    pub fn open_count(&self) -> usize {
        self.figures.iter().filter(|f| f.open).count()
    }
}

pub fn texture_options(interpolation: Interpolation) -> TextureOptions {
    match interpolation {
        Interpolation::Nearest => TextureOptions::NEAREST,
        Interpolation::Linear => TextureOptions::LINEAR,
    }
}

/// Upload the figure raster, reusing the texture after the first frame.
pub fn ensure_texture<'a>(
    ctx: &egui::Context,
    slot: &'a mut Option<TextureHandle>,
    figure: &ImageFigure,
) -> &'a TextureHandle {
    slot.get_or_insert_with(|| {
        tracing::debug!("Uploading {}x{} texture for {}", figure.width, figure.height, figure.id);
        let image = ColorImage::from_rgba_unmultiplied([figure.width, figure.height], &figure.rgba);
        ctx.load_texture(
            figure.id.to_string(),
            image,
            texture_options(figure.interpolation),
        )
    })
}
