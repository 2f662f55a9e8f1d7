use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use egui_plot::{Legend, Line, Plot, PlotImage, PlotPoint, PlotPoints};

use super::models::{FigureState, ensure_texture};
use crate::core::clim::Colorbar;
use crate::core::figure::{Figure, ImageFigure, PlotFigure};
use crate::types::Orientation;

const COLORBAR_THICKNESS: f32 = 16.0;
const COLORBAR_LABEL_SPACE: f32 = 64.0;
const COLORBAR_STEPS: usize = 64;
const STATUS_HEIGHT: f32 = 20.0;

/// The x label carries the sample units; y counts image rows.
pub fn image_axis_labels(figure: &ImageFigure) -> (String, String) {
    (figure.xlabel.clone(), "row".to_string())
}

/// Short tick label: fixed point for ordinary magnitudes, scientific otherwise.
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e5).contains(&magnitude) {
        return format!("{:.2e}", value);
    }
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

pub struct FigureComponent;

impl FigureComponent {
    pub fn render(ui: &mut Ui, state: &mut FigureState) {
        match &state.figure {
            Figure::Image(figure) => {
                ImageFigureComponent::render(ui, figure, &mut state.texture, &mut state.status)
            }
            Figure::Plot(figure) => PlotFigureComponent::render(ui, figure),
        }
    }
}

pub struct ImageFigureComponent;

impl ImageFigureComponent {
    pub fn render(
        ui: &mut Ui,
        figure: &ImageFigure,
        texture: &mut Option<egui::TextureHandle>,
        status: &mut String,
    ) {
        let texture_id = ensure_texture(ui.ctx(), texture, figure).id();
        let available = ui.available_size();

        match figure.colorbar.as_ref().map(|bar| bar.orientation) {
            Some(Orientation::Vertical) => {
                ui.horizontal(|ui| {
                    let size = Vec2::new(
                        (available.x - COLORBAR_THICKNESS - COLORBAR_LABEL_SPACE).max(64.0),
                        (available.y - STATUS_HEIGHT).max(64.0),
                    );
                    Self::image_plot(ui, figure, texture_id, size, status);
                    if let Some(bar) = &figure.colorbar {
                        ColorbarComponent::render(ui, bar, size.y);
                    }
                });
            }
            Some(Orientation::Horizontal) => {
                let size = Vec2::new(
                    available.x.max(64.0),
                    (available.y - STATUS_HEIGHT - COLORBAR_THICKNESS - 24.0).max(64.0),
                );
                Self::image_plot(ui, figure, texture_id, size, status);
                if let Some(bar) = &figure.colorbar {
                    ColorbarComponent::render(ui, bar, size.x);
                }
            }
            None => {
                let size = Vec2::new(available.x.max(64.0), (available.y - STATUS_HEIGHT).max(64.0));
                Self::image_plot(ui, figure, texture_id, size, status);
            }
        }

        ui.label(egui::RichText::new(status.as_str()).monospace());
    }

    /// Image rows grow downwards, so plot y is the negated row coordinate.
    fn image_plot(
        ui: &mut Ui,
        figure: &ImageFigure,
        texture_id: egui::TextureId,
        size: Vec2,
        status: &mut String,
    ) {
        let (w, h) = (figure.width as f64, figure.height as f64);
        let center = PlotPoint::new((w - 1.0) / 2.0, -(h - 1.0) / 2.0);
        let (xlabel, ylabel) = image_axis_labels(figure);

        let response = Plot::new(("image", figure.id.0))
            .width(size.x)
            .height(size.y)
            .data_aspect(1.0)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .x_axis_label(xlabel)
            .y_axis_label(ylabel)
            .y_axis_formatter(|mark, _range| format!("{}", -mark.value))
            .show(ui, |plot_ui| {
                plot_ui.image(PlotImage::new(
                    figure.id.to_string(),
                    texture_id,
                    center,
                    Vec2::new(figure.width as f32, figure.height as f32),
                ));
            });

        if let Some(pos) = response.response.hover_pos() {
            let point = response.transform.value_from_position(pos);
            *status = (figure.readout)(point.x, -point.y);
        }
    }
}

pub struct PlotFigureComponent;

impl PlotFigureComponent {
    pub fn render(ui: &mut Ui, figure: &PlotFigure) {
        let labelled = figure.lines.iter().any(|s| s.label.is_some());

        let mut plot = Plot::new(("plot", figure.id.0))
            .show_grid(figure.grid)
            .x_axis_label(figure.xlabel.clone())
            .y_axis_label(figure.ylabel.clone());
        if figure.legend && labelled {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for series in &figure.lines {
                let points = PlotPoints::from(series.points());
                let name = series.label.clone().unwrap_or_default();
                plot_ui.line(Line::new(name, points).width(figure.line_width));
            }
        });
    }
}

pub struct ColorbarComponent;

impl ColorbarComponent {
    /// Draw a gray ramp with ticks. `length` is the bar extent along its orientation.
    pub fn render(ui: &mut Ui, bar: &Colorbar, length: f32) {
        let size = match bar.orientation {
            Orientation::Vertical => Vec2::new(COLORBAR_THICKNESS + COLORBAR_LABEL_SPACE, length),
            Orientation::Horizontal => Vec2::new(length, COLORBAR_THICKNESS + 24.0),
        };
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();

        let bar_rect = match bar.orientation {
            Orientation::Vertical => {
                Rect::from_min_size(rect.min, Vec2::new(COLORBAR_THICKNESS, rect.height()))
            }
            Orientation::Horizontal => {
                Rect::from_min_size(rect.min, Vec2::new(rect.width(), COLORBAR_THICKNESS))
            }
        };

        for step in 0..COLORBAR_STEPS {
            let t0 = step as f32 / COLORBAR_STEPS as f32;
            let t1 = (step + 1) as f32 / COLORBAR_STEPS as f32;
            let gray = (((t0 + t1) / 2.0) * 255.0).round() as u8;
            let segment = match bar.orientation {
                // High values at the top.
                Orientation::Vertical => Rect::from_min_max(
                    Pos2::new(bar_rect.left(), bar_rect.bottom() - t1 * bar_rect.height()),
                    Pos2::new(bar_rect.right(), bar_rect.bottom() - t0 * bar_rect.height()),
                ),
                Orientation::Horizontal => Rect::from_min_max(
                    Pos2::new(bar_rect.left() + t0 * bar_rect.width(), bar_rect.top()),
                    Pos2::new(bar_rect.left() + t1 * bar_rect.width(), bar_rect.bottom()),
                ),
            };
            painter.rect_filled(segment, 0.0, Color32::from_gray(gray));
        }

        let stroke = Stroke::new(1.0, text_color);
        let font = FontId::proportional(11.0);
        for &tick in &bar.ticks {
            let t = bar.range.normalize(tick) as f32;
            match bar.orientation {
                Orientation::Vertical => {
                    let y = bar_rect.bottom() - t * bar_rect.height();
                    painter.line_segment(
                        [Pos2::new(bar_rect.right(), y), Pos2::new(bar_rect.right() + 4.0, y)],
                        stroke,
                    );
                    painter.text(
                        Pos2::new(bar_rect.right() + 6.0, y),
                        Align2::LEFT_CENTER,
                        format_tick(tick),
                        font.clone(),
                        text_color,
                    );
                }
                Orientation::Horizontal => {
                    let x = bar_rect.left() + t * bar_rect.width();
                    painter.line_segment(
                        [Pos2::new(x, bar_rect.bottom()), Pos2::new(x, bar_rect.bottom() + 4.0)],
                        stroke,
                    );
                    painter.text(
                        Pos2::new(x, bar_rect.bottom() + 6.0),
                        Align2::CENTER_TOP,
                        format_tick(tick),
                        font.clone(),
                        text_color,
                    );
                }
            }
        }
    }
}
