use super::components::FigureComponent;
use super::models::FigureViewer;
use crate::core::figure::Figure;
use eframe::egui;

const FIGURE_SIZE: [f32; 2] = [560.0, 480.0];
const CASCADE_OFFSET: f32 = 24.0;

impl eframe::App for FigureViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{} figure(s) open", self.open_count()))
                    .color(egui::Color32::from_gray(150)),
            );
        });

        for (i, state) in self.figures.iter_mut().enumerate() {
            if !state.open {
                continue;
            }
            let mut open = state.open;
            let offset = CASCADE_OFFSET * i as f32;
            let default_size = match &state.figure {
                Figure::Image(f) if f.width > 0 && f.height > 0 => {
                    // Keep the image aspect inside the default figure box.
                    let aspect = f.width as f32 / f.height as f32;
                    if aspect >= FIGURE_SIZE[0] / FIGURE_SIZE[1] {
                        [FIGURE_SIZE[0], FIGURE_SIZE[0] / aspect + 60.0]
                    } else {
                        [FIGURE_SIZE[1] * aspect + 90.0, FIGURE_SIZE[1]]
                    }
                }
                _ => FIGURE_SIZE,
            };

            egui::Window::new(state.figure.window_title())
                .id(egui::Id::new(("figure", state.figure.id().0)))
                .open(&mut open)
                .default_pos([16.0 + offset, 32.0 + offset])
                .default_size(default_size)
                .resizable(true)
                .show(ctx, |ui| {
                    FigureComponent::render(ui, state);
                });

            if !open {
                tracing::info!("{} closed", state.figure.id());
            }
            state.open = open;
        }

        if self.open_count() == 0 {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
