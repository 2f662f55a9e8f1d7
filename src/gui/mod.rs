//! eframe front end: one native window, one egui window per figure.
pub mod app;
pub mod components;
pub mod models;

use eframe::{NativeOptions, egui::ViewportBuilder};
use tracing::info;

use crate::core::figure::Figure;
use crate::core::params::WindowConfig;
use crate::error::{Error, Result};

pub use models::FigureViewer;

/// `run_and_return` keeps one event loop per thread and reuses it, so the
/// window can be opened again by later calls on the same thread.
pub fn native_options(window: &WindowConfig) -> NativeOptions {
    NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([320.0, 240.0]),
        run_and_return: true,
        ..Default::default()
    }
}

/// Open the native window with `figures` and block until it closes.
///
/// May be called any number of times, always from the same thread.
pub fn run_figures(figures: Vec<Figure>, window: &WindowConfig) -> Result<()> {
    let options = native_options(window);

    info!("Displaying {} figure(s)", figures.len());
    let viewer = FigureViewer::new(figures);
    eframe::run_native(
        &window.title,
        options,
        Box::new(|_cc| Ok(Box::new(viewer))),
    )
    .map_err(Error::display)?;
    info!("Display closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_window_can_be_reopened() {
        let window = WindowConfig {
            width: 1024.0,
            height: 700.0,
            ..WindowConfig::default()
        };
        let options = native_options(&window);
        assert!(options.run_and_return);
        assert_eq!(options.viewport.inner_size, Some(eframe::egui::vec2(1024.0, 700.0)));
        assert_eq!(options.viewport.title.as_deref(), Some("pltpreview"));
    }
}
