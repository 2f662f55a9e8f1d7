//! Process-wide `tracing` subscriber setup.
use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

/// Install a formatted stderr subscriber once per process.
///
/// `RUST_LOG` takes precedence over `level`. Window-system crates are capped
/// at `info` so per-frame tracing stays out of the output.
pub fn init_logging(level: Level) -> Result<()> {
    LOGGING_INIT
        .get_or_try_init(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.as_str()))
                .add_directive("eframe=info".parse().map_err(Error::display)?)
                .add_directive("winit=info".parse().map_err(Error::display)?)
                .add_directive("egui_glow=info".parse().map_err(Error::display)?);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .try_init()
                .map_err(Error::display)
        })
        .map(|_| ())
}
