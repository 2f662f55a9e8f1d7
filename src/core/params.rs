use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Clim, Interpolation};

/// Options for `Figures::show`, suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowOptions {
    /// Wait for the window to close before returning
    pub block: bool,
    pub title: String,
    /// Display range; None means the full data range
    pub clim: Option<Clim>,
    /// Overrides the unit label of the image
    pub xlabel: Option<String>,
    pub interpolation: Interpolation,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            block: false,
            title: String::new(),
            clim: None,
            xlabel: None,
            interpolation: Interpolation::Nearest,
        }
    }
}

/// Options for `Figures::plot`, suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub block: bool,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub grid: bool,
    pub line_width: f32,
    /// Show a legend when at least one series is labelled
    pub legend: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            block: false,
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            grid: true,
            line_width: 1.5,
            legend: true,
        }
    }
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pltpreview".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Top-level JSON config: window settings plus default show/plot options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub window: WindowConfig,
    pub show: ShowOptions,
    pub plot: PlotOptions,
}

impl PreviewConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_take_defaults() {
        let config: PreviewConfig =
            serde_json::from_str(r#"{ "show": { "clim": "auto" }, "plot": { "grid": false } }"#)
                .unwrap();
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.show.clim, Some(Clim::Auto));
        assert_eq!(config.show.interpolation, Interpolation::Nearest);
        assert!(!config.plot.grid);
        assert_eq!(config.plot.line_width, 1.5);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "window": {{ "width": 1024 }}, "show": {{ "clim": "5,250", "interpolation": "linear" }} }}"#
        )
        .unwrap();
        let config = PreviewConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.show.clim, Some(Clim::Range(5.0, 250.0)));
        assert_eq!(config.show.interpolation, Interpolation::Linear);
    }

    #[test]
    fn rejects_bad_clim_in_config() {
        let result = serde_json::from_str::<ShowOptions>(r#"{ "clim": "loud" }"#);
        assert!(result.is_err());
    }
}
