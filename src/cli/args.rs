use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use pltpreview::Interpolation;

#[derive(Parser)]
#[command(name = "pltpreview", version, about = "Quick-look image and line plot viewer")]
pub struct CliArgs {
    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    /// JSON config file with window, show and plot defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show an image file with a colorbar and pixel readout
    Show(ShowArgs),
    /// Plot the columns of a CSV file as lines
    Plot(PlotArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Image file (PNG, TIFF, JPEG, ...)
    pub input: PathBuf,

    /// Figure title
    #[arg(long)]
    pub title: Option<String>,

    /// Display range. Options:
    /// - "auto": trim 0.1% from both ends of the histogram
    /// - a percentage, e.g. 2.5
    /// - explicit bounds, e.g. 10,200
    #[arg(long, allow_hyphen_values = true)]
    pub clim: Option<String>,

    /// Physical unit of the samples, shown as the x label
    #[arg(long)]
    pub units: Option<String>,

    /// Texture filtering (nearest or linear)
    #[arg(long, value_enum)]
    pub interpolation: Option<Interpolation>,
}

#[derive(Args)]
pub struct PlotArgs {
    /// CSV file, one series per column
    pub input: PathBuf,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub xlabel: Option<String>,

    #[arg(long)]
    pub ylabel: Option<String>,

    /// Hide the grid
    #[arg(long, default_value_t = false)]
    pub no_grid: bool,

    /// The first row holds data, not column names
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// Zero-based column used as x values for the other columns
    #[arg(long)]
    pub x_column: Option<usize>,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}
