use std::path::Path;

use tracing::info;

use pltpreview::io::{CsvLayout, LoadedImage, load_image, load_series_csv};
use pltpreview::{Clim, Figures, Image, PreviewConfig, Sample, ShowOptions};

use super::args::{CliArgs, Command, PlotArgs, ShowArgs};
use super::errors::AppError;

fn load_config(path: Option<&Path>) -> Result<PreviewConfig, AppError> {
    match path {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Ok(PreviewConfig::from_json_file(path)?)
        }
        None => Ok(PreviewConfig::default()),
    }
}

fn parse_clim(clim: &str) -> Result<Clim, AppError> {
    clim.parse::<Clim>().map_err(|_| AppError::InvalidClim {
        clim: clim.to_string(),
    })
}

/// Command line flags take precedence over the config file.
fn show_options(args: &ShowArgs, defaults: &ShowOptions) -> Result<ShowOptions, AppError> {
    let mut options = defaults.clone();
    options.block = true;
    if let Some(title) = &args.title {
        options.title = title.clone();
    } else if options.title.is_empty() {
        options.title = args.input.display().to_string();
    }
    if let Some(clim) = &args.clim {
        options.clim = Some(parse_clim(clim)?);
    }
    if let Some(interpolation) = args.interpolation {
        options.interpolation = interpolation;
    }
    Ok(options)
}

fn show_loaded<T: Sample>(
    figures: &mut Figures,
    image: Image<T>,
    units: Option<&str>,
    options: &ShowOptions,
) -> Result<(), AppError> {
    let handle = match units {
        Some(units) => figures.show(image.with_units(units), options)?,
        None => figures.show(image, options)?,
    };
    info!(
        "Closed {} ({}x{}, clim [{}, {}])",
        handle.figure,
        handle.width,
        handle.height,
        handle.clim.low(),
        handle.clim.high()
    );
    Ok(())
}

fn run_show(args: &ShowArgs, config: &PreviewConfig) -> Result<(), AppError> {
    let options = show_options(args, &config.show)?;
    let loaded = load_image(&args.input)?;
    let (width, height) = loaded.dimensions();
    info!("Loaded {:?}: {}x{}", args.input, width, height);

    let mut figures = Figures::with_window(config.window.clone());
    let units = args.units.as_deref();
    match loaded {
        LoadedImage::U8(image) => show_loaded(&mut figures, image, units, &options),
        LoadedImage::U16(image) => show_loaded(&mut figures, image, units, &options),
        LoadedImage::F32(image) => show_loaded(&mut figures, image, units, &options),
    }
}

fn run_plot(args: &PlotArgs, config: &PreviewConfig) -> Result<(), AppError> {
    if !args.delimiter.is_ascii() {
        return Err(AppError::InvalidDelimiter {
            delimiter: args.delimiter,
        });
    }
    let layout = CsvLayout {
        has_headers: !args.no_header,
        delimiter: args.delimiter as u8,
        x_column: args.x_column,
    };
    let series = load_series_csv(&args.input, &layout)?;
    info!("Loaded {} series from {:?}", series.len(), args.input);

    let mut options = config.plot.clone();
    options.block = true;
    if let Some(title) = &args.title {
        options.title = title.clone();
    } else if options.title.is_empty() {
        options.title = args.input.display().to_string();
    }
    if let Some(xlabel) = &args.xlabel {
        options.xlabel = xlabel.clone();
    }
    if let Some(ylabel) = &args.ylabel {
        options.ylabel = ylabel.clone();
    }
    if args.no_grid {
        options.grid = false;
    }

    let mut figures = Figures::with_window(config.window.clone());
    let lines = figures.plot(series, &options)?;
    info!("Closed plot with {} line(s)", lines.len());
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        pltpreview::init_logging(tracing::Level::DEBUG)?;
    }

    let config = load_config(args.config.as_deref())?;
    match &args.command {
        Command::Show(show) => run_show(show, &config)?,
        Command::Plot(plot) => run_plot(plot, &config)?,
    }
    Ok(())
}
