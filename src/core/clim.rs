use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::image::{Image, Sample};
use crate::error::{Error, Result};
use crate::types::{Clim, DisplayRange, Orientation};

/// Number of bins used for percentile clipping.
pub const HISTOGRAM_BINS: usize = 256;

/// Number of colorbar ticks between the data minimum and maximum.
pub const COLORBAR_TICKS: usize = 8;

/// Fixed-bin histogram over `[min, max]`; the last bin is closed on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<u64>,
    edges: Vec<f64>,
}

impl Histogram {
    /// Bin every finite value. A zero-width data range is widened to `[v - 0.5, v + 0.5]`.
    pub fn build(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::invalid("bins", bins));
        }
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((mn, mx)) => Some((mn.min(v), mx.max(v))),
            })
            .ok_or(Error::EmptyData)?;
        let (min, max) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let span = max - min;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| min + span * (i as f64) / (bins as f64))
            .collect();

        let mut counts = vec![0u64; bins];
        let scale = bins as f64 / span;
        for &v in values.iter().filter(|v| v.is_finite()) {
            let idx = (((v - min) * scale) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self { counts, edges })
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Bin edges; one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Running count per bin as a percentage of the total.
    pub fn cumulative_percent(&self) -> Vec<f64> {
        let total = self.total().max(1) as f64;
        let mut acc = 0u64;
        self.counts
            .iter()
            .map(|&c| {
                acc += c;
                acc as f64 / total * 100.0
            })
            .collect()
    }

    /// Left edges of the first and last bins whose cumulative percentage lies
    /// strictly inside `(percentile, 100 - percentile)`.
    pub fn clip_edges(&self, percentile: f64) -> Option<(f64, f64)> {
        let upper = 100.0 - percentile;
        let cumsum = self.cumulative_percent();
        let mut inside = cumsum
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > percentile && c < upper)
            .map(|(i, _)| self.edges[i]);
        let first = inside.next()?;
        let last = inside.last().unwrap_or(first);
        Some((first, last))
    }
}

fn check_percentile(percentile: f64) -> Result<f64> {
    if percentile.is_finite() && (0.0..50.0).contains(&percentile) {
        Ok(percentile)
    } else {
        Err(Error::invalid("percentile", percentile))
    }
}

/// Compute the displayed intensity range of `image`.
///
/// An explicit `Clim::Range` is returned unchanged without looking at the data.
/// `None` selects the full finite data range. Percentile modes trim the
/// histogram tails; when every finite sample is equal the result is `(v, v)`.
pub fn estimate_range<T: Sample>(image: &Image<T>, clim: Option<Clim>) -> Result<DisplayRange> {
    let percentile = match clim {
        Some(Clim::Range(low, high)) => return DisplayRange::new(low, high),
        Some(clim) => clim.percentile().map(check_percentile).transpose()?,
        None => None,
    };

    let (min, max) = image.finite_min_max().ok_or(Error::EmptyData)?;
    if min == max {
        debug!("Zero dynamic range at {}, skipping histogram", min);
        return Ok(DisplayRange::point(min));
    }

    let Some(percentile) = percentile else {
        return DisplayRange::new(min, max);
    };

    let values: Vec<f64> = image.samples().map(Sample::to_f64).collect();
    let histogram = Histogram::build(&values, HISTOGRAM_BINS)?;
    let (low, high) = histogram
        .clip_edges(percentile)
        .ok_or(Error::EmptyClipWindow { percentile })?;
    debug!(
        "Clip {}%: data=[{}, {}] -> clim=[{}, {}]",
        percentile, min, max, low, high
    );
    DisplayRange::new(low, high)
}

/// Colorbar drawn next to a scalar image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colorbar {
    pub range: DisplayRange,
    pub ticks: Vec<f64>,
    pub orientation: Orientation,
}

/// Build the colorbar for `image` shown with `range`, or `None` when the image is
/// multi-channel or its data has no dynamic range.
pub fn colorbar<T: Sample>(image: &Image<T>, range: DisplayRange) -> Option<Colorbar> {
    if !image.is_gray() {
        return None;
    }
    let (mn, mx) = image.finite_min_max()?;
    if mx - mn <= f64::EPSILON {
        return None;
    }

    let step = (mx - mn) / (COLORBAR_TICKS - 1) as f64;
    let ticks = (0..COLORBAR_TICKS)
        .map(|i| if i + 1 == COLORBAR_TICKS { mx } else { mn + step * i as f64 })
        .filter(|&t| range.contains(t))
        .collect();

    let orientation = if image.ncols() as f64 / 2.0 > image.nrows() as f64 {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    Some(Colorbar {
        range,
        ticks,
        orientation,
    })
}
