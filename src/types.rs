//! Shared types and enums used across pltpreview.
//! Includes the clip mode `Clim`, the validated `DisplayRange`,
//! texture `Interpolation` and colorbar `Orientation`.
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Percentage trimmed from each end of the histogram in `Clim::Auto` mode.
pub const AUTO_PERCENTILE: f64 = 0.1;

/// How the displayed intensity range is chosen.
///
/// The text form (`auto`, `<percent>`, `<low>,<high>`) is shared by the CLI
/// and JSON config files.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Clim {
    /// Trim `AUTO_PERCENTILE` percent from both ends of the histogram.
    Auto,
    /// Trim the given percentage from both ends of the histogram.
    Percentile(f64),
    /// Use these bounds as they are.
    Range(f64, f64),
}

impl Clim {
    /// Percentage to trim, or `None` for an explicit range.
    pub fn percentile(&self) -> Option<f64> {
        match self {
            Clim::Auto => Some(AUTO_PERCENTILE),
            Clim::Percentile(p) => Some(*p),
            Clim::Range(..) => None,
        }
    }
}

impl FromStr for Clim {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Clim::Auto);
        }
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| Error::invalid("clim", s))
        };
        match s.split_once(',') {
            Some((low, high)) => Ok(Clim::Range(parse(low)?, parse(high)?)),
            None => Ok(Clim::Percentile(parse(s)?)),
        }
    }
}

impl TryFrom<String> for Clim {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Clim> for String {
    fn from(clim: Clim) -> Self {
        clim.to_string()
    }
}

impl std::fmt::Display for Clim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Clim::Auto => write!(f, "auto"),
            Clim::Percentile(p) => write!(f, "{}", p),
            Clim::Range(low, high) => write!(f, "{},{}", low, high),
        }
    }
}

/// Ordered intensity bounds used to scale displayed samples. Always `low <= high`.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DisplayRange {
    low: f64,
    high: f64,
}

impl DisplayRange {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(Error::invalid("clim", format!("{},{}", low, high)));
        }
        Ok(Self { low, high })
    }

    /// Zero-width range around a single value.
    pub(crate) fn point(value: f64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Map `value` into `[0, 1]`, clamping outside the range. A zero-width range maps to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.low) / span).clamp(0.0, 1.0)
    }
}

impl From<DisplayRange> for (f64, f64) {
    fn from(range: DisplayRange) -> Self {
        (range.low, range.high)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Nearest,
    Linear,
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interpolation::Nearest => write!(f, "nearest"),
            Interpolation::Linear => write!(f, "linear"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clim_text_forms() {
        assert_eq!("auto".parse::<Clim>().unwrap(), Clim::Auto);
        assert_eq!(" AUTO ".parse::<Clim>().unwrap(), Clim::Auto);
        assert_eq!("0.5".parse::<Clim>().unwrap(), Clim::Percentile(0.5));
        assert_eq!("10, 200".parse::<Clim>().unwrap(), Clim::Range(10.0, 200.0));
        assert!("bright".parse::<Clim>().is_err());
        assert!("1,".parse::<Clim>().is_err());
    }

    #[test]
    fn clim_json_uses_text_form() {
        let json = serde_json::to_string(&Clim::Range(-1.5, 3.0)).unwrap();
        assert_eq!(json, "\"-1.5,3\"");
        let back: Clim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Clim::Range(-1.5, 3.0));
        assert!(serde_json::from_str::<Clim>("\"nope\"").is_err());
    }

    #[test]
    fn auto_trims_a_tenth_of_a_percent() {
        assert_eq!(Clim::Auto.percentile(), Some(0.1));
        assert_eq!(Clim::Percentile(2.0).percentile(), Some(2.0));
        assert_eq!(Clim::Range(0.0, 1.0).percentile(), None);
    }

    #[test]
    fn display_range_rejects_reversed_bounds() {
        assert!(DisplayRange::new(2.0, 1.0).is_err());
        assert!(DisplayRange::new(f64::NAN, 1.0).is_err());
        let range = DisplayRange::new(1.0, 1.0).unwrap();
        assert_eq!(range.normalize(5.0), 0.0);
    }

    #[test]
    fn normalize_clamps() {
        let range = DisplayRange::new(10.0, 20.0).unwrap();
        assert_eq!(range.normalize(5.0), 0.0);
        assert_eq!(range.normalize(15.0), 0.5);
        assert_eq!(range.normalize(25.0), 1.0);
    }
}
