//! Attribute value conversion: dimensions with units, booleans.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Baseline density in dots per inch (1dp == 1px at this density).
const BASELINE_DPI: f32 = 160.0;

static DIMENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+))\s*(px|dp|dip|sp|pt|in|mm)?\s*$")
        .expect("invalid regex")
});

/// Units accepted on dimension attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Dp,
    Sp,
    Pt,
    In,
    Mm,
}

impl Unit {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "px" => Some(Self::Px),
            "dp" | "dip" => Some(Self::Dp),
            "sp" => Some(Self::Sp),
            "pt" => Some(Self::Pt),
            "in" => Some(Self::In),
            "mm" => Some(Self::Mm),
            _ => None,
        }
    }

    /// Pixels per unit at `density` (pixels per dp).
    pub fn scale(self, density: f32) -> f32 {
        let dpi = BASELINE_DPI * density;
        match self {
            Self::Px => 1.0,
            Self::Dp | Self::Sp => density,
            Self::Pt => dpi / 72.0,
            Self::In => dpi,
            Self::Mm => dpi / 25.4,
        }
    }
}

/// Parse a dimension like `12`, `5dp` or `1.5mm` into pixels. A bare number is pixels.
pub fn parse_dimension(value: &str, density: f32) -> Result<f32> {
    let invalid = || Error::InvalidDimension(value.to_string());
    let caps = DIMENSION_RE.captures(value).ok_or_else(invalid)?;
    let number: f32 = caps[1].parse().map_err(|_| invalid())?;
    let unit = match caps.get(2) {
        Some(m) => Unit::from_str(m.as_str()).ok_or_else(invalid)?,
        None => Unit::Px,
    };
    Ok(number * unit.scale(density))
}

pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(Error::Other(format!("Invalid boolean: {other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_number_is_pixels() {
        assert_eq!(parse_dimension("12", 3.0).unwrap(), 12.0);
        assert_eq!(parse_dimension(" 7.5px ", 3.0).unwrap(), 7.5);
        assert_eq!(parse_dimension(".5", 1.0).unwrap(), 0.5);
    }

    #[test]
    fn density_units_scale() {
        assert_eq!(parse_dimension("5dp", 2.0).unwrap(), 10.0);
        assert_eq!(parse_dimension("5dip", 2.0).unwrap(), 10.0);
        assert_eq!(parse_dimension("14sp", 1.5).unwrap(), 21.0);
        assert_eq!(parse_dimension("1in", 1.0).unwrap(), 160.0);
        assert!((parse_dimension("72pt", 1.0).unwrap() - 160.0).abs() < 1e-3);
        assert!((parse_dimension("25.4mm", 1.0).unwrap() - 160.0).abs() < 1e-3);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "dp", "5 em", "five", "1.2.3"] {
            assert!(parse_dimension(bad, 1.0).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn booleans() {
        assert!(parse_bool("true").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("yes").is_err());
    }
}
