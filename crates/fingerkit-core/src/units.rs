//! Angle units
//!
//! Rotations cross the boundary between the layout math (radians) and
//! placement primitives that usually expect degrees. `Angle` stores radians
//! and only converts when a caller names the unit it wants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Angular unit expected by a consumer of an [`Angle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Degrees, 360 per turn
    Degrees,
    /// Radians, 2π per turn
    Radians,
}

impl Default for AngleUnit {
    fn default() -> Self {
        Self::Degrees
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => write!(f, "deg"),
            Self::Radians => write!(f, "rad"),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(Self::Degrees),
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            _ => Err(format!("Unknown angle unit: {}", s)),
        }
    }
}

/// A planar rotation angle, counter-clockwise from the +X axis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero rotation.
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Build an angle from a value in the given unit.
    pub fn from_unit(value: f64, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Degrees => Self::from_degrees(value),
            AngleUnit::Radians => Self::from_radians(value),
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Value of this angle expressed in `unit`.
    pub fn in_unit(&self, unit: AngleUnit) -> f64 {
        match unit {
            AngleUnit::Degrees => self.degrees(),
            AngleUnit::Radians => self.radians(),
        }
    }

    /// `(cos, sin)` of the angle.
    pub fn unit_vector(&self) -> (f64, f64) {
        (self.radians.cos(), self.radians.sin())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_degree_radian_conversion() {
        let a = Angle::from_degrees(90.0);
        assert!((a.radians() - FRAC_PI_2).abs() < 1e-12);

        let b = Angle::from_radians(PI);
        assert!((b.degrees() - 180.0).abs() < 1e-12);
        assert!((b.in_unit(AngleUnit::Radians) - PI).abs() < 1e-12);
        assert!((b.in_unit(AngleUnit::Degrees) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_unit() {
        let a = Angle::from_unit(45.0, AngleUnit::Degrees);
        let b = Angle::from_unit(PI / 4.0, AngleUnit::Radians);
        assert!((a.radians() - b.radians()).abs() < 1e-12);
    }

    #[test]
    fn test_angle_unit_parse() {
        assert_eq!("deg".parse::<AngleUnit>(), Ok(AngleUnit::Degrees));
        assert_eq!("Radians".parse::<AngleUnit>(), Ok(AngleUnit::Radians));
        assert_eq!(" RAD ".parse::<AngleUnit>(), Ok(AngleUnit::Radians));
        assert!("gradians".parse::<AngleUnit>().is_err());
    }

    #[test]
    fn test_zero_unit_vector() {
        let (c, s) = Angle::ZERO.unit_vector();
        assert_eq!(c, 1.0);
        assert_eq!(s, 0.0);
        assert_eq!(Angle::default(), Angle::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::from_degrees(90.0).to_string(), "90.000°");
        assert_eq!(AngleUnit::Radians.to_string(), "rad");
    }
}
