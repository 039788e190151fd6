//! Length and area units.
//!
//! All lengths are computed on a sphere with radius [`EARTH_RADIUS`]. A length unit is described by its factor: the
//! length of an arc of 1 radian in this unit. Converting an angular distance into a length is then a single
//! multiplication, and unknown unit tokens can only appear when a unit is parsed from a string.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::angle::radians_to_degrees;
use crate::error::MeasureError;

/// Mean radius of the Earth in meters.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Unit of length.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Meters.
    #[serde(alias = "metres")]
    Meters,
    /// Kilometers. This is the default unit.
    #[default]
    #[serde(alias = "kilometres")]
    Kilometers,
    /// Centimeters.
    #[serde(alias = "centimetres")]
    Centimeters,
    /// Millimeters.
    #[serde(alias = "millimetres")]
    Millimeters,
    /// International miles.
    Miles,
    /// Nautical miles.
    NauticalMiles,
    /// Feet.
    Feet,
    /// Inches.
    Inches,
    /// Yards.
    Yards,
    /// Angle of the arc in radians.
    Radians,
    /// Length in degrees of a great circle.
    Degrees,
}

impl Unit {
    /// All supported units.
    pub const ALL: [Unit; 11] = [
        Unit::Meters,
        Unit::Kilometers,
        Unit::Centimeters,
        Unit::Millimeters,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Feet,
        Unit::Inches,
        Unit::Yards,
        Unit::Radians,
        Unit::Degrees,
    ];

    /// Length of an arc of 1 radian on the Earth surface expressed in this unit.
    ///
    /// The values are the correctly rounded results of `EARTH_RADIUS` scaled by the unit size, written out so that
    /// no additional rounding happens at compile time.
    pub fn factor(self) -> f64 {
        match self {
            Unit::Meters => EARTH_RADIUS,
            Unit::Kilometers => 6_371.008_8,
            Unit::Centimeters => 637_100_880.0,
            Unit::Millimeters => 6_371_008_800.0,
            Unit::Miles => 3_958.761_333_810_546_6,
            Unit::NauticalMiles => 3_440.069_546_436_285_2,
            Unit::Feet => 20_902_260.511_392,
            Unit::Inches => 250_826_616.456,
            Unit::Yards => 6_967_335.223_68,
            Unit::Radians => 1.0,
            Unit::Degrees => 57.228_913_541_432_74,
        }
    }

    /// Token used for the unit in string form.
    pub fn token(self) -> &'static str {
        match self {
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Centimeters => "centimeters",
            Unit::Millimeters => "millimeters",
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nauticalmiles",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
            Unit::Yards => "yards",
            Unit::Radians => "radians",
            Unit::Degrees => "degrees",
        }
    }
}

impl FromStr for Unit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "meters" | "metres" => Unit::Meters,
            "kilometers" | "kilometres" => Unit::Kilometers,
            "centimeters" | "centimetres" => Unit::Centimeters,
            "millimeters" | "millimetres" => Unit::Millimeters,
            "miles" => Unit::Miles,
            "nauticalmiles" => Unit::NauticalMiles,
            "feet" => Unit::Feet,
            "inches" => Unit::Inches,
            "yards" => Unit::Yards,
            "radians" => Unit::Radians,
            "degrees" => Unit::Degrees,
            other => {
                log::debug!("Unknown length unit token: {other:?}");
                return Err(MeasureError::UnknownUnit(other.to_string()));
            }
        })
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Unit of area.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    /// Square meters. This is the unit of all area computations.
    #[default]
    #[serde(alias = "metres")]
    Meters,
    /// Square kilometers.
    #[serde(alias = "kilometres")]
    Kilometers,
    /// Square centimeters.
    #[serde(alias = "centimetres")]
    Centimeters,
    /// Square millimeters.
    #[serde(alias = "millimetres")]
    Millimeters,
    /// Acres.
    Acres,
    /// Square miles.
    Miles,
    /// Square yards.
    Yards,
    /// Square feet.
    Feet,
    /// Square inches.
    Inches,
    /// Hectares.
    Hectares,
}

impl AreaUnit {
    /// Number of units in one square meter.
    pub fn factor(self) -> f64 {
        match self {
            AreaUnit::Meters => 1.0,
            AreaUnit::Kilometers => 0.000_001,
            AreaUnit::Centimeters => 10_000.0,
            AreaUnit::Millimeters => 1_000_000.0,
            AreaUnit::Acres => 0.000_247_105,
            AreaUnit::Miles => 3.86e-7,
            AreaUnit::Yards => 1.195_990_046,
            AreaUnit::Feet => 10.763_910_417,
            AreaUnit::Inches => 1_550.003_100_006,
            AreaUnit::Hectares => 0.000_1,
        }
    }

    /// Token used for the unit in string form.
    pub fn token(self) -> &'static str {
        match self {
            AreaUnit::Meters => "meters",
            AreaUnit::Kilometers => "kilometers",
            AreaUnit::Centimeters => "centimeters",
            AreaUnit::Millimeters => "millimeters",
            AreaUnit::Acres => "acres",
            AreaUnit::Miles => "miles",
            AreaUnit::Yards => "yards",
            AreaUnit::Feet => "feet",
            AreaUnit::Inches => "inches",
            AreaUnit::Hectares => "hectares",
        }
    }
}

impl FromStr for AreaUnit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "meters" | "metres" => AreaUnit::Meters,
            "kilometers" | "kilometres" => AreaUnit::Kilometers,
            "centimeters" | "centimetres" => AreaUnit::Centimeters,
            "millimeters" | "millimetres" => AreaUnit::Millimeters,
            "acres" => AreaUnit::Acres,
            "miles" => AreaUnit::Miles,
            "yards" => AreaUnit::Yards,
            "feet" => AreaUnit::Feet,
            "inches" => AreaUnit::Inches,
            "hectares" => AreaUnit::Hectares,
            other => {
                log::debug!("Unknown area unit token: {other:?}");
                return Err(MeasureError::UnknownUnit(other.to_string()));
            }
        })
    }
}

impl Display for AreaUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Converts an angular distance in radians into a length in the given unit.
pub fn radians_to_length(radians: f64, unit: Unit) -> f64 {
    radians * unit.factor()
}

/// Converts a length in the given unit into an angular distance in radians.
pub fn length_to_radians(distance: f64, unit: Unit) -> f64 {
    distance / unit.factor()
}

/// Converts a length in the given unit into an angular distance in degrees.
pub fn length_to_degrees(distance: f64, unit: Unit) -> f64 {
    radians_to_degrees(length_to_radians(distance, unit))
}

/// Converts a length from one unit into another.
pub fn convert_length(length: f64, from: Unit, to: Unit) -> Result<f64, MeasureError> {
    if length < 0.0 {
        return Err(MeasureError::InvalidValue(format!(
            "length must be a non-negative number, got {length}"
        )));
    }

    Ok(radians_to_length(length_to_radians(length, from), to))
}

/// Converts an area from one unit into another.
pub fn convert_area(area: f64, from: AreaUnit, to: AreaUnit) -> Result<f64, MeasureError> {
    if area < 0.0 {
        return Err(MeasureError::InvalidValue(format!(
            "area must be a non-negative number, got {area}"
        )));
    }

    Ok(area / from.factor() * to.factor())
}
