use serde::{Deserialize, Serialize};

use super::linear::{convert_linear, LinearUnit};

/// 체적 단위. 내부 기준은 액량 온스(fluid ounce)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "teaspoons")]
    Teaspoons,
    #[serde(rename = "tablespoons")]
    Tablespoons,
    #[serde(rename = "fluid ounces")]
    FluidOunces,
    #[serde(rename = "cups")]
    Cups,
    #[serde(rename = "pints")]
    Pints,
    #[serde(rename = "quarts")]
    Quarts,
    #[serde(rename = "gallons")]
    Gallons,
    #[serde(rename = "milliliters")]
    Milliliters,
    #[serde(rename = "liters")]
    Liters,
}

impl LinearUnit for VolumeUnit {
    const ALL: &'static [Self] = &[
        VolumeUnit::Teaspoons,
        VolumeUnit::Tablespoons,
        VolumeUnit::FluidOunces,
        VolumeUnit::Cups,
        VolumeUnit::Pints,
        VolumeUnit::Quarts,
        VolumeUnit::Gallons,
        VolumeUnit::Milliliters,
        VolumeUnit::Liters,
    ];

    fn name(self) -> &'static str {
        match self {
            VolumeUnit::Teaspoons => "teaspoons",
            VolumeUnit::Tablespoons => "tablespoons",
            VolumeUnit::FluidOunces => "fluid ounces",
            VolumeUnit::Cups => "cups",
            VolumeUnit::Pints => "pints",
            VolumeUnit::Quarts => "quarts",
            VolumeUnit::Gallons => "gallons",
            VolumeUnit::Milliliters => "milliliters",
            VolumeUnit::Liters => "liters",
        }
    }

    fn factor(self) -> f64 {
        match self {
            VolumeUnit::Teaspoons => 0.166667,
            VolumeUnit::Tablespoons => 0.5,
            VolumeUnit::FluidOunces => 1.0,
            VolumeUnit::Cups => 8.0,
            VolumeUnit::Pints => 16.0,
            VolumeUnit::Quarts => 32.0,
            VolumeUnit::Gallons => 128.0,
            VolumeUnit::Milliliters => 0.033814,
            VolumeUnit::Liters => 33.814,
        }
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    convert_linear(value, from, to)
}
