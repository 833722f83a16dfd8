use serde::{Deserialize, Serialize};

use super::linear::{convert_linear, LinearUnit};

/// 길이 단위. 내부 기준은 인치이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Inches,
    Feet,
    Yards,
    Miles,
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
}

impl LinearUnit for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Inches,
        LengthUnit::Feet,
        LengthUnit::Yards,
        LengthUnit::Miles,
        LengthUnit::Millimeters,
        LengthUnit::Centimeters,
        LengthUnit::Meters,
        LengthUnit::Kilometers,
    ];

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Inches => "inches",
            LengthUnit::Feet => "feet",
            LengthUnit::Yards => "yards",
            LengthUnit::Miles => "miles",
            LengthUnit::Millimeters => "millimeters",
            LengthUnit::Centimeters => "centimeters",
            LengthUnit::Meters => "meters",
            LengthUnit::Kilometers => "kilometers",
        }
    }

    fn factor(self) -> f64 {
        match self {
            LengthUnit::Inches => 1.0,
            LengthUnit::Feet => 12.0,
            LengthUnit::Yards => 36.0,
            LengthUnit::Miles => 63360.0,
            LengthUnit::Millimeters => 0.0393701,
            LengthUnit::Centimeters => 0.393701,
            LengthUnit::Meters => 39.3701,
            LengthUnit::Kilometers => 39370.1,
        }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    convert_linear(value, from, to)
}
