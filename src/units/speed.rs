use serde::{Deserialize, Serialize};

use super::linear::{convert_linear, LinearUnit};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[serde(rename = "meters per second")]
    MetersPerSecond,
    #[serde(rename = "kilometers per hour")]
    KilometersPerHour,
    #[serde(rename = "miles per hour")]
    MilesPerHour,
    #[serde(rename = "feet per second")]
    FeetPerSecond,
    #[serde(rename = "knots")]
    Knots,
}

impl LinearUnit for SpeedUnit {
    const ALL: &'static [Self] = &[
        SpeedUnit::MetersPerSecond,
        SpeedUnit::KilometersPerHour,
        SpeedUnit::MilesPerHour,
        SpeedUnit::FeetPerSecond,
        SpeedUnit::Knots,
    ];

    fn name(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "meters per second",
            SpeedUnit::KilometersPerHour => "kilometers per hour",
            SpeedUnit::MilesPerHour => "miles per hour",
            SpeedUnit::FeetPerSecond => "feet per second",
            SpeedUnit::Knots => "knots",
        }
    }

    fn factor(self) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => 1.0,
            SpeedUnit::KilometersPerHour => 0.277778,
            SpeedUnit::MilesPerHour => 0.44704,
            SpeedUnit::FeetPerSecond => 0.3048,
            SpeedUnit::Knots => 0.514444,
        }
    }
}

/// 속도를 변환한다.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    convert_linear(value, from, to)
}
