use serde::{Deserialize, Serialize};

use super::linear::{convert_linear, LinearUnit};

/// 무게 단위. 내부 기준은 온스이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Ounces,
    Pounds,
    Grams,
    Kilograms,
}

impl LinearUnit for WeightUnit {
    const ALL: &'static [Self] = &[
        WeightUnit::Ounces,
        WeightUnit::Pounds,
        WeightUnit::Grams,
        WeightUnit::Kilograms,
    ];

    fn name(self) -> &'static str {
        match self {
            WeightUnit::Ounces => "ounces",
            WeightUnit::Pounds => "pounds",
            WeightUnit::Grams => "grams",
            WeightUnit::Kilograms => "kilograms",
        }
    }

    fn factor(self) -> f64 {
        match self {
            WeightUnit::Ounces => 1.0,
            WeightUnit::Pounds => 16.0,
            WeightUnit::Grams => 0.035274,
            WeightUnit::Kilograms => 35.274,
        }
    }
}

/// 무게를 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    convert_linear(value, from, to)
}
