use thiserror::Error;
use tracing::debug;

use crate::quantity::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 여섯 가지 카테고리에 없는 이름
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// 카테고리에 속하지 않는 단위 이름
    #[error("unknown unit for {category}: {unit}")]
    UnknownUnit { category: Category, unit: String },
    /// 배율 표가 없는 카테고리(온도)에 배율을 요청함
    #[error("{0} has no linear conversion factors")]
    NotLinear(Category),
}

impl ConversionError {
    pub(crate) fn unknown_unit(category: Category, unit: &str) -> Self {
        ConversionError::UnknownUnit {
            category,
            unit: unit.to_string(),
        }
    }
}

/// 같은 카테고리의 (입력, 변환) 단위 쌍.
///
/// 카테고리마다 자기 단위 enum만 담을 수 있으므로, 일단 만들어진 쌍의 변환은
/// 실패하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPair {
    Length(LengthUnit, LengthUnit),
    Volume(VolumeUnit, VolumeUnit),
    Temperature(TemperatureUnit, TemperatureUnit),
    Weight(WeightUnit, WeightUnit),
    Time(TimeUnit, TimeUnit),
    Speed(SpeedUnit, SpeedUnit),
}

impl UnitPair {
    /// 문자열 단위명을 카테고리의 단위 enum으로 해석한다.
    pub fn parse(category: Category, from: &str, to: &str) -> Result<Self, ConversionError> {
        let pair = match category {
            Category::Length => {
                UnitPair::Length(linear_unit(category, from)?, linear_unit(category, to)?)
            }
            Category::Volume => {
                UnitPair::Volume(linear_unit(category, from)?, linear_unit(category, to)?)
            }
            Category::Temperature => {
                UnitPair::Temperature(temperature_unit(from)?, temperature_unit(to)?)
            }
            Category::Weight => {
                UnitPair::Weight(linear_unit(category, from)?, linear_unit(category, to)?)
            }
            Category::Time => {
                UnitPair::Time(linear_unit(category, from)?, linear_unit(category, to)?)
            }
            Category::Speed => {
                UnitPair::Speed(linear_unit(category, from)?, linear_unit(category, to)?)
            }
        };
        Ok(pair)
    }

    pub fn category(&self) -> Category {
        match self {
            UnitPair::Length(..) => Category::Length,
            UnitPair::Volume(..) => Category::Volume,
            UnitPair::Temperature(..) => Category::Temperature,
            UnitPair::Weight(..) => Category::Weight,
            UnitPair::Time(..) => Category::Time,
            UnitPair::Speed(..) => Category::Speed,
        }
    }

    /// 입력/변환 단위를 맞바꾼 쌍.
    pub fn swapped(self) -> Self {
        match self {
            UnitPair::Length(a, b) => UnitPair::Length(b, a),
            UnitPair::Volume(a, b) => UnitPair::Volume(b, a),
            UnitPair::Temperature(a, b) => UnitPair::Temperature(b, a),
            UnitPair::Weight(a, b) => UnitPair::Weight(b, a),
            UnitPair::Time(a, b) => UnitPair::Time(b, a),
            UnitPair::Speed(a, b) => UnitPair::Speed(b, a),
        }
    }

    /// (입력 단위 이름, 변환 단위 이름)
    pub fn names(&self) -> (&'static str, &'static str) {
        match *self {
            UnitPair::Length(a, b) => (a.name(), b.name()),
            UnitPair::Volume(a, b) => (a.name(), b.name()),
            UnitPair::Temperature(a, b) => (a.name(), b.name()),
            UnitPair::Weight(a, b) => (a.name(), b.name()),
            UnitPair::Time(a, b) => (a.name(), b.name()),
            UnitPair::Speed(a, b) => (a.name(), b.name()),
        }
    }

    /// 값을 변환한다.
    pub fn convert(&self, value: f64) -> f64 {
        match *self {
            UnitPair::Length(from, to) => convert_length(value, from, to),
            UnitPair::Volume(from, to) => convert_volume(value, from, to),
            UnitPair::Temperature(from, to) => convert_temperature(value, from, to),
            UnitPair::Weight(from, to) => convert_weight(value, from, to),
            UnitPair::Time(from, to) => convert_time(value, from, to),
            UnitPair::Speed(from, to) => convert_speed(value, from, to),
        }
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위명은 `"meters"`, `"fluid ounces"`, `"kelvin"`처럼 단위 목록에 나오는 이름을 쓴다.
pub fn convert(
    category: Category,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let pair = UnitPair::parse(category, from_unit_str, to_unit_str)?;
    let result = pair.convert(value);
    debug!(%category, value, from = from_unit_str, to = to_unit_str, result, "converted");
    Ok(result)
}

/// 카테고리도 문자열로 받는 변환. 알 수 없는 카테고리는 `UnknownCategory`로 실패한다.
pub fn convert_named(
    category: &str,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let category: Category = category.parse()?;
    convert(category, value, from_unit_str, to_unit_str)
}

fn linear_unit<U: LinearUnit>(category: Category, s: &str) -> Result<U, ConversionError> {
    U::from_name(s).ok_or_else(|| ConversionError::unknown_unit(category, s))
}

fn temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    TemperatureUnit::from_name(s)
        .ok_or_else(|| ConversionError::unknown_unit(Category::Temperature, s))
}
