//! 카테고리별 단위 목록과 배율 조회.

use crate::conversion::ConversionError;
use crate::quantity::Category;
use crate::units::linear::{self, LinearUnit};
use crate::units::*;

/// 카테고리의 단위 이름을 표시 순서대로 돌려준다. 비어 있는 경우는 없다.
pub fn unit_names(category: Category) -> Vec<&'static str> {
    match category {
        Category::Length => linear::names::<LengthUnit>(),
        Category::Volume => linear::names::<VolumeUnit>(),
        Category::Temperature => TemperatureUnit::ALL.iter().map(|u| u.name()).collect(),
        Category::Weight => linear::names::<WeightUnit>(),
        Category::Time => linear::names::<TimeUnit>(),
        Category::Speed => linear::names::<SpeedUnit>(),
    }
}

/// 이름이 해당 카테고리의 단위인지 확인한다.
pub fn contains(category: Category, unit: &str) -> bool {
    match category {
        Category::Temperature => TemperatureUnit::from_name(unit).is_some(),
        _ => factor_for(category, unit).is_ok(),
    }
}

/// 선형 카테고리에서 단위의 배율을 조회한다.
pub fn factor_for(category: Category, unit: &str) -> Result<f64, ConversionError> {
    let factor = match category {
        Category::Length => lookup::<LengthUnit>(unit),
        Category::Volume => lookup::<VolumeUnit>(unit),
        Category::Weight => lookup::<WeightUnit>(unit),
        Category::Time => lookup::<TimeUnit>(unit),
        Category::Speed => lookup::<SpeedUnit>(unit),
        Category::Temperature => return Err(ConversionError::NotLinear(category)),
    };
    factor.ok_or_else(|| ConversionError::unknown_unit(category, unit))
}

/// 선형 카테고리의 `(이름, 배율)` 표. 온도는 `None`.
pub fn factor_table(category: Category) -> Option<Vec<(&'static str, f64)>> {
    match category {
        Category::Length => Some(linear::factor_table::<LengthUnit>()),
        Category::Volume => Some(linear::factor_table::<VolumeUnit>()),
        Category::Weight => Some(linear::factor_table::<WeightUnit>()),
        Category::Time => Some(linear::factor_table::<TimeUnit>()),
        Category::Speed => Some(linear::factor_table::<SpeedUnit>()),
        Category::Temperature => None,
    }
}

/// 카테고리의 기준 단위 이름. 온도는 섭씨를 기준으로 삼는다.
pub fn base_unit(category: Category) -> Option<&'static str> {
    match category {
        Category::Length => LengthUnit::base().map(LinearUnit::name),
        Category::Volume => VolumeUnit::base().map(LinearUnit::name),
        Category::Weight => WeightUnit::base().map(LinearUnit::name),
        Category::Time => TimeUnit::base().map(LinearUnit::name),
        Category::Speed => SpeedUnit::base().map(LinearUnit::name),
        Category::Temperature => Some(TemperatureUnit::Celsius.name()),
    }
}

fn lookup<U: LinearUnit>(unit: &str) -> Option<f64> {
    U::from_name(unit).map(LinearUnit::factor)
}
