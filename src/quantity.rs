use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// 다루는 물리량 종류를 나타낸다. 여섯 가지로 고정되어 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Volume,
    Temperature,
    Weight,
    Time,
    Speed,
}

impl Category {
    /// 탭 표시 순서.
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Volume,
        Category::Temperature,
        Category::Weight,
        Category::Time,
        Category::Speed,
    ];

    /// 요청/설정에서 쓰는 정식 이름.
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Volume => "volume",
            Category::Temperature => "temperature",
            Category::Weight => "weight",
            Category::Time => "time",
            Category::Speed => "speed",
        }
    }

    /// 화면 표시용 이름.
    pub fn label(self) -> &'static str {
        match self {
            Category::Length => "Distance",
            Category::Volume => "Volume",
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
            Category::Time => "Time",
            Category::Speed => "Speed",
        }
    }

    /// 배율만으로 환산되는지 여부. 온도만 오프셋이 있다.
    pub fn is_linear(self) -> bool {
        !matches!(self, Category::Temperature)
    }

    /// 처음 화면을 열었을 때 선택되어 있는 (입력, 변환) 단위 이름.
    pub fn default_units(self) -> (&'static str, &'static str) {
        match self {
            Category::Length => ("meters", "feet"),
            Category::Volume => ("liters", "gallons"),
            Category::Temperature => ("celsius", "fahrenheit"),
            Category::Weight => ("kilograms", "pounds"),
            Category::Time => ("hours", "minutes"),
            Category::Speed => ("miles per hour", "kilometers per hour"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    /// 정식 이름 외에 표시명 `distance`도 길이로 받아준다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Ok(Category::Length),
            "volume" => Ok(Category::Volume),
            "temperature" => Ok(Category::Temperature),
            "weight" => Ok(Category::Weight),
            "time" => Ok(Category::Time),
            "speed" => Ok(Category::Speed),
            _ => Err(ConversionError::UnknownCategory(s.to_string())),
        }
    }
}
