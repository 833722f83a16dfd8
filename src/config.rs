use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::input::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::quantity::Category;
use crate::registry;

/// `--config`를 주지 않았을 때 쓰는 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 한 카테고리에서 처음 선택되어 있는 단위 쌍.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitChoice {
    pub from: String,
    pub to: String,
}

impl UnitChoice {
    fn for_category(category: Category) -> Self {
        let (from, to) = category.default_units();
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// 각 카테고리별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub length: UnitChoice,
    pub volume: UnitChoice,
    pub temperature: UnitChoice,
    pub weight: UnitChoice,
    pub time: UnitChoice,
    pub speed: UnitChoice,
}

impl DefaultUnits {
    pub fn get(&self, category: Category) -> &UnitChoice {
        match category {
            Category::Length => &self.length,
            Category::Volume => &self.volume,
            Category::Temperature => &self.temperature,
            Category::Weight => &self.weight,
            Category::Time => &self.time,
            Category::Speed => &self.speed,
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: UnitChoice::for_category(Category::Length),
            volume: UnitChoice::for_category(Category::Volume),
            temperature: UnitChoice::for_category(Category::Temperature),
            weight: UnitChoice::for_category(Category::Weight),
            time: UnitChoice::for_category(Category::Time),
            speed: UnitChoice::for_category(Category::Speed),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 결과 표시 소수 자릿수
    pub precision: usize,
    pub default_category: Category,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            default_category: Category::Length,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 허용 범위를 벗어난 소수 자릿수
    #[error("precision {0} is out of range (0..={max})", max = MAX_PRECISION)]
    InvalidPrecision(usize),
    /// 카테고리에 없는 기본 단위
    #[error("default unit '{unit}' is not a {category} unit")]
    InvalidDefault { category: Category, unit: String },
}

impl Config {
    /// 소수 자릿수 범위와 기본 단위가 모두 해당 카테고리에 속하는지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        for category in Category::ALL {
            let choice = self.default_units.get(category);
            for unit in [&choice.from, &choice.to] {
                if !registry::contains(category, unit) {
                    return Err(ConfigError::InvalidDefault {
                        category,
                        unit: unit.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// 화면에 쓸 소수 자릿수. 일회성 지정값이 있으면 그것을 쓰되 설정에는 남기지 않는다.
    pub fn display_precision(&self, override_precision: Option<usize>) -> usize {
        override_precision.unwrap_or(self.precision).min(MAX_PRECISION)
    }

    /// 설정을 지정 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// 지정 경로의 설정을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.validate()?;
    info!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}
