//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod linear;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;
pub mod weight;

pub use length::{convert_length, LengthUnit};
pub use linear::{convert_linear, LinearUnit};
pub use speed::{convert_speed, SpeedUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use time::{convert_time, TimeUnit};
pub use volume::{convert_volume, VolumeUnit};
pub use weight::{convert_weight, WeightUnit};
