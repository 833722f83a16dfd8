//! 변환 엔진을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면이나 서비스에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod input;
pub mod quantity;
pub mod registry;
pub mod service;
pub mod ui_cli;
pub mod units;

pub use conversion::{convert, convert_named, ConversionError, UnitPair};
pub use quantity::Category;
