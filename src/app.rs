use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::input::InputError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
    /// 입력값 오류
    #[error("{0}")]
    Input(#[from] InputError),
    /// 표준 입력이 닫힘
    #[error("input closed")]
    InputClosed,
}

/// CLI 대화형 모드의 메인 루프를 실행한다. 설정 변경과 종료 시 설정을 저장한다.
///
/// 표준 입력이 닫히면 종료 메뉴를 고른 것과 같게 처리한다. `precision_override`는
/// 이번 실행의 표시에만 쓰이고 저장되는 설정에는 반영되지 않는다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    precision_override: Option<usize>,
) -> Result<(), AppError> {
    match run_loop(config, config_path, precision_override) {
        Err(AppError::InputClosed) => {
            config.save_to(config_path)?;
            Ok(())
        }
        other => other,
    }
}

fn run_loop(
    config: &mut Config,
    config_path: &Path,
    precision_override: Option<usize>,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(config.default_category)? {
            MenuChoice::Convert(category) => {
                let precision = config.display_precision(precision_override);
                ui_cli::handle_conversion(category, config, precision)?
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("Bye.");
                break;
            }
        }
    }
    Ok(())
}
