use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use unit_converter::app::{self, AppError};
use unit_converter::conversion::UnitPair;
use unit_converter::input::{self, InputError};
use unit_converter::quantity::Category;
use unit_converter::{config, registry, service, ui_cli};

/// 길이, 체적, 온도, 무게, 시간, 속도 단위 변환기.
#[derive(Parser)]
#[command(name = "unit_converter", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// 결과 소수 자릿수 (이번 실행에만 설정값보다 우선, 0..=15)
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=input::MAX_PRECISION as i64)
    )]
    precision: Option<u8>,

    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 값 하나를 변환한다
    Convert {
        category: Category,
        #[arg(allow_negative_numbers = true)]
        value: String,
        from: String,
        to: String,
    },
    /// 카테고리의 단위 목록을 표시한다
    Units { category: Category },
    /// 지원하는 카테고리를 표시한다
    Categories,
    /// 표준 입력의 JSON 요청을 한 줄씩 처리한다
    ServeJson,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령이나 대화형 모드를 실행한다.
fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = try_run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_at(&cli.config)?;
    let precision_override = cli.precision.map(usize::from);
    let precision = cfg.display_precision(precision_override);
    info!(precision, "starting");

    match cli.command {
        None => app::run(&mut cfg, &cli.config, precision_override)?,
        Some(Command::Convert {
            category,
            value,
            from,
            to,
        }) => {
            let value = input::parse_value(&value)?
                .ok_or_else(|| InputError::NotANumber(value.clone()))?;
            let pair = UnitPair::parse(category, &from, &to)?;
            println!("{}", ui_cli::render_converted(&pair, value, precision));
        }
        Some(Command::Units { category }) => match registry::factor_table(category) {
            Some(table) => {
                for (name, factor) in table {
                    println!("{name}\t{factor}");
                }
            }
            None => {
                for name in registry::unit_names(category) {
                    println!("{name}");
                }
            }
        },
        Some(Command::Categories) => {
            for category in Category::ALL {
                println!("{}\t{}", category.name(), category.label());
            }
        }
        Some(Command::ServeJson) => serve_json()?,
    }
    Ok(())
}

fn serve_json() -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", service::handle_json_line(&line))?;
        stdout.flush()?;
    }
    Ok(())
}
