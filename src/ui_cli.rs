use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::UnitPair;
use crate::input;
use crate::quantity::Category;
use crate::registry;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert(Category),
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
///
/// 빈 줄은 설정의 기본 카테고리를 고른다.
pub fn main_menu(default_category: Category) -> Result<MenuChoice, AppError> {
    println!("\n=== Unit Converter ===");
    for (i, category) in Category::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, category.label());
    }
    println!("7) Settings");
    println!("0) Exit");
    let prompt = format!("Select (enter = {}): ", default_category.label());
    loop {
        let sel = read_line(&prompt)?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(MenuChoice::Convert(default_category));
        }
        if sel == "0" {
            return Ok(MenuChoice::Exit);
        }
        if sel == "7" {
            return Ok(MenuChoice::Settings);
        }
        if let Some(category) = pick_index(sel, Category::ALL.len()).map(|i| Category::ALL[i]) {
            return Ok(MenuChoice::Convert(category));
        }
        println!("Invalid selection, try again.");
    }
}

/// 한 카테고리의 변환 화면을 처리한다.
///
/// 숫자를 입력하면 바로 결과를 보여주고, `s`는 단위 맞바꾸기, `f`/`t`는 입력/변환
/// 단위 변경, 빈 줄은 메인 메뉴로 돌아간다.
pub fn handle_conversion(
    category: Category,
    cfg: &Config,
    precision: usize,
) -> Result<(), AppError> {
    let choice = cfg.default_units.get(category);
    let mut pair = UnitPair::parse(category, &choice.from, &choice.to)?;
    println!("\n-- {} --", category.label());
    print_units(category);
    loop {
        let (from, to) = pair.names();
        println!("[{from} -> {to}]  s) swap  f) from unit  t) to unit  (enter to go back)");
        let line = read_line("Value: ")?;
        match line.trim() {
            "" => return Ok(()),
            "s" => pair = pair.swapped(),
            "f" => {
                let unit = read_unit(category)?;
                pair = UnitPair::parse(category, unit, to)?;
            }
            "t" => {
                let unit = read_unit(category)?;
                pair = UnitPair::parse(category, from, unit)?;
            }
            raw => match input::parse_value(raw) {
                Ok(Some(value)) => println!("{}", render_result(&pair, value, precision)),
                Ok(None) => {}
                Err(err) => println!("{err}"),
            },
        }
    }
}

/// 변환 결과 한 줄. 예: `1.0000 meters = 3.2808 feet`
pub fn render_result(pair: &UnitPair, value: f64, precision: usize) -> String {
    let (from, to) = pair.names();
    let result = pair.convert(value);
    format!(
        "{} = {}",
        input::format_result(value, from, precision),
        input::format_result(result, to, precision)
    )
}

/// 변환 결과만 표시한다. 예: `5280.0000 feet`
///
/// 단위는 사용자가 입력한 철자가 아니라 단위 목록의 이름으로 표시한다.
pub fn render_converted(pair: &UnitPair, value: f64, precision: usize) -> String {
    let (_, to) = pair.names();
    input::format_result(pair.convert(value), to, precision)
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Settings --");
    println!("Current precision: {}", cfg.precision);
    let sel = read_line("New precision (enter to keep): ")?;
    if !sel.trim().is_empty() {
        match sel.trim().parse::<usize>() {
            Ok(p) if p <= input::MAX_PRECISION => cfg.precision = p,
            _ => println!("Invalid precision, keeping {}.", cfg.precision),
        }
    }
    println!("Current default category: {}", cfg.default_category.label());
    let sel = read_line("New default category (enter to keep): ")?;
    if !sel.trim().is_empty() {
        match sel.trim().parse::<Category>() {
            Ok(category) => cfg.default_category = category,
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}

fn print_units(category: Category) {
    for (i, name) in registry::unit_names(category).iter().enumerate() {
        println!("  {}) {name}", i + 1);
    }
}

fn read_unit(category: Category) -> Result<&'static str, AppError> {
    let names = registry::unit_names(category);
    print_units(category);
    loop {
        let sel = read_line("Unit number: ")?;
        if let Some(i) = pick_index(sel.trim(), names.len()) {
            return Ok(names[i]);
        }
        println!("Invalid selection, try again.");
    }
}

/// 1부터 시작하는 메뉴 번호를 0부터 시작하는 인덱스로 바꾼다.
fn pick_index(sel: &str, len: usize) -> Option<usize> {
    match sel.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}
