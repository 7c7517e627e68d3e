use std::io::{self, Write};

use crate::app::AppError;
use crate::form::{Outcome, Panel};
use crate::quantity::UnitDomain;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert(UnitDomain),
    ListUnits,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Unit Converter ===");
    println!("1) Pressure");
    println!("2) Temperature");
    println!("3) Density");
    println!("4) List units");
    println!("0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        match parse_menu(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("Invalid selection, try again."),
        }
    }
}

fn parse_menu(s: &str) -> Option<MenuChoice> {
    match s.trim() {
        "1" => Some(MenuChoice::Convert(UnitDomain::Pressure)),
        "2" => Some(MenuChoice::Convert(UnitDomain::Temperature)),
        "3" => Some(MenuChoice::Convert(UnitDomain::Density)),
        "4" => Some(MenuChoice::ListUnits),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 패널 하나를 채우고 변환 결과를 출력한다. 엔터만 누르면 현재 값을 유지한다.
pub fn handle_panel(panel: &mut Panel) -> Result<(), AppError> {
    println!("\n-- {} --", panel.title());
    let prompt = format!("{} [{}] ", panel.value_label(), panel.value);
    panel.value = read_f64_or(&prompt, panel.value)?;
    let units = panel.domain.units();
    panel.from_unit = pick_unit("From Unit:", &units, &panel.from_unit)?;
    panel.to_unit = pick_unit("To Unit:", &units, &panel.to_unit)?;
    match panel.submit() {
        Outcome::Success(msg) => println!("{msg}"),
        Outcome::Failure(msg) => eprintln!("{msg}"),
    }
    Ok(())
}

/// 물리량별 단위 목록을 출력한다. 기준 단위에는 `*`를 붙인다.
pub fn print_units(domains: &[UnitDomain]) {
    for domain in domains {
        println!("{domain}:");
        for line in unit_lines(*domain) {
            println!("{line}");
        }
    }
}

fn unit_lines(domain: UnitDomain) -> Vec<String> {
    domain
        .units()
        .into_iter()
        .map(|u| {
            let mark = if u == domain.base_unit() { " *" } else { "" };
            format!("  {u}{mark}")
        })
        .collect()
}

fn pick_unit(label: &str, units: &[&str], current: &str) -> Result<String, AppError> {
    let options: Vec<String> = units
        .iter()
        .enumerate()
        .map(|(i, u)| format!("{}={u}", i + 1))
        .collect();
    println!("{label} {}", options.join(" "));
    loop {
        let sel = read_line(&format!("Select [{current}]: "))?;
        match select_unit(sel.trim(), units, current) {
            Some(u) => return Ok(u),
            None => println!("Invalid selection, try again."),
        }
    }
}

fn select_unit(sel: &str, units: &[&str], current: &str) -> Option<String> {
    if sel.is_empty() {
        return Some(current.to_string());
    }
    let n = sel.parse::<usize>().ok()?;
    units.get(n.checked_sub(1)?).map(|u| u.to_string())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64_or(prompt: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(current);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a number."),
        }
    }
}
