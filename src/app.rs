use log::debug;
use thiserror::Error;

use crate::conversion;
use crate::form::{self, Form};
use crate::quantity::UnitDomain;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("{0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류. 메시지는 폼과 같은 문구로 만들어 둔다.
    #[error("{0}")]
    Conversion(String),
}

/// 한 번의 변환을 수행하고 결과 문구를 돌려준다.
pub fn convert_once(
    domain: UnitDomain,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<String, AppError> {
    let result = conversion::convert(domain, value, from_unit, to_unit)
        .map_err(|err| AppError::Conversion(form::format_failure(domain, &err)))?;
    // 변환에 성공했다면 두 식별자 모두 단위 목록의 표기다.
    let from = conversion::canonical_unit(domain, from_unit).unwrap_or(from_unit);
    let to = conversion::canonical_unit(domain, to_unit).unwrap_or(to_unit);
    Ok(form::format_success(domain, value, from, result, to))
}

/// 대화형 CLI 의 메인 루프를 실행한다.
pub fn run(form: &mut Form) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Convert(domain) => {
                debug!("menu: {domain}");
                ui_cli::handle_panel(form.panel_mut(domain))?;
            }
            MenuChoice::ListUnits => ui_cli::print_units(&UnitDomain::ALL),
            MenuChoice::Exit => {
                println!("Bye.");
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_once_formats_like_the_form() {
        let msg = convert_once(UnitDomain::Density, 1.0, "lb/ft3", "kg/m3").unwrap();
        assert_eq!(msg, "Result: 1.0 lb/ft3 is 16.018 kg/m3");
    }

    #[test]
    fn convert_once_rejects_other_spellings() {
        let err = convert_once(UnitDomain::Pressure, 1.0, "KPA", "PASCAL").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error during pressure conversion: unknown source unit 'KPA' for pressure"
        );
        let msg = convert_once(UnitDomain::Pressure, 1.0, "kPa", "pascal").unwrap();
        assert_eq!(msg, "Result: 1.0 kPa is 1000.000 pascal");
    }

    #[test]
    fn convert_once_reports_unknown_unit() {
        let err = convert_once(UnitDomain::Pressure, 1.0, "psi", "kPa").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error during pressure conversion: unknown source unit 'psi' for pressure"
        );
    }
}
