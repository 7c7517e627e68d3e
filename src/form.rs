//! 물리량별 입력 패널 상태와 결과 메시지 생성.
//!
//! GUI 와 CLI 가 같은 패널 모델을 공유한다. 패널은 값/입력 단위/출력 단위를
//! 들고 있다가 `submit` 시점에 변환을 수행하고 표시할 문구를 남긴다.

use log::warn;

use crate::config::PanelDefaults;
use crate::conversion::{self, ConversionError};
use crate::quantity::UnitDomain;

/// 마지막 변환 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(m) | Outcome::Failure(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// 한 물리량의 입력 패널.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub domain: UnitDomain,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub outcome: Option<Outcome>,
}

impl Panel {
    /// 기본 입력값으로 패널을 만든다. 단위는 목록의 첫 항목이 선택된다.
    pub fn new(domain: UnitDomain) -> Self {
        Self::from_defaults(domain, &PanelDefaults::for_domain(domain))
    }

    /// 설정값으로 패널을 만든다. 단위가 해당 물리량에 속하지 않으면 기본값으로 되돌린다.
    pub fn from_defaults(domain: UnitDomain, defaults: &PanelDefaults) -> Self {
        let builtin = PanelDefaults::for_domain(domain);
        let pick = |unit: &str, fallback: &str| match conversion::canonical_unit(domain, unit) {
            Some(u) => u.to_string(),
            None => {
                warn!("{domain} panel: unknown unit '{unit}' in config, using '{fallback}'");
                fallback.to_string()
            }
        };
        Self {
            domain,
            value: defaults.value,
            from_unit: pick(&defaults.from_unit, &builtin.from_unit),
            to_unit: pick(&defaults.to_unit, &builtin.to_unit),
            outcome: None,
        }
    }

    /// 현재 입력으로 변환을 수행하고 결과 문구를 저장한다.
    pub fn submit(&mut self) -> &Outcome {
        let converted =
            conversion::convert(self.domain, self.value, &self.from_unit, &self.to_unit);
        let outcome = match converted {
            Ok(result) => Outcome::Success(format_success(
                self.domain,
                self.value,
                &self.from_unit,
                result,
                &self.to_unit,
            )),
            Err(err) => Outcome::Failure(format_failure(self.domain, &err)),
        };
        self.outcome.insert(outcome)
    }

    pub fn title(&self) -> &'static str {
        match self.domain {
            UnitDomain::Pressure => "Pressure Conversion",
            UnitDomain::Temperature => "Temperature Conversion",
            UnitDomain::Density => "Density Conversion",
        }
    }

    pub fn value_label(&self) -> &'static str {
        match self.domain {
            UnitDomain::Pressure => "Pressure Value:",
            UnitDomain::Temperature => "Temperature Value:",
            UnitDomain::Density => "Density Value:",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.domain {
            UnitDomain::Pressure => "Convert Pressure",
            UnitDomain::Temperature => "Convert Temperature",
            UnitDomain::Density => "Convert Density",
        }
    }
}

/// 세 패널(압력, 온도, 밀도)을 묶는다. 물리량마다 패널이 정확히 하나 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pressure: Panel,
    temperature: Panel,
    density: Panel,
}

impl Form {
    pub fn new(config: &crate::config::Config) -> Self {
        let panel = |d| Panel::from_defaults(d, config.panel(d));
        Self {
            pressure: panel(UnitDomain::Pressure),
            temperature: panel(UnitDomain::Temperature),
            density: panel(UnitDomain::Density),
        }
    }

    pub fn panel(&self, domain: UnitDomain) -> &Panel {
        match domain {
            UnitDomain::Pressure => &self.pressure,
            UnitDomain::Temperature => &self.temperature,
            UnitDomain::Density => &self.density,
        }
    }

    pub fn panel_mut(&mut self, domain: UnitDomain) -> &mut Panel {
        match domain {
            UnitDomain::Pressure => &mut self.pressure,
            UnitDomain::Temperature => &mut self.temperature,
            UnitDomain::Density => &mut self.density,
        }
    }

    /// 화면 순서대로 패널을 돌려준다.
    pub fn panels(&self) -> [&Panel; 3] {
        [&self.pressure, &self.temperature, &self.density]
    }

    pub fn panels_mut(&mut self) -> [&mut Panel; 3] {
        [&mut self.pressure, &mut self.temperature, &mut self.density]
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(&crate::config::Config::default())
    }
}

/// 성공 문구. 온도는 단위 앞에 `°`를 붙인다.
pub fn format_success(domain: UnitDomain, value: f64, from: &str, result: f64, to: &str) -> String {
    let prec = domain.precision();
    let value = format_input(value);
    match domain {
        UnitDomain::Temperature => format!("Result: {value}°{from} is {result:.prec$}°{to}"),
        _ => format!("Result: {value} {from} is {result:.prec$} {to}"),
    }
}

/// 입력값 표기. 정수값도 `1.0`처럼 소수점을 남기고, 지수가 -4 미만이거나
/// 16 이상이면 `1e+20`, `1.5e-05` 같은 지수 표기를 쓴다.
pub fn format_input(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sci = format!("{value:e}");
    if let Some((mantissa, exp)) = sci.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            if value != 0.0 && !(-4..16).contains(&exp) {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exp.abs());
            }
        }
    }
    let plain = format!("{value}");
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

/// 실패 문구. 입력값은 변환하지 않은 채 오류만 알린다.
pub fn format_failure(domain: UnitDomain, err: &ConversionError) -> String {
    format!("Error during {domain} conversion: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panels_select_first_unit() {
        let form = Form::default();
        let summary: Vec<_> = form
            .panels()
            .into_iter()
            .map(|p| (p.domain, p.value, p.from_unit.as_str(), p.to_unit.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (UnitDomain::Pressure, 1.0, "barg", "barg"),
                (UnitDomain::Temperature, 25.0, "C", "C"),
                (UnitDomain::Density, 1000.0, "kg/m3", "kg/m3"),
            ]
        );
    }

    #[test]
    fn pressure_success_uses_three_decimals() {
        let mut panel = Panel::new(UnitDomain::Pressure);
        panel.to_unit = "kPa".into();
        let out = panel.submit().clone();
        assert_eq!(out, Outcome::Success("Result: 1.0 barg is 201.325 kPa".into()));
    }

    #[test]
    fn temperature_success_uses_degree_sign() {
        let mut panel = Panel::new(UnitDomain::Temperature);
        panel.to_unit = "F".into();
        assert_eq!(panel.submit().message(), "Result: 25.0°C is 77.00°F");
    }

    #[test]
    fn failure_keeps_value_and_reports_error() {
        let mut panel = Panel::new(UnitDomain::Density);
        panel.to_unit = "g/cm3".into();
        let out = panel.submit().clone();
        assert!(!out.is_success());
        assert_eq!(
            out.message(),
            "Error during density conversion: unsupported conversion pair: 'kg/m3' -> 'g/cm3'"
        );
        assert_eq!(panel.value, 1000.0);
    }

    #[test]
    fn invalid_configured_unit_falls_back() {
        let defaults = PanelDefaults {
            value: 5.0,
            from_unit: "psi".into(),
            to_unit: "KPA".into(),
        };
        let panel = Panel::from_defaults(UnitDomain::Pressure, &defaults);
        assert_eq!(panel.value, 5.0);
        assert_eq!(panel.from_unit, "barg");
        assert_eq!(panel.to_unit, "barg");

        let defaults = PanelDefaults {
            value: 5.0,
            from_unit: "mmH2O".into(),
            to_unit: "kPa".into(),
        };
        let panel = Panel::from_defaults(UnitDomain::Pressure, &defaults);
        assert_eq!((panel.from_unit.as_str(), panel.to_unit.as_str()), ("mmH2O", "kPa"));
    }

    #[test]
    fn panel_mut_finds_domain() {
        let mut form = Form::default();
        form.panel_mut(UnitDomain::Density).value = 2.0;
        assert_eq!(form.panel(UnitDomain::Density).value, 2.0);
        for domain in UnitDomain::ALL {
            assert_eq!(form.panel_mut(domain).domain, domain);
        }
    }

    #[test]
    fn default_panels_echo_value_with_decimal_point() {
        let mut form = Form::default();
        assert_eq!(
            form.panel_mut(UnitDomain::Pressure).submit().message(),
            "Result: 1.0 barg is 1.000 barg"
        );
        assert_eq!(
            form.panel_mut(UnitDomain::Temperature).submit().message(),
            "Result: 25.0°C is 25.00°C"
        );
        assert_eq!(
            form.panel_mut(UnitDomain::Density).submit().message(),
            "Result: 1000.0 kg/m3 is 1000.000 kg/m3"
        );
    }

    #[test]
    fn input_value_formatting() {
        assert_eq!(format_input(1.0), "1.0");
        assert_eq!(format_input(-40.0), "-40.0");
        assert_eq!(format_input(0.0), "0.0");
        assert_eq!(format_input(101.325), "101.325");
        assert_eq!(format_input(0.0001), "0.0001");
        assert_eq!(format_input(1.5e-5), "1.5e-05");
        assert_eq!(format_input(1e15), "1000000000000000.0");
        assert_eq!(format_input(1e16), "1e+16");
        assert_eq!(format_input(1e20), "1e+20");
        assert_eq!(format_input(-2.5e100), "-2.5e+100");
    }
}
