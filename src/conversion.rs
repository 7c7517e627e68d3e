//! 문자열 단위 식별자를 받아 물리량별 변환을 수행하는 진입점.

use log::debug;
use thiserror::Error;

use crate::quantity::{Quantity, UnitDomain};
use crate::units::{DensityUnit, PressureUnit, TemperatureUnit};

/// 단위 식별자가 입력/출력 중 어느 쪽이었는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRole {
    Source,
    Target,
}

impl std::fmt::Display for UnitRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitRole::Source => f.write_str("source"),
            UnitRole::Target => f.write_str("target"),
        }
    }
}

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 해당 물리량의 단위 목록에 없는 식별자
    #[error("unknown {role} unit '{unit}' for {domain}")]
    UnknownUnit {
        domain: UnitDomain,
        role: UnitRole,
        unit: String,
    },
    /// 배율이 정의되지 않은 밀도 단위 쌍
    #[error("unsupported conversion pair: '{from}' -> '{to}'")]
    UnsupportedPair { from: String, to: String },
}

/// 압력을 변환한다. 단위 식별자는 barg, kg/cm2, pasig, kPa, pascal, mmH2O.
pub fn convert_pressure(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from = parse_pressure_unit(from_unit, UnitRole::Source)?;
    let to = parse_pressure_unit(to_unit, UnitRole::Target)?;
    let out = Quantity::new(value, from).to(to).value;
    debug!("pressure {value} {from} -> {out} {to}");
    Ok(out)
}

/// 온도를 변환한다. 단위 식별자는 C, F, K, R.
pub fn convert_temperature(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from = parse_temperature_unit(from_unit, UnitRole::Source)?;
    let to = parse_temperature_unit(to_unit, UnitRole::Target)?;
    let out = Quantity::new(value, from).to(to).value;
    debug!("temperature {value} {from} -> {out} {to}");
    Ok(out)
}

/// 밀도를 변환한다. 목록 밖의 식별자가 섞인 쌍은 모두 `UnsupportedPair`로 처리한다.
pub fn convert_density(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let pair = (parse_density_unit(from_unit), parse_density_unit(to_unit));
    let (Some(from), Some(to)) = pair else {
        return Err(ConversionError::UnsupportedPair {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        });
    };
    let out = Quantity::new(value, from).to(to).value;
    debug!("density {value} {from} -> {out} {to}");
    Ok(out)
}

/// 물리량 종류에 맞는 변환 함수로 분기한다.
pub fn convert(
    domain: UnitDomain,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    match domain {
        UnitDomain::Pressure => convert_pressure(value, from_unit, to_unit),
        UnitDomain::Temperature => convert_temperature(value, from_unit, to_unit),
        UnitDomain::Density => convert_density(value, from_unit, to_unit),
    }
}

/// 식별자가 해당 물리량의 단위 목록에 있으면 그 표기를 돌려준다. 대소문자까지 일치해야 한다.
pub fn canonical_unit(domain: UnitDomain, s: &str) -> Option<&'static str> {
    match domain {
        UnitDomain::Pressure => parse_pressure_unit(s, UnitRole::Source).ok().map(|u| u.as_str()),
        UnitDomain::Temperature => parse_temperature_unit(s, UnitRole::Source)
            .ok()
            .map(|u| u.as_str()),
        UnitDomain::Density => parse_density_unit(s).map(|u| u.as_str()),
    }
}

fn parse_pressure_unit(s: &str, role: UnitRole) -> Result<PressureUnit, ConversionError> {
    PressureUnit::ALL
        .into_iter()
        .find(|u| u.as_str() == s)
        .ok_or_else(|| unknown(UnitDomain::Pressure, role, s))
}

fn parse_temperature_unit(s: &str, role: UnitRole) -> Result<TemperatureUnit, ConversionError> {
    TemperatureUnit::ALL
        .into_iter()
        .find(|u| u.as_str() == s)
        .ok_or_else(|| unknown(UnitDomain::Temperature, role, s))
}

fn parse_density_unit(s: &str) -> Option<DensityUnit> {
    DensityUnit::ALL.into_iter().find(|u| u.as_str() == s)
}

fn unknown(domain: UnitDomain, role: UnitRole, s: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        domain,
        role,
        unit: s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_target_is_reported_as_target() {
        let err = convert_temperature(1.0, "C", "X").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                domain: UnitDomain::Temperature,
                role: UnitRole::Target,
                unit: "X".into(),
            }
        );
    }

    #[test]
    fn source_is_checked_before_target() {
        let err = convert_pressure(1.0, "psi", "bar").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnknownUnit { role: UnitRole::Source, ref unit, .. } if unit == "psi"
        ));
    }

    #[test]
    fn identifiers_must_match_exactly() {
        assert!(matches!(
            convert_pressure(1.0, "KPA", "Pascal"),
            Err(ConversionError::UnknownUnit { role: UnitRole::Source, ref unit, .. })
                if unit == "KPA"
        ));
        assert!(matches!(
            convert_pressure(1.0, "kPa", " pascal "),
            Err(ConversionError::UnknownUnit { role: UnitRole::Target, ref unit, .. })
                if unit == " pascal "
        ));
        assert!(matches!(
            convert_temperature(0.0, "c", "f"),
            Err(ConversionError::UnknownUnit { role: UnitRole::Source, .. })
        ));
        assert!(matches!(
            convert_density(1.0, "LB/FT3", "kg/m3"),
            Err(ConversionError::UnsupportedPair { .. })
        ));
        assert_eq!(canonical_unit(UnitDomain::Density, "LB/FT3"), None);
        assert_eq!(canonical_unit(UnitDomain::Temperature, "c"), None);
        assert_eq!(canonical_unit(UnitDomain::Pressure, "mmH2O"), Some("mmH2O"));
    }

    #[test]
    fn pressure_units_are_not_temperature_units() {
        assert!(convert_temperature(1.0, "kPa", "K").is_err());
        assert_eq!(canonical_unit(UnitDomain::Pressure, "K"), None);
    }

    #[test]
    fn error_messages_name_the_identifier() {
        let err = convert_pressure(1.0, "psi", "kPa").unwrap_err();
        assert_eq!(err.to_string(), "unknown source unit 'psi' for pressure");
        let err = convert_density(1.0, "kg/m3", "g/cm3").unwrap_err();
        assert_eq!(err.to_string(), "unsupported conversion pair: 'kg/m3' -> 'g/cm3'");
    }
}
