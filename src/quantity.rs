use serde::{Deserialize, Serialize};

use crate::units::{DensityUnit, PressureUnit, TemperatureUnit};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitDomain {
    Pressure,
    Temperature,
    Density,
}

impl UnitDomain {
    /// 폼에 표시되는 순서.
    pub const ALL: [UnitDomain; 3] = [
        UnitDomain::Pressure,
        UnitDomain::Temperature,
        UnitDomain::Density,
    ];

    /// 소문자 이름. 오류 메시지와 설정 파일 섹션 이름으로 쓴다.
    pub fn name(self) -> &'static str {
        match self {
            UnitDomain::Pressure => "pressure",
            UnitDomain::Temperature => "temperature",
            UnitDomain::Density => "density",
        }
    }

    /// 선택 가능한 단위 식별자 목록(표시 순서).
    pub fn units(self) -> Vec<&'static str> {
        match self {
            UnitDomain::Pressure => PressureUnit::ALL.iter().map(|u| u.as_str()).collect(),
            UnitDomain::Temperature => TemperatureUnit::ALL.iter().map(|u| u.as_str()).collect(),
            UnitDomain::Density => DensityUnit::ALL.iter().map(|u| u.as_str()).collect(),
        }
    }

    /// 변환 시 경유하는 기준 단위.
    pub fn base_unit(self) -> &'static str {
        match self {
            UnitDomain::Pressure => PressureUnit::KiloPascal.as_str(),
            UnitDomain::Temperature => TemperatureUnit::Kelvin.as_str(),
            UnitDomain::Density => DensityUnit::KgPerCubicMeter.as_str(),
        }
    }

    /// 결과 표시 소수 자릿수.
    pub fn precision(self) -> usize {
        match self {
            UnitDomain::Pressure | UnitDomain::Density => 3,
            UnitDomain::Temperature => 2,
        }
    }
}

impl std::fmt::Display for UnitDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 값과 단위의 쌍. 요청마다 만들어 쓰고 버린다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<U> {
    pub value: f64,
    pub unit: U,
}

impl<U: Copy> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }
}

impl Quantity<PressureUnit> {
    pub fn to(self, unit: PressureUnit) -> Self {
        Quantity::new(crate::units::convert_pressure(self.value, self.unit, unit), unit)
    }
}

impl Quantity<TemperatureUnit> {
    pub fn to(self, unit: TemperatureUnit) -> Self {
        Quantity::new(crate::units::convert_temperature(self.value, self.unit, unit), unit)
    }
}

impl Quantity<DensityUnit> {
    pub fn to(self, unit: DensityUnit) -> Self {
        Quantity::new(crate::units::convert_density(self.value, self.unit, unit), unit)
    }
}
