use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 kPa(절대압)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    BarG,
    KgPerCm2,
    PsiG,
    KiloPascal,
    Pascal,
    MmH2O,
}

/// 표준 대기압 [kPa]. barg 환산 시 게이지→절대 보정에 쓴다.
pub const ATM_KPA: f64 = 101.325;
const KPA_PER_BAR: f64 = 100.0;
const KPA_PER_KGCM2: f64 = 98.0665;
const KPA_PER_PSI: f64 = 0.00689476;
const PA_PER_KPA: f64 = 1000.0;
const KPA_PER_MMH2O: f64 = 0.00980638;

impl PressureUnit {
    /// 화면 표시 순서대로 나열한 전체 단위.
    pub const ALL: [PressureUnit; 6] = [
        PressureUnit::BarG,
        PressureUnit::KgPerCm2,
        PressureUnit::PsiG,
        PressureUnit::KiloPascal,
        PressureUnit::Pascal,
        PressureUnit::MmH2O,
    ];

    /// 단위 식별자(폼/메시지에 쓰는 표기).
    pub fn as_str(self) -> &'static str {
        match self {
            PressureUnit::BarG => "barg",
            PressureUnit::KgPerCm2 => "kg/cm2",
            PressureUnit::PsiG => "pasig",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Pascal => "pascal",
            PressureUnit::MmH2O => "mmH2O",
        }
    }
}

impl std::fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 주어진 압력을 kPa(절대)로 변환한다.
///
/// barg 는 대기압을 더해 절대압으로 보정하지만 pasig 는 보정 없이 배율만 적용한다.
/// 두 게이지 단위의 처리 방식이 서로 다르므로 물리적 타당성은 현업 검토가 필요하다.
pub fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::BarG => value * KPA_PER_BAR + ATM_KPA,
        PressureUnit::KgPerCm2 => value * KPA_PER_KGCM2,
        PressureUnit::PsiG => value * KPA_PER_PSI,
        PressureUnit::KiloPascal => value,
        PressureUnit::Pascal => value / PA_PER_KPA,
        PressureUnit::MmH2O => value * KPA_PER_MMH2O,
    }
}

/// kPa 값을 원하는 단위로 변환한다. `to_kpa`의 역변환이다.
pub fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::BarG => (value_kpa - ATM_KPA) / KPA_PER_BAR,
        PressureUnit::KgPerCm2 => value_kpa / KPA_PER_KGCM2,
        PressureUnit::PsiG => value_kpa / KPA_PER_PSI,
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::Pascal => value_kpa * PA_PER_KPA,
        PressureUnit::MmH2O => value_kpa / KPA_PER_MMH2O,
    }
}

/// 압력을 원하는 단위로 변환한다. 같은 단위끼리는 입력값을 그대로 돌려준다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    if from == to {
        return value;
    }
    let kpa = to_kpa(value, from);
    from_kpa(kpa, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn barg_zero_is_one_atmosphere() {
        assert_relative_eq!(to_kpa(0.0, PressureUnit::BarG), ATM_KPA);
    }

    #[test]
    fn pasig_has_no_atmospheric_offset() {
        assert_eq!(to_kpa(0.0, PressureUnit::PsiG), 0.0);
    }

    #[test]
    fn kgcm2_to_pascal() {
        let pa = convert_pressure(1.0, PressureUnit::KgPerCm2, PressureUnit::Pascal);
        assert_relative_eq!(pa, 98_066.5, max_relative = 1e-12);
    }
}
