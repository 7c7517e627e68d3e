use serde::{Deserialize, Serialize};

/// 밀도 단위. 암묵적 기준은 kg/m3 이며 단위 쌍별 배율로 직접 변환한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerCubicMeter,
    PoundPerCubicFoot,
}

const LBFT3_PER_KGM3: f64 = 0.06242796;
const KGM3_PER_LBFT3: f64 = 16.01846;

impl DensityUnit {
    pub const ALL: [DensityUnit; 2] = [
        DensityUnit::KgPerCubicMeter,
        DensityUnit::PoundPerCubicFoot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DensityUnit::KgPerCubicMeter => "kg/m3",
            DensityUnit::PoundPerCubicFoot => "lb/ft3",
        }
    }
}

impl std::fmt::Display for DensityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 밀도를 변환한다.
///
/// 두 배율(0.06242796, 16.01846)은 서로 정확한 역수가 아니므로 왕복 변환 시
/// 상대오차 약 2e-7 이 남는다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    match (from, to) {
        (DensityUnit::KgPerCubicMeter, DensityUnit::PoundPerCubicFoot) => value * LBFT3_PER_KGM3,
        (DensityUnit::PoundPerCubicFoot, DensityUnit::KgPerCubicMeter) => value * KGM3_PER_LBFT3,
        _ => value,
    }
}
