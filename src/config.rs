use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::quantity::UnitDomain;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 두 실행 파일이 공유하는 설정 파일 인자.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct ConfigArgs {
    /// 패널 기본값을 읽을 설정 파일
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// 패널 하나의 초기 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDefaults {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl PanelDefaults {
    /// 물리량별 내장 기본값. 단위는 목록의 첫 항목.
    pub fn for_domain(domain: UnitDomain) -> Self {
        let value = match domain {
            UnitDomain::Pressure => 1.0,
            UnitDomain::Temperature => 25.0,
            UnitDomain::Density => 1000.0,
        };
        let first = domain.units()[0].to_string();
        Self {
            value,
            from_unit: first.clone(),
            to_unit: first,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pressure: PanelDefaults,
    pub temperature: PanelDefaults,
    pub density: PanelDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pressure: PanelDefaults::for_domain(UnitDomain::Pressure),
            temperature: PanelDefaults::for_domain(UnitDomain::Temperature),
            density: PanelDefaults::for_domain(UnitDomain::Density),
        }
    }
}

impl Config {
    pub fn panel(&self, domain: UnitDomain) -> &PanelDefaults {
        match domain {
            UnitDomain::Pressure => &self.pressure,
            UnitDomain::Temperature => &self.temperature,
            UnitDomain::Density => &self.density,
        }
    }

    /// 설정을 지정 경로에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!("wrote default config to {}", path.display());
        Ok(cfg)
    }
}
