use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::investment::projection::ProjectionAssumptions;
use crate::units::*;

/// 각 수량별 기본 표시 단위 설정을 담는다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub money: MoneyUnit,
    pub distance: DistanceUnit,
    pub period: PeriodUnit,
    pub ratio: RatioUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            money: MoneyUnit::TenThousandWon,
            distance: DistanceUnit::Kilometer,
            period: PeriodUnit::Month,
            ratio: RatioUnit::Percent,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/en-us 등)
    pub language: String,
    pub default_units: DefaultUnits,
    /// 수익 추정 가정값. 배포 단위로 고정하고 계산 화면에서는 바꾸지 않는다.
    pub assumptions: ProjectionAssumptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            default_units: DefaultUnits::default(),
            assumptions: ProjectionAssumptions::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
