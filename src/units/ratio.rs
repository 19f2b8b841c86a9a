use serde::{Deserialize, Serialize};

/// 비율 단위. 내부 기준은 소수(fraction)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioUnit {
    Percent,
    Fraction,
    BasisPoint,
}

fn to_fraction(value: f64, unit: RatioUnit) -> f64 {
    match unit {
        RatioUnit::Percent => value / 100.0,
        RatioUnit::Fraction => value,
        RatioUnit::BasisPoint => value / 10_000.0,
    }
}

fn from_fraction(value: f64, unit: RatioUnit) -> f64 {
    match unit {
        RatioUnit::Percent => value * 100.0,
        RatioUnit::Fraction => value,
        RatioUnit::BasisPoint => value * 10_000.0,
    }
}

/// 비율 표기를 변환한다.
pub fn convert_ratio(value: f64, from: RatioUnit, to: RatioUnit) -> f64 {
    let base = to_fraction(value, from);
    from_fraction(base, to)
}
