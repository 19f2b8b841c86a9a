use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 수량
    UnsupportedQuantity(&'static str),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "지원하지 않는 수량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `만원`, `억원`, `km`, `mi`, `월`, `년`, `%`, `bp` 등을
/// 사용할 수 있고 한글/영문 표기를 모두 받는다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Money => {
            let from = parse_money_unit(from_unit_str)?;
            let to = parse_money_unit(to_unit_str)?;
            Ok(convert_money(value, from, to))
        }
        QuantityKind::Distance => {
            let from = parse_distance_unit(from_unit_str)?;
            let to = parse_distance_unit(to_unit_str)?;
            Ok(convert_distance(value, from, to))
        }
        QuantityKind::PeriodRate => {
            let from = parse_period_unit(from_unit_str)?;
            let to = parse_period_unit(to_unit_str)?;
            Ok(convert_period_rate(value, from, to))
        }
        QuantityKind::Ratio => {
            let from = parse_ratio_unit(from_unit_str)?;
            let to = parse_ratio_unit(to_unit_str)?;
            Ok(convert_ratio(value, from, to))
        }
    }
}

pub fn parse_money_unit(s: &str) -> Result<MoneyUnit, ConversionError> {
    let t = s.trim().to_lowercase();
    match t.as_str() {
        "원" | "won" | "krw" => Ok(MoneyUnit::Won),
        "천원" | "천" | "kwon" | "thousand" => Ok(MoneyUnit::ThousandWon),
        "만원" | "만" | "man" | "manwon" => Ok(MoneyUnit::TenThousandWon),
        "백만원" | "백만" | "mwon" | "million" => Ok(MoneyUnit::MillionWon),
        "억원" | "억" | "eok" | "eokwon" => Ok(MoneyUnit::HundredMillionWon),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_distance_unit(s: &str) -> Result<DistanceUnit, ConversionError> {
    let t = s.trim().to_lowercase();
    match t.as_str() {
        "km" | "킬로미터" => Ok(DistanceUnit::Kilometer),
        "m" | "미터" => Ok(DistanceUnit::Meter),
        "mi" | "mile" | "마일" => Ok(DistanceUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_period_unit(s: &str) -> Result<PeriodUnit, ConversionError> {
    let t = s.trim().to_lowercase();
    match t.as_str() {
        "일" | "d" | "day" => Ok(PeriodUnit::Day),
        "주" | "w" | "week" => Ok(PeriodUnit::Week),
        "월" | "mo" | "month" => Ok(PeriodUnit::Month),
        "년" | "연" | "y" | "year" => Ok(PeriodUnit::Year),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_ratio_unit(s: &str) -> Result<RatioUnit, ConversionError> {
    let t = s.trim().to_lowercase();
    match t.as_str() {
        "%" | "percent" | "pct" | "퍼센트" => Ok(RatioUnit::Percent),
        "소수" | "frac" | "fraction" => Ok(RatioUnit::Fraction),
        "bp" | "basispoint" | "베이시스포인트" => Ok(RatioUnit::BasisPoint),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}
