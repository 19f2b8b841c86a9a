use serde::{Deserialize, Serialize};

/// 요율 기간 단위. 내부 기준은 연간(원/년)이다.
///
/// 월은 연 12회, 주는 연 52회, 일은 연 365회로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    Day,
    Week,
    Month,
    Year,
}

fn to_per_year(value: f64, unit: PeriodUnit) -> f64 {
    match unit {
        PeriodUnit::Day => value * 365.0,
        PeriodUnit::Week => value * 52.0,
        PeriodUnit::Month => value * 12.0,
        PeriodUnit::Year => value,
    }
}

fn from_per_year(value: f64, unit: PeriodUnit) -> f64 {
    match unit {
        PeriodUnit::Day => value / 365.0,
        PeriodUnit::Week => value / 52.0,
        PeriodUnit::Month => value / 12.0,
        PeriodUnit::Year => value,
    }
}

/// 기간당 금액 요율을 변환한다. (예: 원/월 -> 원/년)
pub fn convert_period_rate(value: f64, from: PeriodUnit, to: PeriodUnit) -> f64 {
    let base = to_per_year(value, from);
    from_per_year(base, to)
}
