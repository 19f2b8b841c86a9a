use serde::{Deserialize, Serialize};

/// 금액 표기 단위. 내부 기준은 원이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoneyUnit {
    Won,
    ThousandWon,
    TenThousandWon,
    MillionWon,
    HundredMillionWon,
}

impl MoneyUnit {
    /// 화면 표기용 단위 문자열.
    pub fn label(&self) -> &'static str {
        match self {
            MoneyUnit::Won => "원",
            MoneyUnit::ThousandWon => "천원",
            MoneyUnit::TenThousandWon => "만원",
            MoneyUnit::MillionWon => "백만원",
            MoneyUnit::HundredMillionWon => "억원",
        }
    }
}

fn to_won(value: f64, unit: MoneyUnit) -> f64 {
    match unit {
        MoneyUnit::Won => value,
        MoneyUnit::ThousandWon => value * 1_000.0,
        MoneyUnit::TenThousandWon => value * 10_000.0,
        MoneyUnit::MillionWon => value * 1_000_000.0,
        MoneyUnit::HundredMillionWon => value * 100_000_000.0,
    }
}

fn from_won(value: f64, unit: MoneyUnit) -> f64 {
    match unit {
        MoneyUnit::Won => value,
        MoneyUnit::ThousandWon => value / 1_000.0,
        MoneyUnit::TenThousandWon => value / 10_000.0,
        MoneyUnit::MillionWon => value / 1_000_000.0,
        MoneyUnit::HundredMillionWon => value / 100_000_000.0,
    }
}

/// 금액 표기 단위를 변환한다.
pub fn convert_money(value: f64, from: MoneyUnit, to: MoneyUnit) -> f64 {
    let base = to_won(value, from);
    from_won(base, to)
}
