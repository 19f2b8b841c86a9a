use serde::{Deserialize, Serialize};

/// 차량 취득 정보.
#[derive(Debug, Clone)]
pub struct VehicleAcquisition {
    /// 취득가 [원]. 금융 비용 제외.
    pub acquisition_cost: f64,
}

/// 구매 대금 지급 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    Cash,
    Financing,
}

/// 할부 조건.
#[derive(Debug, Clone)]
pub struct FinancingTerms {
    pub kind: PaymentKind,
    /// 월 할부금 [원]. Cash면 0으로 취급한다.
    pub installment_value: f64,
    /// 할부 횟수. 계약 기록용이며 수익 추정에는 쓰지 않는다.
    pub installments_count: u32,
    /// 할부 원금 [원]. 계약 기록용.
    pub financed_amount: f64,
    /// 금융사. 계약 기록용.
    pub institution: String,
}

impl FinancingTerms {
    /// 일시불 조건을 만든다.
    pub fn cash() -> Self {
        Self {
            kind: PaymentKind::Cash,
            installment_value: 0.0,
            installments_count: 0,
            financed_amount: 0.0,
            institution: String::new(),
        }
    }

    /// 수익 추정에 반영되는 월 금융 비용 [원].
    pub fn monthly_cost(&self) -> f64 {
        match self.kind {
            PaymentKind::Financing => self.installment_value.max(0.0),
            PaymentKind::Cash => 0.0,
        }
    }
}

/// 연간 고정비 [원/년].
#[derive(Debug, Clone)]
pub struct RecurringAnnualExpenses {
    /// 자동차세
    pub tax: f64,
    /// 보험료
    pub insurance: f64,
    /// 검사/등록 관련 비용
    pub licensing: f64,
}

impl RecurringAnnualExpenses {
    /// 연간 합계 [원/년]. 음수 입력은 0으로 클램프한다.
    pub fn annual_total(&self) -> f64 {
        self.tax.max(0.0) + self.insurance.max(0.0) + self.licensing.max(0.0)
    }

    /// 월 환산 합계 [원/월].
    pub fn monthly_total(&self) -> f64 {
        self.annual_total() / 12.0
    }
}

/// 수익 추정에 쓰는 운영 가정값. 배포 단위 설정이며 계산기에서 바꾸지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// 정액법 내용연수 [년]
    pub useful_life_years: f64,
    /// 월 총비용 대비 임대료 마진 계수 (1.3 = 30% 마진)
    pub profit_margin: f64,
    /// 가동률 (실제 대여 중인 시간 비율, 0~1)
    pub occupancy_rate: f64,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            useful_life_years: 5.0,
            profit_margin: 1.3,
            occupancy_rate: 0.8,
        }
    }
}

/// 손익분기 도달 시점.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEven {
    /// 도달까지 걸리는 개월 수
    Reachable(u32),
    /// 월 순수익이 0 이하라 도달 불가
    Unreachable,
}

impl BreakEven {
    pub fn months(&self) -> Option<u32> {
        match self {
            BreakEven::Reachable(m) => Some(*m),
            BreakEven::Unreachable => None,
        }
    }

    /// 도달 불가면 지정한 대체값을 반환한다. CSV 등 평면 표기용.
    pub fn months_or(&self, sentinel: u32) -> u32 {
        self.months().unwrap_or(sentinel)
    }
}

/// 투자 수익 추정 결과. 입력이 바뀔 때마다 새로 계산해 통째로 교체한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// false면 취득가가 없거나 유효하지 않아 수치 전체가 0이다.
    pub computable: bool,
    /// 월 감가상각비 [원/월]
    pub monthly_depreciation: f64,
    /// 월 고정비 [원/월] (세금+보험+검사비의 월 환산)
    pub monthly_recurring_expense: f64,
    /// 월 금융 비용 [원/월]
    pub monthly_financing_cost: f64,
    /// 월 총비용 [원/월]
    pub total_monthly_cost: f64,
    /// 제안 월 임대료 [원/월]
    pub suggested_monthly_rent: f64,
    /// 월 순수익 [원/월] (가동률 반영 수입 - 고정비 - 금융비)
    pub net_monthly_income: f64,
    /// 손익분기 시점
    pub break_even: BreakEven,
    /// 연 환산 수익률 [%]
    pub annual_roi_percent: f64,
}

impl Projection {
    fn empty() -> Self {
        Self {
            computable: false,
            monthly_depreciation: 0.0,
            monthly_recurring_expense: 0.0,
            monthly_financing_cost: 0.0,
            total_monthly_cost: 0.0,
            suggested_monthly_rent: 0.0,
            net_monthly_income: 0.0,
            break_even: BreakEven::Unreachable,
            annual_roi_percent: 0.0,
        }
    }
}

/// 취득·할부·고정비 입력으로 투자 수익을 추정한다.
///
/// 전함수다: 어떤 유한 입력에도 패닉 없이 결과를 돌려준다. 취득가가
/// 유효하지 않으면 computable=false인 0 결과를 반환하고, 음수 입력은
/// 0으로 클램프한다.
pub fn compute_projection(
    acquisition: &VehicleAcquisition,
    financing: &FinancingTerms,
    expenses: &RecurringAnnualExpenses,
    assumptions: &ProjectionAssumptions,
) -> Projection {
    let cost = acquisition.acquisition_cost;
    if !cost.is_finite() || cost <= 0.0 {
        return Projection::empty();
    }

    let useful_life_months = assumptions.useful_life_years * 12.0;
    let monthly_depreciation = if useful_life_months > 0.0 {
        cost / useful_life_months
    } else {
        0.0
    };

    let monthly_recurring_expense = expenses.monthly_total();
    let monthly_financing_cost = financing.monthly_cost();
    let total_monthly_cost =
        monthly_recurring_expense + monthly_financing_cost + monthly_depreciation;

    let suggested_monthly_rent = if assumptions.occupancy_rate > 0.0 {
        total_monthly_cost * assumptions.profit_margin / assumptions.occupancy_rate
    } else {
        0.0
    };

    // 감가상각은 임대료 산정 원가에만 넣고 현금 기준 회수/수익률에는 넣지 않는다.
    let net_monthly_income = suggested_monthly_rent * assumptions.occupancy_rate
        - monthly_recurring_expense
        - monthly_financing_cost;

    let break_even = if net_monthly_income > 0.0 {
        BreakEven::Reachable((cost / net_monthly_income).ceil() as u32)
    } else {
        BreakEven::Unreachable
    };

    let annual_roi_percent = net_monthly_income * 12.0 / cost * 100.0;

    Projection {
        computable: true,
        monthly_depreciation,
        monthly_recurring_expense,
        monthly_financing_cost,
        total_monthly_cost,
        suggested_monthly_rent,
        net_monthly_income,
        break_even,
        annual_roi_percent,
    }
}
