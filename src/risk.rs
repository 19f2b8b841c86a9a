/// 결제 이력 기반 위험도 평가 입력.
#[derive(Debug, Clone)]
pub struct PaymentRiskInput {
    /// 청구된 전체 회차 수
    pub total_installments: u32,
    /// 그중 연체된 회차 수
    pub late_payments: u32,
    /// 평균 연체 일수
    pub avg_delay_days: f64,
    /// 현재 연체 잔액 [원]
    pub open_overdue_amount: f64,
    /// 월 청구액 [원/월]. 연체 잔액의 상대 규모 산정에 쓴다.
    pub monthly_billing: f64,
}

/// 위험 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// 위험도 평가 결과.
#[derive(Debug, Clone)]
pub struct PaymentRiskResult {
    /// 0~100. 높을수록 위험.
    pub score: f64,
    pub tier: RiskTier,
    /// 연체 회차 비율 (0~1)
    pub late_ratio: f64,
    /// 월 청구액 3개월치 대비 연체 잔액 비율 (0~1 상한)
    pub overdue_ratio: f64,
}

/// 결제 이력으로 위험 점수를 계산한다.
///
/// 가중치는 연체 비율 40점, 평균 연체 일수 30점(30일 상한), 연체 잔액
/// 노출 30점(월 청구액 3개월치 상한). 결정적이며 무작위 요소가 없다.
pub fn assess_payment_risk(input: PaymentRiskInput) -> PaymentRiskResult {
    let late_ratio = if input.total_installments > 0 {
        (input.late_payments as f64 / input.total_installments as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let delay_norm = (input.avg_delay_days.max(0.0) / 30.0).min(1.0);

    let overdue = input.open_overdue_amount.max(0.0);
    let overdue_ratio = if input.monthly_billing > 0.0 {
        (overdue / (input.monthly_billing * 3.0)).min(1.0)
    } else if overdue > 0.0 {
        // 청구액 정보가 없는데 연체가 있으면 최대 노출로 본다.
        1.0
    } else {
        0.0
    };

    let score = (late_ratio * 40.0 + delay_norm * 30.0 + overdue_ratio * 30.0).clamp(0.0, 100.0);
    let tier = if score < 30.0 {
        RiskTier::Low
    } else if score < 60.0 {
        RiskTier::Medium
    } else {
        RiskTier::High
    };

    PaymentRiskResult {
        score,
        tier,
        late_ratio,
        overdue_ratio,
    }
}
