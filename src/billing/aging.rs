use chrono::NaiveDate;

/// 미수 채권 1건.
#[derive(Debug, Clone, Copy)]
pub struct OpenReceivable {
    pub due_date: NaiveDate,
    /// 미수 금액 [원]. 음수는 0으로 취급한다.
    pub amount: f64,
}

/// 연체 구간별 합계 [원].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AgingBuckets {
    /// 납부일 미도래
    pub current: f64,
    pub days_1_30: f64,
    pub days_31_60: f64,
    pub days_61_90: f64,
    pub days_over_90: f64,
}

/// 에이징 리포트.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgingReport {
    pub buckets: AgingBuckets,
    /// 전체 미수 합계 [원]
    pub total_open: f64,
    /// 연체분 합계 [원]
    pub total_overdue: f64,
    /// 연체 건수
    pub overdue_count: u32,
    /// 최장 연체 일수
    pub max_days_past_due: i64,
}

/// 기준일로 미수 채권을 연체 구간별로 집계한다.
pub fn age_receivables(items: &[OpenReceivable], as_of: NaiveDate) -> AgingReport {
    let mut report = AgingReport::default();
    for item in items {
        let amount = item.amount.max(0.0);
        let days_past_due = (as_of - item.due_date).num_days();
        report.total_open += amount;
        if days_past_due <= 0 {
            report.buckets.current += amount;
            continue;
        }

        report.total_overdue += amount;
        report.overdue_count += 1;
        report.max_days_past_due = report.max_days_past_due.max(days_past_due);
        match days_past_due {
            1..=30 => report.buckets.days_1_30 += amount,
            31..=60 => report.buckets.days_31_60 += amount,
            61..=90 => report.buckets.days_61_90 += amount,
            _ => report.buckets.days_over_90 += amount,
        }
    }
    report
}
