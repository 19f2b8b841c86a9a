use chrono::{Months, NaiveDate};

/// 납부 스케줄 생성 입력.
#[derive(Debug, Clone)]
pub struct InstallmentPlanInput {
    /// 총액 [원]
    pub total_amount: f64,
    /// 회차 수
    pub count: u32,
    /// 1회차 납부일
    pub first_due: NaiveDate,
}

/// 납부 회차 1건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Installment {
    /// 회차 번호 (1부터)
    pub seq: u32,
    pub due_date: NaiveDate,
    /// 회차 금액 [원]
    pub amount: f64,
}

/// 스케줄 생성 시 발생 가능한 오류.
#[derive(Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// 회차 수가 0
    EmptyPlan,
    /// 총액이 0 이하
    NonPositiveAmount,
    /// 납부일 월 가산 중 달력 범위 초과
    DateOverflow,
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::EmptyPlan => write!(f, "회차 수는 1 이상이어야 합니다"),
            ScheduleError::NonPositiveAmount => write!(f, "총액은 0보다 커야 합니다"),
            ScheduleError::DateOverflow => write!(f, "납부일 계산이 달력 범위를 벗어났습니다"),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// 총액을 회차 수만큼 나눠 월 단위 납부 스케줄을 만든다.
///
/// 금액은 원 단위 절사로 나누고 끝전은 마지막 회차에 합산해 합계가 총액과
/// 정확히 일치한다. 납부일은 1회차 납부일에서 한 달씩 더하며 말일은
/// 달력에 맞춰 당겨진다 (1/31 -> 2/28).
pub fn generate_schedule(input: InstallmentPlanInput) -> Result<Vec<Installment>, ScheduleError> {
    if input.count == 0 {
        return Err(ScheduleError::EmptyPlan);
    }
    if !input.total_amount.is_finite() || input.total_amount <= 0.0 {
        return Err(ScheduleError::NonPositiveAmount);
    }

    let total = input.total_amount.floor();
    let base = (total / input.count as f64).floor();
    let last = total - base * (input.count - 1) as f64;

    let mut schedule = Vec::with_capacity(input.count as usize);
    for i in 0..input.count {
        let due_date = input
            .first_due
            .checked_add_months(Months::new(i))
            .ok_or(ScheduleError::DateOverflow)?;
        let amount = if i + 1 == input.count { last } else { base };
        schedule.push(Installment {
            seq: i + 1,
            due_date,
            amount,
        });
    }
    Ok(schedule)
}
