use chrono::{Duration, Months, NaiveDate};

/// 평균 한 달 일수. km 기반 도래일 추정에 쓴다.
const DAYS_PER_MONTH: f64 = 30.4375;

/// 정비 도래 예측 입력.
#[derive(Debug, Clone)]
pub struct MaintenanceInput {
    /// 현재 누적 주행거리 [km]
    pub current_km: f64,
    /// 월 평균 주행거리 [km/월]
    pub monthly_km: f64,
    /// 직전 정비 시점 주행거리 [km]
    pub last_service_km: f64,
    /// 직전 정비일
    pub last_service_date: NaiveDate,
    /// 정비 주기 [km]
    pub interval_km: f64,
    /// 정비 주기 [개월]
    pub interval_months: u32,
}

/// 정비 도래 예측 결과.
#[derive(Debug, Clone)]
pub struct MaintenanceForecast {
    /// 다음 정비 주행거리 [km]
    pub next_service_km: f64,
    /// 남은 주행거리 [km]. 음수면 이미 초과.
    pub km_remaining: f64,
    /// 월 평균 주행거리 기반 도래일 추정. 평균 주행 정보가 없으면 None.
    pub due_by_km_estimate: Option<NaiveDate>,
    /// 달력 주기 기반 도래일
    pub due_by_date: Option<NaiveDate>,
    /// 둘 중 이른 도래일
    pub next_due: Option<NaiveDate>,
    pub overdue: bool,
}

/// 주행거리 주기와 달력 주기 중 먼저 도래하는 정비 시점을 예측한다.
pub fn forecast_next_service(input: MaintenanceInput, as_of: NaiveDate) -> MaintenanceForecast {
    let next_service_km = input.last_service_km.max(0.0) + input.interval_km.max(0.0);
    let km_remaining = next_service_km - input.current_km.max(0.0);

    let due_by_km_estimate = if input.monthly_km > 0.0 && input.interval_km > 0.0 {
        let days = (km_remaining.max(0.0) / input.monthly_km * DAYS_PER_MONTH).round() as i64;
        as_of.checked_add_signed(Duration::days(days))
    } else {
        None
    };

    let due_by_date = if input.interval_months > 0 {
        input
            .last_service_date
            .checked_add_months(Months::new(input.interval_months))
    } else {
        None
    };

    let next_due = match (due_by_km_estimate, due_by_date) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };

    let overdue = km_remaining <= 0.0 && input.interval_km > 0.0
        || next_due.map(|d| d <= as_of).unwrap_or(false);

    MaintenanceForecast {
        next_service_km,
        km_remaining,
        due_by_km_estimate,
        due_by_date,
        next_due,
        overdue,
    }
}
