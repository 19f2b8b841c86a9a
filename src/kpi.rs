/// 차량 한 대의 월간 운영 실적.
#[derive(Debug, Clone)]
pub struct VehicleMonthlySnapshot {
    /// 취득가 [원]
    pub acquisition_cost: f64,
    /// 월 임대 수입 [원]
    pub rent_income: f64,
    /// 월 운영 비용 [원] (고정비+금융비+정비비)
    pub operating_cost: f64,
    /// 해당 월 대여 일수
    pub days_rented: u32,
    /// 해당 월 가동 가능 일수
    pub days_available: u32,
}

/// 차량군 월간 KPI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetKpis {
    pub vehicle_count: u32,
    /// 월 수입 합계 [원]
    pub total_income: f64,
    /// 월 비용 합계 [원]
    pub total_cost: f64,
    /// 월 순수익 [원]
    pub net_income: f64,
    /// 가동률 (대여 일수 / 가동 가능 일수, 0~1)
    pub utilization_rate: f64,
    /// 대당 월 수입 [원]
    pub avg_income_per_vehicle: f64,
    /// 취득가 합계 대비 연 환산 수익률 [%]
    pub fleet_annual_roi_percent: f64,
}

/// 차량별 월간 실적을 차량군 KPI로 집계한다. 빈 목록이면 0 결과를 돌려준다.
pub fn fleet_kpis(snapshots: &[VehicleMonthlySnapshot]) -> FleetKpis {
    if snapshots.is_empty() {
        return FleetKpis::default();
    }

    let mut total_income = 0.0;
    let mut total_cost = 0.0;
    let mut total_acquisition = 0.0;
    let mut days_rented = 0u64;
    let mut days_available = 0u64;
    for s in snapshots {
        total_income += s.rent_income.max(0.0);
        total_cost += s.operating_cost.max(0.0);
        total_acquisition += s.acquisition_cost.max(0.0);
        days_rented += s.days_rented as u64;
        days_available += s.days_available as u64;
    }

    let net_income = total_income - total_cost;
    let utilization_rate = if days_available > 0 {
        (days_rented as f64 / days_available as f64).min(1.0)
    } else {
        0.0
    };
    let fleet_annual_roi_percent = if total_acquisition > 0.0 {
        net_income * 12.0 / total_acquisition * 100.0
    } else {
        0.0
    };

    FleetKpis {
        vehicle_count: snapshots.len() as u32,
        total_income,
        total_cost,
        net_income,
        utilization_rate,
        avg_income_per_vehicle: total_income / snapshots.len() as f64,
        fleet_annual_roi_percent,
    }
}
