use chrono::NaiveDate;

use rental_fleet_toolbox::investment::depreciation::{straight_line, DepreciationInput};
use rental_fleet_toolbox::investment::financing::{financing_cost, FinancingCostInput};
use rental_fleet_toolbox::kpi::{fleet_kpis, FleetKpis, VehicleMonthlySnapshot};
use rental_fleet_toolbox::maintenance::{forecast_next_service, MaintenanceInput};
use rental_fleet_toolbox::risk::{assess_payment_risk, PaymentRiskInput, RiskTier};
use rental_fleet_toolbox::vehicle_db;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn clean_payer_scores_zero() {
    let result = assess_payment_risk(PaymentRiskInput {
        total_installments: 24,
        late_payments: 0,
        avg_delay_days: 0.0,
        open_overdue_amount: 0.0,
        monthly_billing: 800_000.0,
    });
    assert_eq!(result.score, 0.0);
    assert_eq!(result.tier, RiskTier::Low);
}

#[test]
fn chronic_delinquent_caps_at_hundred() {
    let result = assess_payment_risk(PaymentRiskInput {
        total_installments: 6,
        late_payments: 6,
        avg_delay_days: 45.0,
        open_overdue_amount: 5_000_000.0,
        monthly_billing: 1_000_000.0,
    });
    assert_eq!(result.score, 100.0);
    assert_eq!(result.tier, RiskTier::High);
}

#[test]
fn mid_risk_lands_in_medium_tier() {
    // 연체 2/10회(8점) + 평균 15일(15점) + 연체 잔액 0.9개월치(9점) = 32점
    let result = assess_payment_risk(PaymentRiskInput {
        total_installments: 10,
        late_payments: 2,
        avg_delay_days: 15.0,
        open_overdue_amount: 900_000.0,
        monthly_billing: 1_000_000.0,
    });
    assert!((result.score - 32.0).abs() < 1e-9);
    assert_eq!(result.tier, RiskTier::Medium);
}

#[test]
fn overdue_without_billing_counts_as_full_exposure() {
    let result = assess_payment_risk(PaymentRiskInput {
        total_installments: 0,
        late_payments: 0,
        avg_delay_days: 0.0,
        open_overdue_amount: 300_000.0,
        monthly_billing: 0.0,
    });
    assert!((result.overdue_ratio - 1.0).abs() < 1e-9);
    assert!((result.score - 30.0).abs() < 1e-9);
    assert_eq!(result.tier, RiskTier::Medium);
}

#[test]
fn mileage_based_service_comes_first() {
    // 월 4,000km 주행이면 남은 2,000km는 보름 거리, 달력 주기(내년 9월)보다 빠르다.
    let forecast = forecast_next_service(
        MaintenanceInput {
            current_km: 18_000.0,
            monthly_km: 4_000.0,
            last_service_km: 10_000.0,
            last_service_date: date(2025, 9, 1),
            interval_km: 10_000.0,
            interval_months: 12,
        },
        date(2026, 8, 1),
    );
    assert_eq!(forecast.next_service_km, 20_000.0);
    assert_eq!(forecast.km_remaining, 2_000.0);
    assert_eq!(forecast.due_by_km_estimate, Some(date(2026, 8, 16)));
    assert_eq!(forecast.due_by_date, Some(date(2026, 9, 1)));
    assert_eq!(forecast.next_due, Some(date(2026, 8, 16)));
    assert!(!forecast.overdue);
}

#[test]
fn exceeded_km_interval_is_overdue() {
    let forecast = forecast_next_service(
        MaintenanceInput {
            current_km: 21_000.0,
            monthly_km: 2_000.0,
            last_service_km: 10_000.0,
            last_service_date: date(2026, 1, 1),
            interval_km: 10_000.0,
            interval_months: 12,
        },
        date(2026, 8, 1),
    );
    assert_eq!(forecast.km_remaining, -1_000.0);
    assert!(forecast.overdue);
    // 이미 초과한 경우 주행거리 기준 도래일은 기준일로 당겨진다.
    assert_eq!(forecast.due_by_km_estimate, Some(date(2026, 8, 1)));
}

#[test]
fn forecast_without_intervals_is_empty() {
    let forecast = forecast_next_service(
        MaintenanceInput {
            current_km: 0.0,
            monthly_km: 0.0,
            last_service_km: 0.0,
            last_service_date: date(2026, 1, 1),
            interval_km: 0.0,
            interval_months: 0,
        },
        date(2026, 8, 1),
    );
    assert_eq!(forecast.due_by_km_estimate, None);
    assert_eq!(forecast.due_by_date, None);
    assert_eq!(forecast.next_due, None);
    assert!(!forecast.overdue);
}

#[test]
fn fleet_kpis_aggregate_two_vehicles() {
    let kpis = fleet_kpis(&[
        VehicleMonthlySnapshot {
            acquisition_cost: 30_000_000.0,
            rent_income: 1_500_000.0,
            operating_cost: 900_000.0,
            days_rented: 25,
            days_available: 30,
        },
        VehicleMonthlySnapshot {
            acquisition_cost: 20_000_000.0,
            rent_income: 1_000_000.0,
            operating_cost: 600_000.0,
            days_rented: 15,
            days_available: 30,
        },
    ]);
    assert_eq!(kpis.vehicle_count, 2);
    assert_eq!(kpis.total_income, 2_500_000.0);
    assert_eq!(kpis.total_cost, 1_500_000.0);
    assert_eq!(kpis.net_income, 1_000_000.0);
    assert!((kpis.utilization_rate - 40.0 / 60.0).abs() < 1e-9);
    assert_eq!(kpis.avg_income_per_vehicle, 1_250_000.0);
    assert!((kpis.fleet_annual_roi_percent - 24.0).abs() < 1e-9);
}

#[test]
fn empty_fleet_yields_zeroed_kpis() {
    assert_eq!(fleet_kpis(&[]), FleetKpis::default());
}

#[test]
fn financing_cost_summary() {
    let result = financing_cost(FinancingCostInput {
        financed_amount: 20_000_000.0,
        installment_value: 400_000.0,
        installments_count: 60,
    });
    assert_eq!(result.total_payment, 24_000_000.0);
    assert_eq!(result.total_interest, 4_000_000.0);
    assert!((result.flat_annual_rate - 0.04).abs() < 1e-9);
}

#[test]
fn straight_line_schedule_floors_at_residual() {
    let schedule = straight_line(DepreciationInput {
        acquisition_cost: 30_000_000.0,
        residual_value: 6_000_000.0,
        useful_life_years: 5.0,
    });
    assert_eq!(schedule.annual_depreciation, 4_800_000.0);
    assert_eq!(schedule.monthly_depreciation, 400_000.0);
    assert_eq!(schedule.book_values.len(), 5);
    assert_eq!(schedule.book_values[0].book_value, 25_200_000.0);
    assert_eq!(schedule.book_values[4].book_value, 6_000_000.0);
    for point in &schedule.book_values {
        assert!(point.book_value >= 6_000_000.0);
    }
}

#[test]
fn zero_life_gives_empty_schedule() {
    let schedule = straight_line(DepreciationInput {
        acquisition_cost: 30_000_000.0,
        residual_value: 0.0,
        useful_life_years: 0.0,
    });
    assert_eq!(schedule.annual_depreciation, 0.0);
    assert!(schedule.book_values.is_empty());
}

#[test]
fn residual_fraction_interpolates_between_ages() {
    // MIDSIZE: 3년 0.57, 5년 0.40 -> 4년은 중간값 0.485
    let residual = vehicle_db::residual_fraction("MIDSIZE", 4.0).unwrap();
    assert!((residual.frac - 0.485).abs() < 1e-9);
    assert!(!residual.clamped);
}

#[test]
fn residual_fraction_clamps_outside_table() {
    let old = vehicle_db::residual_fraction("midsize", 20.0).unwrap();
    assert!((old.frac - 0.14).abs() < 1e-9);
    assert!(old.clamped);

    assert!(vehicle_db::find_class("중형 승용").is_some());
    assert!(vehicle_db::residual_fraction("HOVERCRAFT", 3.0).is_none());
}
