use std::io::{self, Write};

use chrono::NaiveDate;

use crate::app::AppError;
use crate::billing::{aging, installments};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::investment::{depreciation, projection};
use crate::maintenance;
use crate::quantity::QuantityKind;
use crate::risk;
use crate::units::MoneyUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Projection,
    Depreciation,
    Installments,
    Aging,
    Risk,
    Maintenance,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PROJECTION));
    println!("{}", tr.t(keys::MAIN_MENU_DEPRECIATION));
    println!("{}", tr.t(keys::MAIN_MENU_INSTALLMENTS));
    println!("{}", tr.t(keys::MAIN_MENU_AGING));
    println!("{}", tr.t(keys::MAIN_MENU_RISK));
    println!("{}", tr.t(keys::MAIN_MENU_MAINTENANCE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Projection),
            "2" => return Ok(MenuChoice::Depreciation),
            "3" => return Ok(MenuChoice::Installments),
            "4" => return Ok(MenuChoice::Aging),
            "5" => return Ok(MenuChoice::Risk),
            "6" => return Ok(MenuChoice::Maintenance),
            "7" => return Ok(MenuChoice::UnitConversion),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 투자 수익 분석 메뉴를 처리한다.
pub fn handle_projection(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROJECTION_HEADING));
    let cost = read_f64(tr, tr.t(keys::PROMPT_ACQUISITION_COST))?;
    let kind_sel = read_line(tr.t(keys::PROMPT_PAYMENT_KIND))?;
    let financing = if kind_sel.trim() == "2" {
        let installment = read_f64(tr, tr.t(keys::PROMPT_INSTALLMENT_VALUE))?;
        projection::FinancingTerms {
            kind: projection::PaymentKind::Financing,
            installment_value: installment,
            installments_count: 0,
            financed_amount: 0.0,
            institution: String::new(),
        }
    } else {
        projection::FinancingTerms::cash()
    };
    let tax = read_f64(tr, tr.t(keys::PROMPT_ANNUAL_TAX))?;
    let insurance = read_f64(tr, tr.t(keys::PROMPT_ANNUAL_INSURANCE))?;
    let licensing = read_f64(tr, tr.t(keys::PROMPT_ANNUAL_LICENSING))?;

    let result = projection::compute_projection(
        &projection::VehicleAcquisition {
            acquisition_cost: cost,
        },
        &financing,
        &projection::RecurringAnnualExpenses {
            tax,
            insurance,
            licensing,
        },
        &cfg.assumptions,
    );

    if !result.computable {
        println!("{}", tr.t(keys::PROJECTION_NOT_COMPUTABLE));
        return Ok(());
    }
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_MONTHLY_DEPRECIATION),
        result.monthly_depreciation
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_MONTHLY_RECURRING),
        result.monthly_recurring_expense
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_MONTHLY_FINANCING),
        result.monthly_financing_cost
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_TOTAL_MONTHLY_COST),
        result.total_monthly_cost
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_SUGGESTED_RENT),
        result.suggested_monthly_rent
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_NET_MONTHLY_INCOME),
        result.net_monthly_income
    );
    match result.break_even {
        projection::BreakEven::Reachable(months) => println!(
            "{} {} {}",
            tr.t(keys::RESULT_BREAK_EVEN),
            months,
            tr.t(keys::UNIT_MONTHS_SUFFIX)
        ),
        projection::BreakEven::Unreachable => println!(
            "{} {}",
            tr.t(keys::RESULT_BREAK_EVEN),
            tr.t(keys::RESULT_BREAK_EVEN_UNREACHABLE)
        ),
    }
    println!(
        "{} {:.1} %",
        tr.t(keys::RESULT_ANNUAL_ROI),
        result.annual_roi_percent
    );
    Ok(())
}

/// 감가상각 스케줄 메뉴를 처리한다.
pub fn handle_depreciation(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DEPRECIATION_HEADING));
    let cost = read_f64(tr, tr.t(keys::PROMPT_ACQUISITION_COST))?;
    let residual = read_f64(tr, tr.t(keys::PROMPT_RESIDUAL_VALUE))?;
    let life_prompt = format!(
        "{}({}) ",
        tr.t(keys::PROMPT_USEFUL_LIFE),
        cfg.assumptions.useful_life_years
    );
    let life_raw = read_line(&life_prompt)?;
    let life = life_raw
        .trim()
        .parse::<f64>()
        .unwrap_or(cfg.assumptions.useful_life_years);

    let schedule = depreciation::straight_line(depreciation::DepreciationInput {
        acquisition_cost: cost,
        residual_value: residual,
        useful_life_years: life,
    });
    println!(
        "{} {:.0} 원",
        tr.t(keys::DEPRECIATION_ANNUAL),
        schedule.annual_depreciation
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::DEPRECIATION_MONTHLY),
        schedule.monthly_depreciation
    );
    println!("{}", tr.t(keys::DEPRECIATION_BOOK_VALUE_HEADER));
    for point in &schedule.book_values {
        println!("  {:>2}  {:>14.0}", point.year, point.book_value);
    }
    Ok(())
}

/// 납부 스케줄 메뉴를 처리한다.
pub fn handle_installments(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INSTALLMENTS_HEADING));
    let total = read_f64(tr, tr.t(keys::PROMPT_TOTAL_AMOUNT))?;
    let count = read_u32(tr, tr.t(keys::PROMPT_INSTALLMENT_COUNT))?;
    let first_due = read_date(tr, tr.t(keys::PROMPT_FIRST_DUE_DATE))?;

    let schedule = installments::generate_schedule(installments::InstallmentPlanInput {
        total_amount: total,
        count,
        first_due,
    })?;
    println!("{}", tr.t(keys::INSTALLMENTS_TABLE_HEADER));
    for item in &schedule {
        println!(
            "{:>4}   {}   {:>12.0}",
            item.seq, item.due_date, item.amount
        );
    }
    Ok(())
}

/// 연체 에이징 메뉴를 처리한다.
pub fn handle_aging(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::AGING_HEADING));
    let count = read_u32(tr, tr.t(keys::PROMPT_RECEIVABLE_COUNT))?;
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let due_date = read_date(tr, tr.t(keys::PROMPT_RECEIVABLE_DUE))?;
        let amount = read_f64(tr, tr.t(keys::PROMPT_RECEIVABLE_AMOUNT))?;
        items.push(aging::OpenReceivable { due_date, amount });
    }
    let as_of = read_date(tr, tr.t(keys::PROMPT_AS_OF_DATE))?;

    let report = aging::age_receivables(&items, as_of);
    println!("{} {:.0} 원", tr.t(keys::AGING_CURRENT), report.buckets.current);
    println!("{} {:.0} 원", tr.t(keys::AGING_1_30), report.buckets.days_1_30);
    println!("{} {:.0} 원", tr.t(keys::AGING_31_60), report.buckets.days_31_60);
    println!("{} {:.0} 원", tr.t(keys::AGING_61_90), report.buckets.days_61_90);
    println!(
        "{} {:.0} 원",
        tr.t(keys::AGING_OVER_90),
        report.buckets.days_over_90
    );
    println!("{} {:.0} 원", tr.t(keys::AGING_TOTAL_OPEN), report.total_open);
    println!(
        "{} {:.0} 원",
        tr.t(keys::AGING_TOTAL_OVERDUE),
        report.total_overdue
    );
    println!("{} {}", tr.t(keys::AGING_OVERDUE_COUNT), report.overdue_count);
    println!("{} {}", tr.t(keys::AGING_MAX_DAYS), report.max_days_past_due);
    Ok(())
}

/// 결제 위험도 메뉴를 처리한다.
pub fn handle_risk(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RISK_HEADING));
    let total = read_u32(tr, tr.t(keys::PROMPT_TOTAL_INSTALLMENTS))?;
    let late = read_u32(tr, tr.t(keys::PROMPT_LATE_PAYMENTS))?;
    let delay = read_f64(tr, tr.t(keys::PROMPT_AVG_DELAY_DAYS))?;
    let overdue = read_f64(tr, tr.t(keys::PROMPT_OPEN_OVERDUE))?;
    let billing = read_f64(tr, tr.t(keys::PROMPT_MONTHLY_BILLING))?;

    let result = risk::assess_payment_risk(risk::PaymentRiskInput {
        total_installments: total,
        late_payments: late,
        avg_delay_days: delay,
        open_overdue_amount: overdue,
        monthly_billing: billing,
    });
    println!("{} {:.1} / 100", tr.t(keys::RISK_SCORE), result.score);
    let tier_key = match result.tier {
        risk::RiskTier::Low => keys::RISK_TIER_LOW,
        risk::RiskTier::Medium => keys::RISK_TIER_MEDIUM,
        risk::RiskTier::High => keys::RISK_TIER_HIGH,
    };
    println!("{} {}", tr.t(keys::RISK_TIER), tr.t(tier_key));
    Ok(())
}

/// 정비 일정 메뉴를 처리한다.
pub fn handle_maintenance(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MAINTENANCE_HEADING));
    let current_km = read_f64(tr, tr.t(keys::PROMPT_CURRENT_KM))?;
    let monthly_km = read_f64(tr, tr.t(keys::PROMPT_MONTHLY_KM))?;
    let last_service_km = read_f64(tr, tr.t(keys::PROMPT_LAST_SERVICE_KM))?;
    let last_service_date = read_date(tr, tr.t(keys::PROMPT_LAST_SERVICE_DATE))?;
    let interval_km = read_f64(tr, tr.t(keys::PROMPT_INTERVAL_KM))?;
    let interval_months = read_u32(tr, tr.t(keys::PROMPT_INTERVAL_MONTHS))?;
    let as_of = read_date(tr, tr.t(keys::PROMPT_AS_OF_DATE))?;

    let forecast = maintenance::forecast_next_service(
        maintenance::MaintenanceInput {
            current_km,
            monthly_km,
            last_service_km,
            last_service_date,
            interval_km,
            interval_months,
        },
        as_of,
    );
    println!(
        "{} {:.0} km",
        tr.t(keys::MAINTENANCE_NEXT_KM),
        forecast.next_service_km
    );
    println!(
        "{} {:.0} km",
        tr.t(keys::MAINTENANCE_KM_REMAINING),
        forecast.km_remaining
    );
    if let Some(d) = forecast.due_by_km_estimate {
        println!("{} {}", tr.t(keys::MAINTENANCE_DUE_BY_KM), d);
    }
    if let Some(d) = forecast.due_by_date {
        println!("{} {}", tr.t(keys::MAINTENANCE_DUE_BY_DATE), d);
    }
    match forecast.next_due {
        Some(d) => println!("{} {}", tr.t(keys::MAINTENANCE_NEXT_DUE), d),
        None => println!("{}", tr.t(keys::MAINTENANCE_NO_FORECAST)),
    }
    if forecast.overdue {
        println!("{}", tr.t(keys::MAINTENANCE_OVERDUE));
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    println!("{}", tr.t(keys::UNIT_CONVERSION_NOTE));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Money),
        2 => Some(QuantityKind::Distance),
        3 => Some(QuantityKind::PeriodRate),
        4 => Some(QuantityKind::Ratio),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_MONEY_UNIT),
        cfg.default_units.money.label()
    );
    println!(
        "{} {} / {} / {}",
        tr.t(keys::SETTINGS_ASSUMPTIONS),
        cfg.assumptions.useful_life_years,
        cfg.assumptions.profit_margin,
        cfg.assumptions.occupancy_rate
    );

    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = lang.trim();
    if !lang.is_empty() {
        match lang {
            "auto" | "ko" | "ko-kr" | "en" | "en-us" => {
                cfg.language = lang.to_string();
            }
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    println!("{}", tr.t(keys::SETTINGS_MONEY_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.default_units.money = match sel.trim() {
        "1" => MoneyUnit::Won,
        "2" => MoneyUnit::ThousandWon,
        "3" => MoneyUnit::TenThousandWon,
        "4" => MoneyUnit::MillionWon,
        "5" => MoneyUnit::HundredMillionWon,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.default_units.money
        }
    };
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_date(tr: &Translator, prompt: &str) -> Result<NaiveDate, AppError> {
    loop {
        let s = read_line(prompt)?;
        match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
            Ok(d) => return Ok(d),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_DATE)),
        }
    }
}
