#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use chrono::NaiveDate;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use rental_fleet_toolbox::{
    billing::{aging, installments},
    config, conversion,
    i18n,
    investment::{depreciation, financing, projection},
    maintenance,
    quantity::QuantityKind,
    risk,
    units::MoneyUnit,
    vehicle_db,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1000.0, 720.0]);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Rental Fleet Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["RF_Tool.png", "icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 프로젝트 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 리눅스/NAS의 Noto CJK 계열
/// 모두 실패 시 Err를 반환해 기본 폰트로 동작한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_candidates = ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR.ttf"];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    let unix_candidates = [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ];
    for cand in unix_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read system font: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("Korean font not found; falling back to default fonts.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

fn parse_date_input(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Projection,
    Depreciation,
    Installments,
    Aging,
    Risk,
    Maintenance,
    UnitConv,
    Settings,
}

/// 연체 에이징 입력 1행. 날짜는 문자열로 받고 계산 시 파싱한다.
struct AgingRow {
    due: String,
    amount: f64,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    show_help: bool,
    // 투자 수익 분석 (매 프레임 재계산)
    proj_cost: f64,
    proj_kind: projection::PaymentKind,
    proj_installment: f64,
    proj_installment_count: u32,
    proj_financed: f64,
    proj_institution: String,
    proj_tax: f64,
    proj_insurance: f64,
    proj_licensing: f64,
    // 감가상각
    dep_cost: f64,
    dep_residual: f64,
    dep_life: f64,
    dep_class: String,
    dep_age: f64,
    dep_result: Option<String>,
    // 납부 스케줄
    inst_total: f64,
    inst_count: u32,
    inst_first_due: String,
    inst_schedule: Vec<installments::Installment>,
    inst_status: Option<String>,
    // 연체 에이징
    aging_rows: Vec<AgingRow>,
    aging_as_of: String,
    aging_result: Option<String>,
    // 결제 위험도
    risk_total: u32,
    risk_late: u32,
    risk_delay: f64,
    risk_overdue: f64,
    risk_billing: f64,
    risk_result: Option<String>,
    // 정비 일정
    maint_current_km: f64,
    maint_monthly_km: f64,
    maint_last_km: f64,
    maint_last_date: String,
    maint_interval_km: f64,
    maint_interval_months: u32,
    maint_as_of: String,
    maint_result: Option<String>,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, None);
        let (conv_from, conv_to) = default_units_for_kind(QuantityKind::Money);
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            lang_save_status: None,
            tab: Tab::Projection,
            show_help: false,
            proj_cost: 0.0,
            proj_kind: projection::PaymentKind::Cash,
            proj_installment: 0.0,
            proj_installment_count: 36,
            proj_financed: 0.0,
            proj_institution: String::new(),
            proj_tax: 0.0,
            proj_insurance: 0.0,
            proj_licensing: 0.0,
            dep_cost: 0.0,
            dep_residual: 0.0,
            dep_life: 5.0,
            dep_class: "MIDSIZE".to_string(),
            dep_age: 3.0,
            dep_result: None,
            inst_total: 0.0,
            inst_count: 12,
            inst_first_due: String::new(),
            inst_schedule: Vec::new(),
            inst_status: None,
            aging_rows: Vec::new(),
            aging_as_of: String::new(),
            aging_result: None,
            risk_total: 12,
            risk_late: 0,
            risk_delay: 0.0,
            risk_overdue: 0.0,
            risk_billing: 0.0,
            risk_result: None,
            maint_current_km: 0.0,
            maint_monthly_km: 0.0,
            maint_last_km: 0.0,
            maint_last_date: String::new(),
            maint_interval_km: 10_000.0,
            maint_interval_months: 12,
            maint_as_of: String::new(),
            maint_result: None,
            conv_kind: QuantityKind::Money,
            conv_value: 0.0,
            conv_from,
            conv_to,
            conv_result: None,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr
            .lookup(key)
            .unwrap_or_else(|| default.to_string())
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.nav.title", "Rental Fleet Toolbox"));
        ui.separator();
        let items = [
            (Tab::Projection, self.txt("gui.nav.projection", "투자 수익 분석")),
            (Tab::Depreciation, self.txt("gui.nav.depreciation", "감가상각")),
            (Tab::Installments, self.txt("gui.nav.installments", "납부 스케줄")),
            (Tab::Aging, self.txt("gui.nav.aging", "연체 에이징")),
            (Tab::Risk, self.txt("gui.nav.risk", "결제 위험도")),
            (Tab::Maintenance, self.txt("gui.nav.maintenance", "정비 일정")),
            (Tab::UnitConv, self.txt("gui.nav.unit_conv", "단위 변환")),
            (Tab::Settings, self.txt("gui.nav.settings", "설정")),
        ];
        for (tab, label) in items {
            ui.selectable_value(&mut self.tab, tab, label);
        }
        ui.separator();
        let help_label = self.txt("gui.nav.help", "도움말 표시");
        ui.checkbox(&mut self.show_help, help_label);
    }

    fn ui_projection(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.projection.title", "투자 수익 분석"));
        if self.show_help {
            ui.small(self.tr.t(i18n::keys::HELP_PROJECTION));
        }
        ui.separator();

        egui::Grid::new("proj_inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                label_with_tip(
                    ui,
                    &self.txt("gui.projection.cost", "취득가 [원]"),
                    &self.txt("gui.projection.cost_tip", "금융 비용을 제외한 차량 구입가"),
                );
                ui.add(egui::DragValue::new(&mut self.proj_cost).speed(100_000.0));
                ui.end_row();

                ui.label(self.txt("gui.projection.payment", "지급 방식"));
                let cash_label = self.txt("gui.projection.cash", "일시불");
                let financing_label = self.txt("gui.projection.financing", "할부");
                ui.horizontal(|ui| {
                    ui.selectable_value(
                        &mut self.proj_kind,
                        projection::PaymentKind::Cash,
                        cash_label,
                    );
                    ui.selectable_value(
                        &mut self.proj_kind,
                        projection::PaymentKind::Financing,
                        financing_label,
                    );
                });
                ui.end_row();

                if self.proj_kind == projection::PaymentKind::Financing {
                    ui.label(self.txt("gui.projection.installment", "월 할부금 [원]"));
                    ui.add(egui::DragValue::new(&mut self.proj_installment).speed(10_000.0));
                    ui.end_row();

                    ui.label(self.txt("gui.projection.installment_count", "할부 횟수"));
                    ui.add(egui::DragValue::new(&mut self.proj_installment_count).speed(1.0));
                    ui.end_row();

                    ui.label(self.txt("gui.projection.financed", "할부 원금 [원]"));
                    ui.add(egui::DragValue::new(&mut self.proj_financed).speed(100_000.0));
                    ui.end_row();

                    ui.label(self.txt("gui.projection.institution", "금융사"));
                    ui.text_edit_singleline(&mut self.proj_institution);
                    ui.end_row();
                }

                ui.label(self.txt("gui.projection.tax", "자동차세 [원/년]"));
                ui.add(egui::DragValue::new(&mut self.proj_tax).speed(10_000.0));
                ui.end_row();

                ui.label(self.txt("gui.projection.insurance", "보험료 [원/년]"));
                ui.add(egui::DragValue::new(&mut self.proj_insurance).speed(10_000.0));
                ui.end_row();

                ui.label(self.txt("gui.projection.licensing", "검사/등록비 [원/년]"));
                ui.add(egui::DragValue::new(&mut self.proj_licensing).speed(10_000.0));
                ui.end_row();
            });

        ui.separator();

        // 입력이 바뀔 때마다 매 프레임 새로 계산해 통째로 교체한다.
        let result = projection::compute_projection(
            &projection::VehicleAcquisition {
                acquisition_cost: self.proj_cost,
            },
            &projection::FinancingTerms {
                kind: self.proj_kind,
                installment_value: self.proj_installment,
                installments_count: self.proj_installment_count,
                financed_amount: self.proj_financed,
                institution: self.proj_institution.clone(),
            },
            &projection::RecurringAnnualExpenses {
                tax: self.proj_tax,
                insurance: self.proj_insurance,
                licensing: self.proj_licensing,
            },
            &self.config.assumptions,
        );

        if !result.computable {
            ui.label(self.tr.t(i18n::keys::PROJECTION_NOT_COMPUTABLE));
            return;
        }

        egui::Grid::new("proj_results")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(self.tr.t(i18n::keys::RESULT_MONTHLY_DEPRECIATION));
                ui.label(format!("{:.0} 원", result.monthly_depreciation));
                ui.end_row();
                ui.label(self.tr.t(i18n::keys::RESULT_MONTHLY_RECURRING));
                ui.label(format!("{:.0} 원", result.monthly_recurring_expense));
                ui.end_row();
                ui.label(self.tr.t(i18n::keys::RESULT_MONTHLY_FINANCING));
                ui.label(format!("{:.0} 원", result.monthly_financing_cost));
                ui.end_row();
                ui.label(self.tr.t(i18n::keys::RESULT_TOTAL_MONTHLY_COST));
                ui.strong(format!("{:.0} 원", result.total_monthly_cost));
                ui.end_row();
                ui.label(self.tr.t(i18n::keys::RESULT_SUGGESTED_RENT));
                ui.strong(format!("{:.0} 원", result.suggested_monthly_rent));
                ui.end_row();
                ui.label(self.tr.t(i18n::keys::RESULT_NET_MONTHLY_INCOME));
                ui.label(format!("{:.0} 원", result.net_monthly_income));
                ui.end_row();
                ui.label(self.tr.t(i18n::keys::RESULT_BREAK_EVEN));
                match result.break_even {
                    projection::BreakEven::Reachable(months) => ui.strong(format!(
                        "{} {}",
                        months,
                        self.tr.t(i18n::keys::UNIT_MONTHS_SUFFIX)
                    )),
                    projection::BreakEven::Unreachable => {
                        ui.strong(self.tr.t(i18n::keys::RESULT_BREAK_EVEN_UNREACHABLE))
                    }
                };
                ui.end_row();
                ui.label(self.tr.t(i18n::keys::RESULT_ANNUAL_ROI));
                ui.strong(format!("{:.1} %", result.annual_roi_percent));
                ui.end_row();
            });

        if self.proj_kind == projection::PaymentKind::Financing && self.proj_financed > 0.0 {
            ui.separator();
            let cost = financing::financing_cost(financing::FinancingCostInput {
                financed_amount: self.proj_financed,
                installment_value: self.proj_installment,
                installments_count: self.proj_installment_count,
            });
            ui.label(fill_template(
                &self.txt(
                    "gui.projection.financing_summary",
                    "총 납부액 {total} 원 / 금융 비용 {interest} 원 / 단리 연 {rate}%",
                ),
                &[
                    ("total", format!("{:.0}", cost.total_payment)),
                    ("interest", format!("{:.0}", cost.total_interest)),
                    ("rate", format!("{:.2}", cost.flat_annual_rate * 100.0)),
                ],
            ));
        }
    }

    fn ui_depreciation(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.dep.title", "감가상각 스케줄"));
        if self.show_help {
            ui.small(self.tr.t(i18n::keys::HELP_DEPRECIATION));
        }
        ui.separator();

        egui::Grid::new("dep_inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(self.txt("gui.dep.cost", "취득가 [원]"));
                ui.add(egui::DragValue::new(&mut self.dep_cost).speed(100_000.0));
                ui.end_row();
                ui.label(self.txt("gui.dep.residual", "잔존가치 [원]"));
                ui.add(egui::DragValue::new(&mut self.dep_residual).speed(100_000.0));
                ui.end_row();
                ui.label(self.txt("gui.dep.life", "내용연수 [년]"));
                ui.add(egui::DragValue::new(&mut self.dep_life).speed(0.5));
                ui.end_row();
                ui.label(self.txt("gui.dep.class", "차급 (잔존가치 참고용)"));
                egui::ComboBox::from_id_source("dep_class")
                    .selected_text(self.dep_class.clone())
                    .show_ui(ui, |ui| {
                        for class in vehicle_db::vehicle_classes() {
                            ui.selectable_value(
                                &mut self.dep_class,
                                class.code.to_string(),
                                format!("{} ({})", class.code, class.name),
                            );
                        }
                    });
                ui.end_row();
                ui.label(self.txt("gui.dep.age", "차령 [년]"));
                ui.add(egui::DragValue::new(&mut self.dep_age).speed(0.5));
                ui.end_row();
            });

        if ui
            .button(self.txt("gui.common.calculate", "계산"))
            .clicked()
        {
            let schedule = depreciation::straight_line(depreciation::DepreciationInput {
                acquisition_cost: self.dep_cost,
                residual_value: self.dep_residual,
                useful_life_years: self.dep_life,
            });
            let mut out = format!(
                "{} {:.0} 원 / {} {:.0} 원\n",
                self.tr.t(i18n::keys::DEPRECIATION_ANNUAL),
                schedule.annual_depreciation,
                self.tr.t(i18n::keys::DEPRECIATION_MONTHLY),
                schedule.monthly_depreciation
            );
            out.push_str(self.tr.t(i18n::keys::DEPRECIATION_BOOK_VALUE_HEADER));
            for point in &schedule.book_values {
                out.push_str(&format!("\n  {:>2}  {:>14.0}", point.year, point.book_value));
            }
            if let Some(residual) = vehicle_db::residual_fraction(&self.dep_class, self.dep_age) {
                out.push_str(&fill_template(
                    &self.txt(
                        "gui.dep.residual_ref",
                        "\n차급 {class} 기준 차령 {age}년 잔존가치율 약 {frac}% (신차가 대비)",
                    ),
                    &[
                        ("class", self.dep_class.clone()),
                        ("age", format!("{:.1}", self.dep_age)),
                        ("frac", format!("{:.0}", residual.frac * 100.0)),
                    ],
                ));
            }
            self.dep_result = Some(out);
        }
        if let Some(ref result) = self.dep_result {
            ui.separator();
            ui.monospace(result);
        }
    }

    fn ui_installments(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.inst.title", "납부 스케줄"));
        if self.show_help {
            ui.small(self.tr.t(i18n::keys::HELP_INSTALLMENTS));
        }
        ui.separator();

        egui::Grid::new("inst_inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(self.txt("gui.inst.total", "총액 [원]"));
                ui.add(egui::DragValue::new(&mut self.inst_total).speed(100_000.0));
                ui.end_row();
                ui.label(self.txt("gui.inst.count", "회차 수"));
                ui.add(egui::DragValue::new(&mut self.inst_count).speed(1.0));
                ui.end_row();
                ui.label(self.txt("gui.inst.first_due", "1회차 납부일 (YYYY-MM-DD)"));
                ui.text_edit_singleline(&mut self.inst_first_due);
                ui.end_row();
            });

        ui.horizontal(|ui| {
            if ui
                .button(self.txt("gui.common.calculate", "계산"))
                .clicked()
            {
                match parse_date_input(&self.inst_first_due) {
                    Some(first_due) => {
                        match installments::generate_schedule(installments::InstallmentPlanInput {
                            total_amount: self.inst_total,
                            count: self.inst_count,
                            first_due,
                        }) {
                            Ok(schedule) => {
                                self.inst_schedule = schedule;
                                self.inst_status = None;
                            }
                            Err(e) => {
                                self.inst_schedule.clear();
                                self.inst_status = Some(e.to_string());
                            }
                        }
                    }
                    None => {
                        self.inst_schedule.clear();
                        self.inst_status =
                            Some(self.tr.t(i18n::keys::ERROR_INVALID_DATE).to_string());
                    }
                }
            }
            if !self.inst_schedule.is_empty()
                && ui
                    .button(self.txt("gui.inst.export_csv", "CSV 내보내기"))
                    .clicked()
            {
                self.export_schedule_csv();
            }
        });

        if let Some(ref status) = self.inst_status {
            ui.colored_label(egui::Color32::LIGHT_RED, status);
        }
        if !self.inst_schedule.is_empty() {
            ui.separator();
            egui::Grid::new("inst_table")
                .num_columns(3)
                .spacing([16.0, 2.0])
                .show(ui, |ui| {
                    ui.strong(self.txt("gui.inst.col_seq", "회차"));
                    ui.strong(self.txt("gui.inst.col_due", "납부일"));
                    ui.strong(self.txt("gui.inst.col_amount", "금액 [원]"));
                    ui.end_row();
                    for item in &self.inst_schedule {
                        ui.label(format!("{}", item.seq));
                        ui.label(item.due_date.to_string());
                        ui.label(format!("{:.0}", item.amount));
                        ui.end_row();
                    }
                });
        }
    }

    fn export_schedule_csv(&mut self) {
        let mut csv = String::from("seq,due_date,amount\n");
        for item in &self.inst_schedule {
            csv.push_str(&format!("{},{},{:.0}\n", item.seq, item.due_date, item.amount));
        }
        if let Some(path) = FileDialog::new()
            .set_file_name("installments.csv")
            .save_file()
        {
            self.inst_status = match fs::write(&path, csv) {
                Ok(()) => Some(fill_template(
                    &self.txt("gui.inst.csv_saved", "저장됨: {path}"),
                    &[("path", path.display().to_string())],
                )),
                Err(e) => Some(format!("CSV: {e}")),
            };
        }
    }

    fn ui_aging(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.aging.title", "연체 에이징"));
        if self.show_help {
            ui.small(self.tr.t(i18n::keys::HELP_AGING));
        }
        ui.separator();

        let mut remove: Option<usize> = None;
        egui::Grid::new("aging_rows")
            .num_columns(3)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.strong(self.txt("gui.aging.col_due", "납부일 (YYYY-MM-DD)"));
                ui.strong(self.txt("gui.aging.col_amount", "금액 [원]"));
                ui.label("");
                ui.end_row();
                for (idx, row) in self.aging_rows.iter_mut().enumerate() {
                    ui.text_edit_singleline(&mut row.due);
                    ui.add(egui::DragValue::new(&mut row.amount).speed(10_000.0));
                    if ui.button("-").clicked() {
                        remove = Some(idx);
                    }
                    ui.end_row();
                }
            });
        if let Some(idx) = remove {
            self.aging_rows.remove(idx);
        }
        ui.horizontal(|ui| {
            if ui.button(self.txt("gui.aging.add_row", "+ 행 추가")).clicked() {
                self.aging_rows.push(AgingRow {
                    due: String::new(),
                    amount: 0.0,
                });
            }
            ui.label(self.txt("gui.aging.as_of", "기준일 (YYYY-MM-DD)"));
            ui.text_edit_singleline(&mut self.aging_as_of);
        });

        if ui
            .button(self.txt("gui.common.calculate", "계산"))
            .clicked()
        {
            match parse_date_input(&self.aging_as_of) {
                Some(as_of) => {
                    let mut items = Vec::new();
                    let mut skipped = 0u32;
                    for row in &self.aging_rows {
                        match parse_date_input(&row.due) {
                            Some(due_date) => items.push(aging::OpenReceivable {
                                due_date,
                                amount: row.amount,
                            }),
                            None => skipped += 1,
                        }
                    }
                    let report = aging::age_receivables(&items, as_of);
                    let mut out = format!(
                        "{} {:.0}\n{} {:.0}\n{} {:.0}\n{} {:.0}\n{} {:.0}\n{} {:.0}\n{} {:.0}\n{} {}\n{} {}",
                        self.tr.t(i18n::keys::AGING_CURRENT),
                        report.buckets.current,
                        self.tr.t(i18n::keys::AGING_1_30),
                        report.buckets.days_1_30,
                        self.tr.t(i18n::keys::AGING_31_60),
                        report.buckets.days_31_60,
                        self.tr.t(i18n::keys::AGING_61_90),
                        report.buckets.days_61_90,
                        self.tr.t(i18n::keys::AGING_OVER_90),
                        report.buckets.days_over_90,
                        self.tr.t(i18n::keys::AGING_TOTAL_OPEN),
                        report.total_open,
                        self.tr.t(i18n::keys::AGING_TOTAL_OVERDUE),
                        report.total_overdue,
                        self.tr.t(i18n::keys::AGING_OVERDUE_COUNT),
                        report.overdue_count,
                        self.tr.t(i18n::keys::AGING_MAX_DAYS),
                        report.max_days_past_due
                    );
                    if skipped > 0 {
                        out.push_str(&fill_template(
                            &self.txt("gui.aging.skipped", "\n(날짜 형식 오류로 {n}건 제외)"),
                            &[("n", skipped.to_string())],
                        ));
                    }
                    self.aging_result = Some(out);
                }
                None => {
                    self.aging_result =
                        Some(self.tr.t(i18n::keys::ERROR_INVALID_DATE).to_string());
                }
            }
        }
        if let Some(ref result) = self.aging_result {
            ui.separator();
            ui.monospace(result);
        }
    }

    fn ui_risk(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.risk.title", "결제 위험도"));
        if self.show_help {
            ui.small(self.tr.t(i18n::keys::HELP_RISK));
        }
        ui.separator();

        egui::Grid::new("risk_inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(self.txt("gui.risk.total", "전체 회차 수"));
                ui.add(egui::DragValue::new(&mut self.risk_total).speed(1.0));
                ui.end_row();
                ui.label(self.txt("gui.risk.late", "연체 회차 수"));
                ui.add(egui::DragValue::new(&mut self.risk_late).speed(1.0));
                ui.end_row();
                ui.label(self.txt("gui.risk.delay", "평균 연체 일수"));
                ui.add(egui::DragValue::new(&mut self.risk_delay).speed(1.0));
                ui.end_row();
                ui.label(self.txt("gui.risk.overdue", "현재 연체 잔액 [원]"));
                ui.add(egui::DragValue::new(&mut self.risk_overdue).speed(10_000.0));
                ui.end_row();
                ui.label(self.txt("gui.risk.billing", "월 청구액 [원]"));
                ui.add(egui::DragValue::new(&mut self.risk_billing).speed(10_000.0));
                ui.end_row();
            });

        if ui
            .button(self.txt("gui.common.calculate", "계산"))
            .clicked()
        {
            let result = risk::assess_payment_risk(risk::PaymentRiskInput {
                total_installments: self.risk_total,
                late_payments: self.risk_late,
                avg_delay_days: self.risk_delay,
                open_overdue_amount: self.risk_overdue,
                monthly_billing: self.risk_billing,
            });
            let tier_key = match result.tier {
                risk::RiskTier::Low => i18n::keys::RISK_TIER_LOW,
                risk::RiskTier::Medium => i18n::keys::RISK_TIER_MEDIUM,
                risk::RiskTier::High => i18n::keys::RISK_TIER_HIGH,
            };
            self.risk_result = Some(format!(
                "{} {:.1} / 100\n{} {}",
                self.tr.t(i18n::keys::RISK_SCORE),
                result.score,
                self.tr.t(i18n::keys::RISK_TIER),
                self.tr.t(tier_key)
            ));
        }
        if let Some(ref result) = self.risk_result {
            ui.separator();
            ui.monospace(result);
        }
    }

    fn ui_maintenance(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.maint.title", "정비 일정"));
        if self.show_help {
            ui.small(self.tr.t(i18n::keys::HELP_MAINTENANCE));
        }
        ui.separator();

        egui::Grid::new("maint_inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(self.txt("gui.maint.current_km", "현재 주행거리 [km]"));
                ui.add(egui::DragValue::new(&mut self.maint_current_km).speed(100.0));
                ui.end_row();
                ui.label(self.txt("gui.maint.monthly_km", "월 평균 주행거리 [km]"));
                ui.add(egui::DragValue::new(&mut self.maint_monthly_km).speed(100.0));
                ui.end_row();
                ui.label(self.txt("gui.maint.last_km", "직전 정비 주행거리 [km]"));
                ui.add(egui::DragValue::new(&mut self.maint_last_km).speed(100.0));
                ui.end_row();
                ui.label(self.txt("gui.maint.last_date", "직전 정비일 (YYYY-MM-DD)"));
                ui.text_edit_singleline(&mut self.maint_last_date);
                ui.end_row();
                ui.label(self.txt("gui.maint.interval_km", "정비 주기 [km]"));
                ui.add(egui::DragValue::new(&mut self.maint_interval_km).speed(500.0));
                ui.end_row();
                ui.label(self.txt("gui.maint.interval_months", "정비 주기 [개월]"));
                ui.add(egui::DragValue::new(&mut self.maint_interval_months).speed(1.0));
                ui.end_row();
                ui.label(self.txt("gui.maint.as_of", "기준일 (YYYY-MM-DD)"));
                ui.text_edit_singleline(&mut self.maint_as_of);
                ui.end_row();
            });

        if ui
            .button(self.txt("gui.common.calculate", "계산"))
            .clicked()
        {
            match (
                parse_date_input(&self.maint_last_date),
                parse_date_input(&self.maint_as_of),
            ) {
                (Some(last_service_date), Some(as_of)) => {
                    let forecast = maintenance::forecast_next_service(
                        maintenance::MaintenanceInput {
                            current_km: self.maint_current_km,
                            monthly_km: self.maint_monthly_km,
                            last_service_km: self.maint_last_km,
                            last_service_date,
                            interval_km: self.maint_interval_km,
                            interval_months: self.maint_interval_months,
                        },
                        as_of,
                    );
                    let mut out = format!(
                        "{} {:.0} km\n{} {:.0} km",
                        self.tr.t(i18n::keys::MAINTENANCE_NEXT_KM),
                        forecast.next_service_km,
                        self.tr.t(i18n::keys::MAINTENANCE_KM_REMAINING),
                        forecast.km_remaining
                    );
                    if let Some(d) = forecast.due_by_km_estimate {
                        out.push_str(&format!(
                            "\n{} {}",
                            self.tr.t(i18n::keys::MAINTENANCE_DUE_BY_KM),
                            d
                        ));
                    }
                    if let Some(d) = forecast.due_by_date {
                        out.push_str(&format!(
                            "\n{} {}",
                            self.tr.t(i18n::keys::MAINTENANCE_DUE_BY_DATE),
                            d
                        ));
                    }
                    match forecast.next_due {
                        Some(d) => out.push_str(&format!(
                            "\n{} {}",
                            self.tr.t(i18n::keys::MAINTENANCE_NEXT_DUE),
                            d
                        )),
                        None => out.push_str(&format!(
                            "\n{}",
                            self.tr.t(i18n::keys::MAINTENANCE_NO_FORECAST)
                        )),
                    }
                    if forecast.overdue {
                        out.push_str(&format!(
                            "\n{}",
                            self.tr.t(i18n::keys::MAINTENANCE_OVERDUE)
                        ));
                    }
                    self.maint_result = Some(out);
                }
                _ => {
                    self.maint_result =
                        Some(self.tr.t(i18n::keys::ERROR_INVALID_DATE).to_string());
                }
            }
        }
        if let Some(ref result) = self.maint_result {
            ui.separator();
            ui.monospace(result);
        }
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.conv.title", "단위 변환"));
        if self.show_help {
            ui.small(self.tr.t(i18n::keys::HELP_UNIT_CONVERSION));
        }
        ui.separator();

        ui.horizontal(|ui| {
            ui.label(self.txt("gui.conv.kind", "수량"));
            egui::ComboBox::from_id_source("conv_kind")
                .selected_text(quantity_label(self.conv_kind))
                .show_ui(ui, |ui| {
                    for (kind, label) in quantity_options() {
                        if ui
                            .selectable_value(&mut self.conv_kind, kind, label)
                            .clicked()
                        {
                            let (from, to) = default_units_for_kind(kind);
                            self.conv_from = from;
                            self.conv_to = to;
                            self.conv_result = None;
                        }
                    }
                });
        });
        ui.horizontal(|ui| {
            ui.label(self.txt("gui.conv.value", "값"));
            ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
            ui.label(self.txt("gui.conv.from", "입력 단위"));
            ui.text_edit_singleline(&mut self.conv_from);
            ui.label(self.txt("gui.conv.to", "변환 단위"));
            ui.text_edit_singleline(&mut self.conv_to);
        });

        if ui
            .button(self.txt("gui.common.calculate", "계산"))
            .clicked()
        {
            self.conv_result = Some(
                match conversion::convert(
                    self.conv_kind,
                    self.conv_value,
                    self.conv_from.trim(),
                    self.conv_to.trim(),
                ) {
                    Ok(v) => format!(
                        "{} {} {}",
                        self.tr.t(i18n::keys::UNIT_CONVERSION_RESULT),
                        v,
                        self.conv_to.trim()
                    ),
                    Err(e) => e.to_string(),
                },
            );
        }
        if let Some(ref result) = self.conv_result {
            ui.separator();
            ui.monospace(result);
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.settings.title", "설정"));
        if self.show_help {
            ui.small(self.tr.t(i18n::keys::HELP_SETTINGS));
        }
        ui.separator();

        ui.horizontal(|ui| {
            ui.label(self.txt("gui.settings.language", "언어 (auto/ko/en)"));
            ui.text_edit_singleline(&mut self.lang_input);
            if ui.button(self.txt("gui.settings.apply", "적용")).clicked() {
                self.config.language = self.lang_input.trim().to_string();
                let code = i18n::resolve_language(&self.config.language, None);
                self.tr = i18n::Translator::new_with_pack(&code, None);
            }
        });

        ui.horizontal(|ui| {
            ui.label(self.txt("gui.settings.money_unit", "기본 금액 단위"));
            egui::ComboBox::from_id_source("money_unit")
                .selected_text(self.config.default_units.money.label())
                .show_ui(ui, |ui| {
                    for unit in [
                        MoneyUnit::Won,
                        MoneyUnit::ThousandWon,
                        MoneyUnit::TenThousandWon,
                        MoneyUnit::MillionWon,
                        MoneyUnit::HundredMillionWon,
                    ] {
                        ui.selectable_value(&mut self.config.default_units.money, unit, unit.label());
                    }
                });
        });

        ui.separator();
        ui.label(fill_template(
            &self.txt(
                "gui.settings.assumptions",
                "수익 추정 가정값: 내용연수 {life}년 / 마진 {margin} / 가동률 {occupancy}",
            ),
            &[
                ("life", format!("{}", self.config.assumptions.useful_life_years)),
                ("margin", format!("{}", self.config.assumptions.profit_margin)),
                (
                    "occupancy",
                    format!("{}", self.config.assumptions.occupancy_rate),
                ),
            ],
        ));
        ui.small(self.txt(
            "gui.settings.assumptions_note",
            "가정값은 config.toml에서 관리한다 (배포 단위 고정).",
        ));

        ui.separator();
        if ui.button(self.txt("gui.settings.save", "설정 저장")).clicked() {
            self.lang_save_status = Some(match self.config.save() {
                Ok(()) => self.tr.t(i18n::keys::SETTINGS_SAVED).to_string(),
                Err(e) => e.to_string(),
            });
        }
        if let Some(ref status) = self.lang_save_status {
            ui.label(status);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 라벨 드래그 선택 방지
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        ctx.set_style(style);

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Projection => self.ui_projection(ui),
                    Tab::Depreciation => self.ui_depreciation(ui),
                    Tab::Installments => self.ui_installments(ui),
                    Tab::Aging => self.ui_aging(ui),
                    Tab::Risk => self.ui_risk(ui),
                    Tab::Maintenance => self.ui_maintenance(ui),
                    Tab::UnitConv => self.ui_unit_conv(ui),
                    Tab::Settings => self.ui_settings(ui),
                });
        });
    }
}

fn quantity_options() -> Vec<(QuantityKind, &'static str)> {
    vec![
        (QuantityKind::Money, "금액"),
        (QuantityKind::Distance, "거리"),
        (QuantityKind::PeriodRate, "기간 요율"),
        (QuantityKind::Ratio, "비율"),
    ]
}

fn quantity_label(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Money => "금액",
        QuantityKind::Distance => "거리",
        QuantityKind::PeriodRate => "기간 요율",
        QuantityKind::Ratio => "비율",
    }
}

fn default_units_for_kind(kind: QuantityKind) -> (String, String) {
    match kind {
        QuantityKind::Money => ("만원".to_string(), "원".to_string()),
        QuantityKind::Distance => ("km".to_string(), "mi".to_string()),
        QuantityKind::PeriodRate => ("월".to_string(), "년".to_string()),
        QuantityKind::Ratio => ("%".to_string(), "bp".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_template_replaces_vars() {
        let out = fill_template(
            "총 {total} 원 / {n}건",
            &[("total", "1200".to_string()), ("n", "3".to_string())],
        );
        assert_eq!(out, "총 1200 원 / 3건");
    }

    #[test]
    fn parse_date_input_accepts_iso() {
        let d = parse_date_input(" 2026-02-28 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert!(parse_date_input("2026/02/28").is_none());
    }

    #[test]
    fn default_units_follow_kind() {
        let (from, to) = default_units_for_kind(QuantityKind::PeriodRate);
        assert_eq!(from, "월");
        assert_eq!(to, "년");
    }

    #[test]
    fn convert_manwon_to_won() {
        let out = conversion::convert(QuantityKind::Money, 1.5, "만원", "원").unwrap();
        assert!((out - 15_000.0).abs() < 1e-9);
    }
}
