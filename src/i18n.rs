use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PROJECTION: &str = "main_menu.projection";
    pub const MAIN_MENU_DEPRECIATION: &str = "main_menu.depreciation";
    pub const MAIN_MENU_INSTALLMENTS: &str = "main_menu.installments";
    pub const MAIN_MENU_AGING: &str = "main_menu.aging";
    pub const MAIN_MENU_RISK: &str = "main_menu.risk";
    pub const MAIN_MENU_MAINTENANCE: &str = "main_menu.maintenance";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_DATE: &str = "error.invalid_date";

    pub const PROJECTION_HEADING: &str = "projection.heading";
    pub const PROMPT_ACQUISITION_COST: &str = "prompt.acquisition_cost";
    pub const PROMPT_PAYMENT_KIND: &str = "prompt.payment_kind";
    pub const PROMPT_INSTALLMENT_VALUE: &str = "prompt.installment_value";
    pub const PROMPT_ANNUAL_TAX: &str = "prompt.annual_tax";
    pub const PROMPT_ANNUAL_INSURANCE: &str = "prompt.annual_insurance";
    pub const PROMPT_ANNUAL_LICENSING: &str = "prompt.annual_licensing";
    pub const PROJECTION_NOT_COMPUTABLE: &str = "projection.not_computable";
    pub const RESULT_MONTHLY_DEPRECIATION: &str = "result.monthly_depreciation";
    pub const RESULT_MONTHLY_RECURRING: &str = "result.monthly_recurring";
    pub const RESULT_MONTHLY_FINANCING: &str = "result.monthly_financing";
    pub const RESULT_TOTAL_MONTHLY_COST: &str = "result.total_monthly_cost";
    pub const RESULT_SUGGESTED_RENT: &str = "result.suggested_rent";
    pub const RESULT_NET_MONTHLY_INCOME: &str = "result.net_monthly_income";
    pub const RESULT_BREAK_EVEN: &str = "result.break_even";
    pub const RESULT_BREAK_EVEN_UNREACHABLE: &str = "result.break_even_unreachable";
    pub const RESULT_ANNUAL_ROI: &str = "result.annual_roi";
    pub const UNIT_MONTHS_SUFFIX: &str = "unit.months_suffix";

    pub const DEPRECIATION_HEADING: &str = "depreciation.heading";
    pub const PROMPT_RESIDUAL_VALUE: &str = "prompt.residual_value";
    pub const PROMPT_USEFUL_LIFE: &str = "prompt.useful_life";
    pub const DEPRECIATION_ANNUAL: &str = "depreciation.annual";
    pub const DEPRECIATION_MONTHLY: &str = "depreciation.monthly";
    pub const DEPRECIATION_BOOK_VALUE_HEADER: &str = "depreciation.book_value_header";

    pub const INSTALLMENTS_HEADING: &str = "installments.heading";
    pub const PROMPT_TOTAL_AMOUNT: &str = "prompt.total_amount";
    pub const PROMPT_INSTALLMENT_COUNT: &str = "prompt.installment_count";
    pub const PROMPT_FIRST_DUE_DATE: &str = "prompt.first_due_date";
    pub const INSTALLMENTS_TABLE_HEADER: &str = "installments.table_header";

    pub const AGING_HEADING: &str = "aging.heading";
    pub const PROMPT_RECEIVABLE_COUNT: &str = "prompt.receivable_count";
    pub const PROMPT_RECEIVABLE_DUE: &str = "prompt.receivable_due";
    pub const PROMPT_RECEIVABLE_AMOUNT: &str = "prompt.receivable_amount";
    pub const PROMPT_AS_OF_DATE: &str = "prompt.as_of_date";
    pub const AGING_CURRENT: &str = "aging.current";
    pub const AGING_1_30: &str = "aging.days_1_30";
    pub const AGING_31_60: &str = "aging.days_31_60";
    pub const AGING_61_90: &str = "aging.days_61_90";
    pub const AGING_OVER_90: &str = "aging.days_over_90";
    pub const AGING_TOTAL_OPEN: &str = "aging.total_open";
    pub const AGING_TOTAL_OVERDUE: &str = "aging.total_overdue";
    pub const AGING_OVERDUE_COUNT: &str = "aging.overdue_count";
    pub const AGING_MAX_DAYS: &str = "aging.max_days";

    pub const RISK_HEADING: &str = "risk.heading";
    pub const PROMPT_TOTAL_INSTALLMENTS: &str = "prompt.total_installments";
    pub const PROMPT_LATE_PAYMENTS: &str = "prompt.late_payments";
    pub const PROMPT_AVG_DELAY_DAYS: &str = "prompt.avg_delay_days";
    pub const PROMPT_OPEN_OVERDUE: &str = "prompt.open_overdue";
    pub const PROMPT_MONTHLY_BILLING: &str = "prompt.monthly_billing";
    pub const RISK_SCORE: &str = "risk.score";
    pub const RISK_TIER: &str = "risk.tier";
    pub const RISK_TIER_LOW: &str = "risk.tier_low";
    pub const RISK_TIER_MEDIUM: &str = "risk.tier_medium";
    pub const RISK_TIER_HIGH: &str = "risk.tier_high";

    pub const MAINTENANCE_HEADING: &str = "maintenance.heading";
    pub const PROMPT_CURRENT_KM: &str = "prompt.current_km";
    pub const PROMPT_MONTHLY_KM: &str = "prompt.monthly_km";
    pub const PROMPT_LAST_SERVICE_KM: &str = "prompt.last_service_km";
    pub const PROMPT_LAST_SERVICE_DATE: &str = "prompt.last_service_date";
    pub const PROMPT_INTERVAL_KM: &str = "prompt.interval_km";
    pub const PROMPT_INTERVAL_MONTHS: &str = "prompt.interval_months";
    pub const MAINTENANCE_NEXT_KM: &str = "maintenance.next_km";
    pub const MAINTENANCE_KM_REMAINING: &str = "maintenance.km_remaining";
    pub const MAINTENANCE_DUE_BY_KM: &str = "maintenance.due_by_km";
    pub const MAINTENANCE_DUE_BY_DATE: &str = "maintenance.due_by_date";
    pub const MAINTENANCE_NEXT_DUE: &str = "maintenance.next_due";
    pub const MAINTENANCE_OVERDUE: &str = "maintenance.overdue";
    pub const MAINTENANCE_NO_FORECAST: &str = "maintenance.no_forecast";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_NOTE: &str = "unit_conversion.note";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_MONEY_UNIT: &str = "settings.current_money_unit";
    pub const SETTINGS_ASSUMPTIONS: &str = "settings.assumptions";
    pub const SETTINGS_MONEY_OPTIONS: &str = "settings.money_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_PROJECTION: &str = "help.projection";
    pub const HELP_DEPRECIATION: &str = "help.depreciation";
    pub const HELP_INSTALLMENTS: &str = "help.installments";
    pub const HELP_AGING: &str = "help.aging";
    pub const HELP_RISK: &str = "help.risk";
    pub const HELP_MAINTENANCE: &str = "help.maintenance";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko-kr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Rental Fleet Toolbox ===",
        MAIN_MENU_PROJECTION => "1) 투자 수익 분석",
        MAIN_MENU_DEPRECIATION => "2) 감가상각 스케줄",
        MAIN_MENU_INSTALLMENTS => "3) 납부 스케줄",
        MAIN_MENU_AGING => "4) 연체 에이징",
        MAIN_MENU_RISK => "5) 결제 위험도",
        MAIN_MENU_MAINTENANCE => "6) 정비 일정",
        MAIN_MENU_UNIT_CONVERSION => "7) 단위 변환기",
        MAIN_MENU_SETTINGS => "8) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_INVALID_DATE => "날짜는 YYYY-MM-DD 형식으로 입력하세요.",
        PROJECTION_HEADING => "\n-- 투자 수익 분석 --",
        PROMPT_ACQUISITION_COST => "취득가 [원]: ",
        PROMPT_PAYMENT_KIND => "지급 방식 (1=일시불, 2=할부): ",
        PROMPT_INSTALLMENT_VALUE => "월 할부금 [원]: ",
        PROMPT_ANNUAL_TAX => "자동차세 [원/년]: ",
        PROMPT_ANNUAL_INSURANCE => "보험료 [원/년]: ",
        PROMPT_ANNUAL_LICENSING => "검사/등록비 [원/년]: ",
        PROJECTION_NOT_COMPUTABLE => "취득가가 없어 추정을 계산할 수 없습니다.",
        RESULT_MONTHLY_DEPRECIATION => "월 감가상각비:",
        RESULT_MONTHLY_RECURRING => "월 고정비:",
        RESULT_MONTHLY_FINANCING => "월 금융 비용:",
        RESULT_TOTAL_MONTHLY_COST => "월 총비용:",
        RESULT_SUGGESTED_RENT => "제안 월 임대료:",
        RESULT_NET_MONTHLY_INCOME => "월 순수익:",
        RESULT_BREAK_EVEN => "손익분기:",
        RESULT_BREAK_EVEN_UNREACHABLE => "도달 불가",
        RESULT_ANNUAL_ROI => "연 수익률:",
        UNIT_MONTHS_SUFFIX => "개월",
        DEPRECIATION_HEADING => "\n-- 감가상각 스케줄 --",
        PROMPT_RESIDUAL_VALUE => "잔존가치 [원]: ",
        PROMPT_USEFUL_LIFE => "내용연수 [년]: ",
        DEPRECIATION_ANNUAL => "연 감가상각비:",
        DEPRECIATION_MONTHLY => "월 감가상각비:",
        DEPRECIATION_BOOK_VALUE_HEADER => "연차별 장부가액 [원]:",
        INSTALLMENTS_HEADING => "\n-- 납부 스케줄 --",
        PROMPT_TOTAL_AMOUNT => "총액 [원]: ",
        PROMPT_INSTALLMENT_COUNT => "회차 수: ",
        PROMPT_FIRST_DUE_DATE => "1회차 납부일 (YYYY-MM-DD): ",
        INSTALLMENTS_TABLE_HEADER => "회차   납부일        금액 [원]",
        AGING_HEADING => "\n-- 연체 에이징 --",
        PROMPT_RECEIVABLE_COUNT => "미수 건수: ",
        PROMPT_RECEIVABLE_DUE => "납부일 (YYYY-MM-DD): ",
        PROMPT_RECEIVABLE_AMOUNT => "금액 [원]: ",
        PROMPT_AS_OF_DATE => "기준일 (YYYY-MM-DD): ",
        AGING_CURRENT => "미도래:",
        AGING_1_30 => "1~30일:",
        AGING_31_60 => "31~60일:",
        AGING_61_90 => "61~90일:",
        AGING_OVER_90 => "90일 초과:",
        AGING_TOTAL_OPEN => "미수 합계:",
        AGING_TOTAL_OVERDUE => "연체 합계:",
        AGING_OVERDUE_COUNT => "연체 건수:",
        AGING_MAX_DAYS => "최장 연체 일수:",
        RISK_HEADING => "\n-- 결제 위험도 --",
        PROMPT_TOTAL_INSTALLMENTS => "전체 회차 수: ",
        PROMPT_LATE_PAYMENTS => "연체 회차 수: ",
        PROMPT_AVG_DELAY_DAYS => "평균 연체 일수: ",
        PROMPT_OPEN_OVERDUE => "현재 연체 잔액 [원]: ",
        PROMPT_MONTHLY_BILLING => "월 청구액 [원]: ",
        RISK_SCORE => "위험 점수:",
        RISK_TIER => "위험 등급:",
        RISK_TIER_LOW => "낮음",
        RISK_TIER_MEDIUM => "보통",
        RISK_TIER_HIGH => "높음",
        MAINTENANCE_HEADING => "\n-- 정비 일정 --",
        PROMPT_CURRENT_KM => "현재 주행거리 [km]: ",
        PROMPT_MONTHLY_KM => "월 평균 주행거리 [km]: ",
        PROMPT_LAST_SERVICE_KM => "직전 정비 주행거리 [km]: ",
        PROMPT_LAST_SERVICE_DATE => "직전 정비일 (YYYY-MM-DD): ",
        PROMPT_INTERVAL_KM => "정비 주기 [km]: ",
        PROMPT_INTERVAL_MONTHS => "정비 주기 [개월]: ",
        MAINTENANCE_NEXT_KM => "다음 정비 주행거리:",
        MAINTENANCE_KM_REMAINING => "남은 주행거리:",
        MAINTENANCE_DUE_BY_KM => "주행거리 기준 도래일:",
        MAINTENANCE_DUE_BY_DATE => "달력 기준 도래일:",
        MAINTENANCE_NEXT_DUE => "다음 정비 도래일:",
        MAINTENANCE_OVERDUE => "정비 시기가 지났습니다.",
        MAINTENANCE_NO_FORECAST => "도래일을 추정할 정보가 없습니다.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 금액  2) 거리  3) 기간 요율  4) 비율",
        UNIT_CONVERSION_NOTE => "참고: 기간 요율은 원/월 -> 원/년처럼 기간당 금액을 환산합니다.",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: 만원, km, 월, %): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: 억원, mi, 년, bp): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_MONEY_UNIT => "기본 금액 단위:",
        SETTINGS_ASSUMPTIONS => "가정값(내용연수/마진/가동률):",
        SETTINGS_MONEY_OPTIONS => "1) 원  2) 천원  3) 만원  4) 백만원  5) 억원",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드(auto/ko/en, 취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        HELP_PROJECTION => "도움말: 취득가, 지급 방식, 연간 고정비를 입력하면 월 비용/제안 임대료/손익분기/연 수익률을 추정합니다.",
        HELP_DEPRECIATION => "도움말: 취득가-잔존가치를 내용연수로 나눈 정액법. 장부가액은 잔존가치 아래로 내려가지 않습니다.",
        HELP_INSTALLMENTS => "도움말: 총액을 회차 수로 나누고 끝전은 마지막 회차에 합산합니다. 말일 납부일은 달력에 맞춰 당겨집니다.",
        HELP_AGING => "도움말: 기준일 대비 연체 일수로 1~30/31~60/61~90/90일 초과 구간에 금액을 집계합니다.",
        HELP_RISK => "도움말: 연체 비율 40점 + 평균 연체 일수 30점 + 연체 잔액 노출 30점. 30점 미만 낮음, 60점 미만 보통.",
        HELP_MAINTENANCE => "도움말: 주행거리 주기와 달력 주기 중 먼저 도래하는 시점을 예측합니다.",
        HELP_UNIT_CONVERSION => "도움말: 수량 번호 -> 값 -> 입력/변환 단위 순으로 입력 (예: 만원/억원, km/mi, 월/년, %/bp).",
        HELP_SETTINGS => "도움말: 언어와 기본 금액 단위를 바꿉니다. 수익 추정 가정값은 config.toml에서 관리합니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Rental Fleet Toolbox ===",
        MAIN_MENU_PROJECTION => "1) Investment Projection",
        MAIN_MENU_DEPRECIATION => "2) Depreciation Schedule",
        MAIN_MENU_INSTALLMENTS => "3) Installment Schedule",
        MAIN_MENU_AGING => "4) Receivable Aging",
        MAIN_MENU_RISK => "5) Payment Risk",
        MAIN_MENU_MAINTENANCE => "6) Maintenance Forecast",
        MAIN_MENU_UNIT_CONVERSION => "7) Unit Converter",
        MAIN_MENU_SETTINGS => "8) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_INVALID_DATE => "Enter the date as YYYY-MM-DD.",
        PROJECTION_HEADING => "\n-- Investment Projection --",
        PROMPT_ACQUISITION_COST => "Acquisition cost [won]: ",
        PROMPT_PAYMENT_KIND => "Payment (1=cash, 2=financing): ",
        PROMPT_INSTALLMENT_VALUE => "Monthly installment [won]: ",
        PROMPT_ANNUAL_TAX => "Vehicle tax [won/yr]: ",
        PROMPT_ANNUAL_INSURANCE => "Insurance [won/yr]: ",
        PROMPT_ANNUAL_LICENSING => "Inspection/licensing [won/yr]: ",
        PROJECTION_NOT_COMPUTABLE => "No acquisition cost; projection not computable.",
        RESULT_MONTHLY_DEPRECIATION => "Monthly depreciation:",
        RESULT_MONTHLY_RECURRING => "Monthly recurring expense:",
        RESULT_MONTHLY_FINANCING => "Monthly financing cost:",
        RESULT_TOTAL_MONTHLY_COST => "Total monthly cost:",
        RESULT_SUGGESTED_RENT => "Suggested monthly rent:",
        RESULT_NET_MONTHLY_INCOME => "Net monthly income:",
        RESULT_BREAK_EVEN => "Break-even:",
        RESULT_BREAK_EVEN_UNREACHABLE => "not reachable",
        RESULT_ANNUAL_ROI => "Annual ROI:",
        UNIT_MONTHS_SUFFIX => "months",
        DEPRECIATION_HEADING => "\n-- Depreciation Schedule --",
        PROMPT_RESIDUAL_VALUE => "Residual value [won]: ",
        PROMPT_USEFUL_LIFE => "Useful life [yr]: ",
        DEPRECIATION_ANNUAL => "Annual depreciation:",
        DEPRECIATION_MONTHLY => "Monthly depreciation:",
        DEPRECIATION_BOOK_VALUE_HEADER => "Year-end book values [won]:",
        INSTALLMENTS_HEADING => "\n-- Installment Schedule --",
        PROMPT_TOTAL_AMOUNT => "Total amount [won]: ",
        PROMPT_INSTALLMENT_COUNT => "Number of installments: ",
        PROMPT_FIRST_DUE_DATE => "First due date (YYYY-MM-DD): ",
        INSTALLMENTS_TABLE_HEADER => "Seq    Due date      Amount [won]",
        AGING_HEADING => "\n-- Receivable Aging --",
        PROMPT_RECEIVABLE_COUNT => "Open receivables: ",
        PROMPT_RECEIVABLE_DUE => "Due date (YYYY-MM-DD): ",
        PROMPT_RECEIVABLE_AMOUNT => "Amount [won]: ",
        PROMPT_AS_OF_DATE => "As-of date (YYYY-MM-DD): ",
        AGING_CURRENT => "Not yet due:",
        AGING_1_30 => "1-30 days:",
        AGING_31_60 => "31-60 days:",
        AGING_61_90 => "61-90 days:",
        AGING_OVER_90 => "Over 90 days:",
        AGING_TOTAL_OPEN => "Total open:",
        AGING_TOTAL_OVERDUE => "Total overdue:",
        AGING_OVERDUE_COUNT => "Overdue count:",
        AGING_MAX_DAYS => "Max days past due:",
        RISK_HEADING => "\n-- Payment Risk --",
        PROMPT_TOTAL_INSTALLMENTS => "Total installments billed: ",
        PROMPT_LATE_PAYMENTS => "Late installments: ",
        PROMPT_AVG_DELAY_DAYS => "Average delay [days]: ",
        PROMPT_OPEN_OVERDUE => "Open overdue amount [won]: ",
        PROMPT_MONTHLY_BILLING => "Monthly billing [won]: ",
        RISK_SCORE => "Risk score:",
        RISK_TIER => "Risk tier:",
        RISK_TIER_LOW => "Low",
        RISK_TIER_MEDIUM => "Medium",
        RISK_TIER_HIGH => "High",
        MAINTENANCE_HEADING => "\n-- Maintenance Forecast --",
        PROMPT_CURRENT_KM => "Current odometer [km]: ",
        PROMPT_MONTHLY_KM => "Average monthly mileage [km]: ",
        PROMPT_LAST_SERVICE_KM => "Odometer at last service [km]: ",
        PROMPT_LAST_SERVICE_DATE => "Last service date (YYYY-MM-DD): ",
        PROMPT_INTERVAL_KM => "Service interval [km]: ",
        PROMPT_INTERVAL_MONTHS => "Service interval [months]: ",
        MAINTENANCE_NEXT_KM => "Next service odometer:",
        MAINTENANCE_KM_REMAINING => "Distance remaining:",
        MAINTENANCE_DUE_BY_KM => "Due date by mileage:",
        MAINTENANCE_DUE_BY_DATE => "Due date by calendar:",
        MAINTENANCE_NEXT_DUE => "Next service due:",
        MAINTENANCE_OVERDUE => "Service is overdue.",
        MAINTENANCE_NO_FORECAST => "Not enough information to forecast.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Money  2) Distance  3) Period rate  4) Ratio",
        UNIT_CONVERSION_NOTE => "Note: period rate converts amount-per-period, e.g. won/month -> won/year.",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: manwon, km, month, %): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: eok, mi, year, bp): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_MONEY_UNIT => "Default money unit:",
        SETTINGS_ASSUMPTIONS => "Assumptions (life/margin/occupancy):",
        SETTINGS_MONEY_OPTIONS => "1) won  2) 1k won  3) 10k won  4) 1M won  5) 100M won",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en, enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        HELP_PROJECTION => "Help: enter acquisition cost, payment method, and annual fixed costs to estimate monthly cost, suggested rent, break-even, and annual ROI.",
        HELP_DEPRECIATION => "Help: straight-line over the useful life on cost minus residual. Book value never drops below the residual.",
        HELP_INSTALLMENTS => "Help: splits the total across installments; the remainder goes to the last one. Month-end due dates clamp to the calendar.",
        HELP_AGING => "Help: buckets open amounts into 1-30/31-60/61-90/90+ days past the as-of date.",
        HELP_RISK => "Help: 40 pts late ratio + 30 pts average delay + 30 pts overdue exposure. Below 30 low, below 60 medium.",
        HELP_MAINTENANCE => "Help: forecasts whichever comes first, the mileage-based or the calendar-based service date.",
        HELP_UNIT_CONVERSION => "Help: choose quantity, enter value, then from/to units (manwon/eok, km/mi, month/year, %/bp).",
        HELP_SETTINGS => "Help: changes language and default money unit. Projection assumptions live in config.toml.",
        _ => return None,
    })
}
