/// 차급별 기본 내용연수/정비 주기와 차령-잔존가치율 테이블, 선형 보간을 제공한다.
/// 값은 참고용이며 실제 매입/매각 시세로 검증해야 한다.

#[derive(Debug, Clone, Copy)]
pub struct AgePoint {
    pub age_years: f64,
    pub residual_frac: f64,
}

impl AgePoint {
    pub const fn new(age_years: f64, residual_frac: f64) -> Self {
        Self {
            age_years,
            residual_frac,
        }
    }
}

#[derive(Debug)]
pub struct VehicleClassData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 기본 내용연수 [년]
    pub default_useful_life_years: f64,
    /// 정비 주기 [km]
    pub maintenance_interval_km: f64,
    /// 정비 주기 [개월]
    pub maintenance_interval_months: u32,
    /// 차령별 잔존가치율 (신차가 대비 0~1)
    pub residual: &'static [AgePoint],
}

#[derive(Debug)]
pub struct ResidualValue {
    pub frac: f64,
    pub source_age_years: f64,
    /// true면 테이블 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

pub fn vehicle_classes() -> &'static [VehicleClassData] {
    CLASSES
}

pub fn find_class(code: &str) -> Option<&'static VehicleClassData> {
    CLASSES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code) || c.name.eq_ignore_ascii_case(code))
}

/// 차급 코드와 차령으로 잔존가치율을 조회한다.
pub fn residual_fraction(code: &str, age_years: f64) -> Option<ResidualValue> {
    let class = find_class(code)?;
    interpolate(class.residual, age_years)
}

fn interpolate(points: &[AgePoint], age_years: f64) -> Option<ResidualValue> {
    if points.is_empty() {
        return None;
    }
    if points.len() == 1 {
        let p = points[0];
        return Some(ResidualValue {
            frac: p.residual_frac,
            source_age_years: p.age_years,
            clamped: true,
        });
    }
    if age_years <= points[0].age_years {
        let p = points[0];
        return Some(ResidualValue {
            frac: p.residual_frac,
            source_age_years: p.age_years,
            clamped: true,
        });
    }
    if age_years >= points[points.len() - 1].age_years {
        let p = points[points.len() - 1];
        return Some(ResidualValue {
            frac: p.residual_frac,
            source_age_years: p.age_years,
            clamped: true,
        });
    }
    for win in points.windows(2) {
        let a = win[0];
        let b = win[1];
        if age_years >= a.age_years && age_years <= b.age_years {
            let t = (age_years - a.age_years) / (b.age_years - a.age_years);
            let frac = a.residual_frac + t * (b.residual_frac - a.residual_frac);
            return Some(ResidualValue {
                frac,
                source_age_years: age_years,
                clamped: false,
            });
        }
    }
    None
}

const fn ap(age_years: f64, residual_frac: f64) -> AgePoint {
    AgePoint::new(age_years, residual_frac)
}

const CLASSES: &[VehicleClassData] = &[
    VehicleClassData {
        code: "COMPACT",
        name: "경형 승용",
        notes: "모닝/스파크급. 감가 빠른 편",
        default_useful_life_years: 5.0,
        maintenance_interval_km: 10_000.0,
        maintenance_interval_months: 12,
        residual: &[
            ap(0.0, 1.00),
            ap(1.0, 0.72),
            ap(3.0, 0.50),
            ap(5.0, 0.33),
            ap(7.0, 0.22),
            ap(10.0, 0.10),
        ],
    },
    VehicleClassData {
        code: "SUBCOMPACT",
        name: "소형 승용",
        notes: "아반떼급 준중형 포함",
        default_useful_life_years: 5.0,
        maintenance_interval_km: 10_000.0,
        maintenance_interval_months: 12,
        residual: &[
            ap(0.0, 1.00),
            ap(1.0, 0.75),
            ap(3.0, 0.55),
            ap(5.0, 0.38),
            ap(7.0, 0.26),
            ap(10.0, 0.12),
        ],
    },
    VehicleClassData {
        code: "MIDSIZE",
        name: "중형 승용",
        notes: "쏘나타/K5급",
        default_useful_life_years: 5.0,
        maintenance_interval_km: 10_000.0,
        maintenance_interval_months: 12,
        residual: &[
            ap(0.0, 1.00),
            ap(1.0, 0.76),
            ap(3.0, 0.57),
            ap(5.0, 0.40),
            ap(7.0, 0.28),
            ap(10.0, 0.14),
        ],
    },
    VehicleClassData {
        code: "FULLSIZE",
        name: "대형 승용",
        notes: "그랜저/G80급. 초기 감가 큼",
        default_useful_life_years: 5.0,
        maintenance_interval_km: 10_000.0,
        maintenance_interval_months: 12,
        residual: &[
            ap(0.0, 1.00),
            ap(1.0, 0.70),
            ap(3.0, 0.52),
            ap(5.0, 0.35),
            ap(7.0, 0.24),
            ap(10.0, 0.11),
        ],
    },
    VehicleClassData {
        code: "SUV",
        name: "SUV",
        notes: "투싼/쏘렌토급. 잔존가치 높은 편",
        default_useful_life_years: 6.0,
        maintenance_interval_km: 10_000.0,
        maintenance_interval_months: 12,
        residual: &[
            ap(0.0, 1.00),
            ap(1.0, 0.80),
            ap(3.0, 0.62),
            ap(5.0, 0.45),
            ap(7.0, 0.32),
            ap(10.0, 0.17),
        ],
    },
    VehicleClassData {
        code: "VAN",
        name: "승합",
        notes: "카니발/스타리아급",
        default_useful_life_years: 6.0,
        maintenance_interval_km: 12_000.0,
        maintenance_interval_months: 12,
        residual: &[
            ap(0.0, 1.00),
            ap(1.0, 0.78),
            ap(3.0, 0.60),
            ap(5.0, 0.43),
            ap(7.0, 0.30),
            ap(10.0, 0.15),
        ],
    },
    VehicleClassData {
        code: "TRUCK1T",
        name: "1톤 트럭",
        notes: "포터/봉고급. 주행거리 누적이 빠르다",
        default_useful_life_years: 7.0,
        maintenance_interval_km: 15_000.0,
        maintenance_interval_months: 6,
        residual: &[
            ap(0.0, 1.00),
            ap(1.0, 0.82),
            ap(3.0, 0.65),
            ap(5.0, 0.48),
            ap(7.0, 0.35),
            ap(10.0, 0.20),
        ],
    },
    VehicleClassData {
        code: "EV",
        name: "전기 승용",
        notes: "배터리 보증 잔여에 따라 편차 큼",
        default_useful_life_years: 5.0,
        maintenance_interval_km: 20_000.0,
        maintenance_interval_months: 24,
        residual: &[
            ap(0.0, 1.00),
            ap(1.0, 0.68),
            ap(3.0, 0.46),
            ap(5.0, 0.30),
            ap(7.0, 0.20),
            ap(10.0, 0.08),
        ],
    },
];
