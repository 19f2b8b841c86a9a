use serde::{Deserialize, Serialize};

/// 거리 단위. 내부 기준은 km이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Kilometer,
    Meter,
    Mile,
}

fn to_km(value: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => value,
        DistanceUnit::Meter => value / 1000.0,
        DistanceUnit::Mile => value * 1.609344,
    }
}

fn from_km(value: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => value,
        DistanceUnit::Meter => value * 1000.0,
        DistanceUnit::Mile => value / 1.609344,
    }
}

/// 거리를 변환한다.
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    let base = to_km(value, from);
    from_km(base, to)
}
