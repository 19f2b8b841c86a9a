use rental_fleet_toolbox::conversion::{self, ConversionError};
use rental_fleet_toolbox::quantity::QuantityKind;
use rental_fleet_toolbox::units::{
    convert_distance, convert_money, convert_period_rate, convert_ratio, DistanceUnit, MoneyUnit,
    PeriodUnit, RatioUnit,
};

#[test]
fn money_scale_conversions() {
    let won = convert_money(1.5, MoneyUnit::TenThousandWon, MoneyUnit::Won);
    assert!((won - 15_000.0).abs() < 1e-9);

    let manwon = convert_money(2.0, MoneyUnit::HundredMillionWon, MoneyUnit::TenThousandWon);
    assert!((manwon - 20_000.0).abs() < 1e-9);

    let roundtrip = convert_money(
        convert_money(123_456_789.0, MoneyUnit::Won, MoneyUnit::MillionWon),
        MoneyUnit::MillionWon,
        MoneyUnit::Won,
    );
    assert!((roundtrip - 123_456_789.0).abs() < 1e-6);
}

#[test]
fn distance_conversions() {
    let km = convert_distance(1.0, DistanceUnit::Mile, DistanceUnit::Kilometer);
    assert!((km - 1.609344).abs() < 1e-9);
    let meters = convert_distance(1.2, DistanceUnit::Kilometer, DistanceUnit::Meter);
    assert!((meters - 1_200.0).abs() < 1e-9);
}

#[test]
fn period_rate_converts_amount_per_period() {
    // 월 임대료 120만원 -> 연 1,440만원
    let yearly = convert_period_rate(1_200_000.0, PeriodUnit::Month, PeriodUnit::Year);
    assert!((yearly - 14_400_000.0).abs() < 1e-6);

    let weekly = convert_period_rate(5_200.0, PeriodUnit::Year, PeriodUnit::Week);
    assert!((weekly - 100.0).abs() < 1e-9);
}

#[test]
fn ratio_conversions() {
    let bp = convert_ratio(1.0, RatioUnit::Percent, RatioUnit::BasisPoint);
    assert!((bp - 100.0).abs() < 1e-9);
    let pct = convert_ratio(0.25, RatioUnit::Fraction, RatioUnit::Percent);
    assert!((pct - 25.0).abs() < 1e-9);
}

#[test]
fn convert_accepts_korean_and_ascii_spellings() {
    let won = conversion::convert(QuantityKind::Money, 3.0, "만원", "원").unwrap();
    assert!((won - 30_000.0).abs() < 1e-9);

    let eok = conversion::convert(QuantityKind::Money, 25_000.0, "manwon", "eok").unwrap();
    assert!((eok - 2.5).abs() < 1e-9);

    let yearly = conversion::convert(QuantityKind::PeriodRate, 100.0, "월", "year").unwrap();
    assert!((yearly - 1_200.0).abs() < 1e-9);

    let miles = conversion::convert(QuantityKind::Distance, 160.9344, "km", "mi").unwrap();
    assert!((miles - 100.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_is_an_error() {
    let err = conversion::convert(QuantityKind::Money, 1.0, "달러", "원").unwrap_err();
    match err {
        ConversionError::UnknownUnit(u) => assert_eq!(u, "달러"),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(conversion::convert(QuantityKind::Ratio, 1.0, "%", "km").is_err());
}
