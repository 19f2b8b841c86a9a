/// 다루는 수량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Money,
    Distance,
    /// 기간당 금액(원/일, 원/월 등). 금액이 아니라 요율을 환산한다.
    PeriodRate,
    Ratio,
}
