//! 청구/수납 관련 계산 모듈을 모아둔다.
//! 납부 스케줄 생성과 미수금 에이징으로 구성한다.

pub mod aging;
pub mod installments;
