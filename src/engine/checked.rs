// ==========================================
// 出口报价系统 - 带检查的定点运算
// ==========================================
// 除数为零 → DivisionByZero；超出 Decimal 范围 → Overflow
// 不产生 NaN / Infinity，也不 panic
// ==========================================

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::engine::error::{EngineResult, QuoteError};

pub(crate) fn add(a: Decimal, b: Decimal, operation: &'static str) -> EngineResult<Decimal> {
    a.checked_add(b).ok_or(QuoteError::Overflow { operation })
}

pub(crate) fn sub(a: Decimal, b: Decimal, operation: &'static str) -> EngineResult<Decimal> {
    a.checked_sub(b).ok_or(QuoteError::Overflow { operation })
}

pub(crate) fn mul(a: Decimal, b: Decimal, operation: &'static str) -> EngineResult<Decimal> {
    a.checked_mul(b).ok_or(QuoteError::Overflow { operation })
}

pub(crate) fn div(a: Decimal, b: Decimal, operation: &'static str) -> EngineResult<Decimal> {
    if b.is_zero() {
        return Err(QuoteError::DivisionByZero { operation });
    }
    a.checked_div(b).ok_or(QuoteError::Overflow { operation })
}

/// 向上取整为柜数
pub(crate) fn ceil_count(value: Decimal, operation: &'static str) -> EngineResult<u32> {
    value
        .ceil()
        .to_u32()
        .ok_or(QuoteError::Overflow { operation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_div_by_zero_is_error() {
        assert_eq!(
            div(dec!(1), Decimal::ZERO, "roi"),
            Err(QuoteError::DivisionByZero { operation: "roi" })
        );
        assert_eq!(div(dec!(1), dec!(4), "x"), Ok(dec!(0.25)));
    }

    #[test]
    fn test_overflow_is_error() {
        assert_eq!(
            mul(Decimal::MAX, dec!(2), "purchase_total"),
            Err(QuoteError::Overflow { operation: "purchase_total" })
        );
        assert_eq!(
            add(Decimal::MAX, Decimal::ONE, "total_cost"),
            Err(QuoteError::Overflow { operation: "total_cost" })
        );
    }

    #[test]
    fn test_ceil_count() {
        assert_eq!(ceil_count(dec!(1.0923), "c"), Ok(2));
        assert_eq!(ceil_count(dec!(0.3123), "c"), Ok(1));
        assert_eq!(ceil_count(dec!(3), "c"), Ok(3));
        assert_eq!(
            ceil_count(dec!(5000000000), "c"),
            Err(QuoteError::Overflow { operation: "c" })
        );
    }
}
