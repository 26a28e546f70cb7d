// ==========================================
// 出口报价系统 - 金额格式化
// ==========================================
// 展示层唯一的舍入点: 四舍五入（远离零）到指定小数位
// ==========================================

use rust_decimal::{Decimal, RoundingStrategy};

/// 金额保留两位小数
pub fn round_money(value: Decimal) -> Decimal {
    round_to(value, 2)
}

/// 四舍五入到 dp 位小数，并补齐尾零
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// 千分位格式化，例如 138562 → "138,562.00"（dp = 2）
pub fn format_grouped(value: Decimal, dp: u32) -> String {
    let text = round_to(value, dp).abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    if is_negative_after_rounding(value, dp) {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// 人民币金额，例如 "¥138,562.00"、"-¥15,940.76"
pub fn format_cny(value: Decimal) -> String {
    signed_with_symbol("¥", value)
}

/// 美元金额，例如 "USD 863.71"
pub fn format_usd(value: Decimal) -> String {
    format!("USD {}", format_grouped(value, 2))
}

/// 费率（小数）转百分比，例如 0.002 → "0.20%"
pub fn format_rate(rate: Decimal, dp: u32) -> String {
    format_percent(rate * Decimal::ONE_HUNDRED, dp)
}

/// 百分数，例如 21.692 → "21.7%"
pub fn format_percent(percent: Decimal, dp: u32) -> String {
    format!("{}%", round_to(percent, dp))
}

fn signed_with_symbol(symbol: &str, value: Decimal) -> String {
    if is_negative_after_rounding(value, 2) {
        format!("-{}{}", symbol, format_grouped(value.abs(), 2))
    } else {
        format!("{}{}", symbol, format_grouped(value, 2))
    }
}

// -0.001 舍入后为 0，不显示负号
fn is_negative_after_rounding(value: Decimal, dp: u32) -> bool {
    let rounded = round_to(value, dp);
    rounded.is_sign_negative() && !rounded.is_zero()
}
