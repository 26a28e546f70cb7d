// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供参考询盘参数、临时配置文件等测试数据
// ==========================================

#![allow(dead_code)]

use export_quote::domain::QuoteParameters;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;
use tempfile::TempDir;

/// 参考询盘（自动售货机 ×29，40HQ，默认费率）的计算参数
pub fn reference_parameters() -> QuoteParameters {
    QuoteParameters {
        exchange_rate: dec!(7.2),
        target_profit_rate: dec!(0.20),
        container_volume_capacity: dec!(67.7),
        container_weight_capacity: dec!(26000),
        domestic_fee_base: dec!(3000),
        domestic_fee_per_container: dec!(1500),
        sea_freight_per_container_usd: dec!(1000),
        vat_rate: dec!(0.13),
        tariff_rate: dec!(0.05),
        insurance_rate: dec!(0.002),
        unit_volume: dec!(2.55),
        unit_weight: dec!(280),
        unit_purchase_price: dec!(4778),
        quantity: 29,
    }
}

/// 修改参考参数的数量
pub fn with_quantity(quantity: u32) -> QuoteParameters {
    QuoteParameters {
        quantity,
        ..reference_parameters()
    }
}

/// 金额保留两位小数（仅用于断言）
pub fn money(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// 在临时目录中写入配置文件
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 配置文件路径
pub fn write_temp_file(file_name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(file_name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}
