// ==========================================
// 出口报价系统 - 报价参数与结果
// ==========================================
// QuoteParameters: 单次计算的全部输入（扁平记录）
// QuoteResult: 单次计算的全部输出（只读）
// 金额单位: 人民币（除 unit_price_usd / sea_freight_per_container_usd）
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// QuoteParameters - 报价参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteParameters {
    // ===== 贸易参数 =====
    pub exchange_rate: Decimal,      // 汇率 (CNY / 1 USD)
    pub target_profit_rate: Decimal, // 目标利润率 [0, 1]

    // ===== 集装箱容量 =====
    pub container_volume_capacity: Decimal, // 单柜体积 (CBM)
    pub container_weight_capacity: Decimal, // 单柜限重 (KG)

    // ===== 物流费用 =====
    pub domestic_fee_base: Decimal,             // 国内运费基础 (¥/票)
    pub domestic_fee_per_container: Decimal,    // 每柜国内运费 (¥)
    pub sea_freight_per_container_usd: Decimal, // 海运费 (USD/柜)

    // ===== 税费 =====
    pub vat_rate: Decimal,       // 增值税率 [0, 1]
    pub tariff_rate: Decimal,    // 出口关税率 [0, 1]
    pub insurance_rate: Decimal, // 保险费率 [0, 1]

    // ===== 商品 =====
    pub unit_volume: Decimal,         // 单件体积 (CBM)
    pub unit_weight: Decimal,         // 单件毛重 (KG)
    pub unit_purchase_price: Decimal, // 采购单价 (¥)
    pub quantity: u32,                // 数量
}

// ==========================================
// QuoteResult - 报价结果
// ==========================================
// 全精度保存，展示层负责保留两位小数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    // ===== 装箱 =====
    pub total_volume: Decimal,
    pub total_weight: Decimal,
    pub containers_by_volume: u32,
    pub containers_by_weight: u32,
    pub container_count: u32,

    // ===== 成本构成 =====
    pub purchase_total: Decimal,
    pub tax_rebate: Decimal,
    pub domestic_fee: Decimal,
    pub international_freight: Decimal,
    pub insurance: Decimal,
    pub tariff: Decimal,
    pub total_cost: Decimal,

    // ===== 报价 =====
    pub target_profit: Decimal,
    pub contract_amount: Decimal,
    pub unit_price_usd: Decimal, // FOB 单价
    pub unit_price_cny: Decimal, // FOB 单价折人民币

    // ===== 利润指标 =====
    pub return_on_investment_percent: Decimal, // 利润 / 采购总价
    pub cost_profit_margin_percent: Decimal,   // 利润 / 总成本
}
