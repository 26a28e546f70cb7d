// ==========================================
// 出口报价系统 - 客户询盘
// ==========================================
// 询盘信息、商品信息、费率覆写
// 客户/港口/HS编码/贸易术语只作元数据，不参与计算
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContainerType, Incoterm};

/// 客户询盘信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInquiry {
    pub customer: String,
    pub destination_country: String,
    pub destination_port: String,
    #[serde(default)]
    pub incoterm: Incoterm,
}

/// 商品信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    #[serde(default)]
    pub hs_code: Option<String>,
    pub unit_volume_cbm: Decimal,
    pub unit_weight_kg: Decimal,
    pub unit_purchase_price: Decimal,
}

/// 单次询盘的费率覆写（未填写的项取配置默认值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateOverrides {
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    #[serde(default)]
    pub target_profit_rate: Option<Decimal>,
    #[serde(default)]
    pub domestic_fee_base: Option<Decimal>,
    #[serde(default)]
    pub domestic_fee_per_container: Option<Decimal>,
    #[serde(default)]
    pub sea_freight_per_container_usd: Option<Decimal>,
    #[serde(default)]
    pub vat_rate: Option<Decimal>,
    #[serde(default)]
    pub tariff_rate: Option<Decimal>,
    #[serde(default)]
    pub insurance_rate: Option<Decimal>,
}

/// 报价请求（输入边界）
///
/// 由前端表单或请求文件（TOML/JSON）构造，
/// 在 API 层解析为 [`QuoteParameters`](crate::domain::QuoteParameters)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub inquiry: CustomerInquiry,
    pub product: ProductSpec,
    pub quantity: u32,

    /// 集装箱类型，缺省使用配置中的默认柜型
    #[serde(default)]
    pub container_type: Option<ContainerType>,

    #[serde(default)]
    pub overrides: RateOverrides,
}

impl QuoteRequest {
    /// 参考询盘：菲律宾客户的自动售货机订单
    ///
    /// 命令行未提供请求文件时使用
    pub fn reference_inquiry() -> Self {
        Self {
            inquiry: CustomerInquiry {
                customer: "Abdul Jaleel Trading".to_string(),
                destination_country: "菲律宾".to_string(),
                destination_port: "马尼拉港".to_string(),
                incoterm: Incoterm::Cip,
            },
            product: ProductSpec {
                name: "自动售货机 MF-782".to_string(),
                hs_code: Some("84762100".to_string()),
                unit_volume_cbm: Decimal::new(255, 2),
                unit_weight_kg: Decimal::new(280, 0),
                unit_purchase_price: Decimal::new(4778, 0),
            },
            quantity: 29,
            container_type: Some(ContainerType::Hq40),
            overrides: RateOverrides::default(),
        }
    }
}
