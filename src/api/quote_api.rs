// ==========================================
// 出口报价系统 - 报价 API
// ==========================================
// 职责: 输入边界
// 1. 请求文件解析（TOML / JSON）
// 2. 配置默认值 + 请求覆写 + 柜型查表 → QuoteParameters
// 3. 校验（一次性返回全部违规）并调用计算引擎
// 4. 生成报价单
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ContainerPreset, QuoteConfig};
use crate::domain::{
    ContainerType, CustomerInquiry, ProductSpec, QuoteParameters, QuoteRequest, QuoteResult,
};
use crate::engine::{ParameterValidator, QuotationCalculator};
use crate::report::QuoteSheet;

/// 报价响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub generated_at: DateTime<Utc>,
    pub inquiry: CustomerInquiry,
    pub product: ProductSpec,
    pub container_type: ContainerType,
    pub parameters: QuoteParameters,
    pub result: QuoteResult,
    pub sheet: QuoteSheet,
}

// ==========================================
// QuoteApi - 报价 API
// ==========================================

/// 报价API
///
/// 只持有不可变配置，可在多线程间共享，无需加锁
pub struct QuoteApi {
    config: Arc<QuoteConfig>,
    validator: ParameterValidator,
    calculator: QuotationCalculator,
}

impl QuoteApi {
    /// 创建新的QuoteApi实例
    pub fn new(config: Arc<QuoteConfig>) -> Self {
        Self {
            config,
            validator: ParameterValidator::new(),
            calculator: QuotationCalculator::new(),
        }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// 列出集装箱预设
    pub fn list_container_presets(&self) -> Vec<(ContainerType, ContainerPreset)> {
        self.config.containers.entries()
    }

    /// 解析柜型标签（如下拉框文本 "40HQ (67.7 CBM / 26吨)"）
    pub fn parse_container_type(&self, label: &str) -> ApiResult<ContainerType> {
        label
            .parse::<ContainerType>()
            .map_err(|e| ApiError::UnsupportedContainerType(e.0))
    }

    /// 把报价请求解析为计算参数
    ///
    /// 请求未覆写的费率/费用取配置默认值；容量只在此处查表一次
    ///
    /// 不做校验，非法取值由 `calculate` 统一报告
    pub fn resolve_parameters(&self, request: &QuoteRequest) -> QuoteParameters {
        let config = &self.config;
        let overrides = &request.overrides;
        let container_type = request
            .container_type
            .unwrap_or(config.logistics.default_container);
        let preset = config.containers.get(container_type);

        QuoteParameters {
            exchange_rate: overrides.exchange_rate.unwrap_or(config.trade.exchange_rate),
            target_profit_rate: overrides
                .target_profit_rate
                .unwrap_or(config.trade.target_profit_rate),
            container_volume_capacity: preset.volume_cbm,
            container_weight_capacity: preset.max_weight_kg,
            domestic_fee_base: overrides
                .domestic_fee_base
                .unwrap_or(config.logistics.domestic_fee_base),
            domestic_fee_per_container: overrides
                .domestic_fee_per_container
                .unwrap_or(config.logistics.domestic_fee_per_container),
            sea_freight_per_container_usd: overrides
                .sea_freight_per_container_usd
                .unwrap_or(config.logistics.sea_freight_per_container_usd),
            vat_rate: overrides.vat_rate.unwrap_or(config.tax.vat_rate),
            tariff_rate: overrides.tariff_rate.unwrap_or(config.tax.tariff_rate),
            insurance_rate: overrides.insurance_rate.unwrap_or(config.tax.insurance_rate),
            unit_volume: request.product.unit_volume_cbm,
            unit_weight: request.product.unit_weight_kg,
            unit_purchase_price: request.product.unit_purchase_price,
            quantity: request.quantity,
        }
    }

    /// 校验并计算
    ///
    /// 校验失败时返回 ValidationFailed，携带全部违规字段
    pub fn calculate(&self, params: &QuoteParameters) -> ApiResult<QuoteResult> {
        let violations = self.validator.collect_violations(params);
        if !violations.is_empty() {
            tracing::warn!(count = violations.len(), "报价参数校验失败");
            return Err(ApiError::validation_failed(violations));
        }

        Ok(self.calculator.compute(params)?)
    }

    /// 生成完整报价
    #[instrument(skip(self, request), fields(
        customer = %request.inquiry.customer,
        product = %request.product.name,
        quantity = request.quantity
    ))]
    pub fn quote(&self, request: &QuoteRequest, locale: &str) -> ApiResult<QuoteResponse> {
        let container_type = request
            .container_type
            .unwrap_or(self.config.logistics.default_container);
        let parameters = self.resolve_parameters(request);
        let result = self.calculate(&parameters)?;
        let generated_at = Utc::now();
        let sheet = QuoteSheet::build(
            &request.inquiry,
            &request.product,
            container_type,
            &parameters,
            &result,
            locale,
            generated_at,
        );

        tracing::info!(
            container_type = %container_type,
            container_count = result.container_count,
            unit_price_usd = %result.unit_price_usd.round_dp(2),
            "报价生成完成"
        );

        Ok(QuoteResponse {
            generated_at,
            inquiry: request.inquiry.clone(),
            product: request.product.clone(),
            container_type,
            parameters,
            result,
            sheet,
        })
    }
}

// ==========================================
// 请求文件解析
// ==========================================

/// 从文件读取报价请求（按扩展名区分 .toml / .json）
pub fn load_request<P: AsRef<Path>>(path: P) -> ApiResult<QuoteRequest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ApiError::InvalidInput(format!("请求文件读取失败: {}: {}", path.display(), e))
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| {
            ApiError::InvalidInput(format!("请求文件解析失败: {}: {}", path.display(), e))
        }),
        "json" => serde_json::from_str(&content).map_err(|e| {
            ApiError::InvalidInput(format!("请求文件解析失败: {}: {}", path.display(), e))
        }),
        _ => Err(ApiError::InvalidInput(format!(
            "请求文件格式不支持: {}（仅支持 .toml/.json）",
            path.display()
        ))),
    }
}
