// ==========================================
// 出口报价系统 - 参数校验器
// ==========================================
// 职责: 计算前校验 QuoteParameters 的全部约束
// 红线: 只拒绝，不钳制（不把越界值修正成边界值）
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::QuoteParameters;
use crate::engine::error::QuoteError;

/// 约束描述
pub mod constraints {
    pub const POSITIVE: &str = "必须大于 0";
    pub const NON_NEGATIVE: &str = "不能为负数";
    pub const FRACTION: &str = "必须位于 [0, 1] 区间";
    pub const AT_LEAST_ONE: &str = "必须至少为 1";
}

/// 单条校验违规
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterViolation {
    pub field: String,
    pub constraint: String,
    pub value: String,
}

impl ParameterViolation {
    /// 从 InvalidParameter 错误构造（除零/溢出不属于参数违规）
    fn from_error(err: &QuoteError) -> Option<Self> {
        match err {
            QuoteError::InvalidParameter {
                field,
                constraint,
                value,
            } => Some(Self {
                field: field.to_string(),
                constraint: constraint.to_string(),
                value: value.clone(),
            }),
            QuoteError::DivisionByZero { .. } | QuoteError::Overflow { .. } => None,
        }
    }
}

// ==========================================
// ParameterValidator - 参数校验器
// ==========================================
pub struct ParameterValidator {
    // 无状态
}

impl ParameterValidator {
    pub fn new() -> Self {
        Self {}
    }

    /// 校验参数，返回第一条违规
    ///
    /// 字段检查顺序: 数量 → 汇率 → 容量 → 商品指标 → 费用 → 费率
    pub fn validate(&self, params: &QuoteParameters) -> Result<(), QuoteError> {
        match self.check(params).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// 收集全部违规（供 API 层一次性反馈给用户）
    pub fn collect_violations(&self, params: &QuoteParameters) -> Vec<ParameterViolation> {
        let violations: Vec<ParameterViolation> = self
            .check(params)
            .iter()
            .filter_map(ParameterViolation::from_error)
            .collect();

        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "报价参数校验未通过");
        }

        violations
    }

    fn check(&self, params: &QuoteParameters) -> Vec<QuoteError> {
        let mut errors = Vec::new();

        if params.quantity < 1 {
            errors.push(invalid(
                "quantity",
                constraints::AT_LEAST_ONE,
                params.quantity.to_string(),
            ));
        }

        let positives = [
            ("exchange_rate", params.exchange_rate),
            ("container_volume_capacity", params.container_volume_capacity),
            ("container_weight_capacity", params.container_weight_capacity),
            ("unit_volume", params.unit_volume),
            ("unit_weight", params.unit_weight),
            ("unit_purchase_price", params.unit_purchase_price),
        ];
        for (field, value) in positives {
            if value <= Decimal::ZERO {
                errors.push(invalid(field, constraints::POSITIVE, value.to_string()));
            }
        }

        let non_negatives = [
            ("domestic_fee_base", params.domestic_fee_base),
            ("domestic_fee_per_container", params.domestic_fee_per_container),
            ("sea_freight_per_container_usd", params.sea_freight_per_container_usd),
        ];
        for (field, value) in non_negatives {
            if value < Decimal::ZERO {
                errors.push(invalid(field, constraints::NON_NEGATIVE, value.to_string()));
            }
        }

        let fractions = [
            ("target_profit_rate", params.target_profit_rate),
            ("vat_rate", params.vat_rate),
            ("tariff_rate", params.tariff_rate),
            ("insurance_rate", params.insurance_rate),
        ];
        for (field, value) in fractions {
            if !is_fraction(value) {
                errors.push(invalid(field, constraints::FRACTION, value.to_string()));
            }
        }

        errors
    }
}

impl Default for ParameterValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// 费率是否位于 [0, 1]
pub fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

fn invalid(field: &'static str, constraint: &'static str, value: String) -> QuoteError {
    QuoteError::InvalidParameter {
        field,
        constraint,
        value,
    }
}
