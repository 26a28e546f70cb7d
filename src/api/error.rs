// ==========================================
// 出口报价系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，把引擎/配置错误转换为用户可理解的错误消息
// 要求: 每条错误都指明出错字段与约束，便于用户修正输入
// ==========================================

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::{ParameterViolation, QuoteError};

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 参数校验失败（带全部违规明细）
    #[error("参数校验失败: {reason}")]
    ValidationFailed {
        reason: String,
        violations: Vec<ParameterViolation>,
    },

    #[error("不支持的集装箱类型: {0}（仅支持 20HQ / 40HQ）")]
    UnsupportedContainerType(String),

    #[error("报价计算失败: {0}")]
    Calculation(QuoteError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// 由违规列表构造校验错误
    pub fn validation_failed(violations: Vec<ParameterViolation>) -> Self {
        let reason = violations
            .iter()
            .map(|v| format!("{} {}（实际值 {}）", v.field, v.constraint, v.value))
            .collect::<Vec<_>>()
            .join("; ");
        ApiError::ValidationFailed { reason, violations }
    }

    /// 违规明细（非校验错误时为空）
    pub fn violations(&self) -> &[ParameterViolation] {
        match self {
            ApiError::ValidationFailed { violations, .. } => violations,
            _ => &[],
        }
    }
}

// ==========================================
// 从 QuoteError 转换
// ==========================================
impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::InvalidParameter {
                field,
                constraint,
                value,
            } => ApiError::validation_failed(vec![ParameterViolation {
                field: field.to_string(),
                constraint: constraint.to_string(),
                value,
            }]),
            other => ApiError::Calculation(other),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
