// ==========================================
// 出口报价系统 - 计算引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 报价计算错误
///
/// 所有错误在产生任何结果之前同步返回，不做重试、不做兜底
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// 参数违反约束（非正的物理量/容量、负费用、越界费率）
    #[error("参数无效: {field} {constraint}（实际值 {value}）")]
    InvalidParameter {
        field: &'static str,
        constraint: &'static str,
        value: String,
    },

    /// 分母为零（有效输入下不可达）
    #[error("除数为零: {operation}")]
    DivisionByZero { operation: &'static str },

    /// 数值超出定点小数可表示范围
    #[error("数值溢出: {operation}")]
    Overflow { operation: &'static str },
}

impl QuoteError {
    /// 出错字段（仅 InvalidParameter）
    pub fn field(&self) -> Option<&'static str> {
        match self {
            QuoteError::InvalidParameter { field, .. } => Some(*field),
            QuoteError::DivisionByZero { .. } | QuoteError::Overflow { .. } => None,
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, QuoteError>;
