// ==========================================
// 出口报价系统 - 引擎层
// ==========================================
// 职责: 报价计算（校验 → 装箱 → 成本 → 价格）
// 红线: 引擎不读配置、不读全局状态，只接收 QuoteParameters
// ==========================================

pub mod calculator;
mod checked;
pub mod error;
pub mod packing;
pub mod validation;

// 重导出核心引擎
pub use calculator::{compute, QuotationCalculator, INSURANCE_UPLIFT};
pub use error::{EngineResult, QuoteError};
pub use packing::{ContainerPacker, PackingPlan};
pub use validation::{ParameterValidator, ParameterViolation};
