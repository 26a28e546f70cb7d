// ==========================================
// 出口报价系统 - API 层
// ==========================================
// 职责: 输入边界，组装参数并调用计算引擎，返回报价单
// ==========================================

pub mod error;
pub mod quote_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use quote_api::{load_request, QuoteApi, QuoteResponse};
