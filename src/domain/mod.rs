// ==========================================
// 出口报价系统 - 领域模型层
// ==========================================
// 职责: 定义报价参数、结果、询盘元数据与基础类型
// 红线: 不含计算逻辑，不含配置读取
// ==========================================

pub mod inquiry;
pub mod quote;
pub mod types;

// 重导出核心类型
pub use inquiry::{CustomerInquiry, ProductSpec, QuoteRequest, RateOverrides};
pub use quote::{QuoteParameters, QuoteResult};
pub use types::{ContainerType, Incoterm, UnknownContainerType};
