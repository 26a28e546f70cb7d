// ==========================================
// 出口报价系统 - 核心库
// ==========================================
// 面向小微外贸企业的 CIP 出口报价计算
// 分层: 领域 → 引擎 → 配置 → 报价单 → API
// 系统定位: 计算辅助工具（报价最终由业务员确认）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 参数、结果与询盘
pub mod domain;

// 引擎层 - 报价计算
pub mod engine;

// 配置层 - 默认费率与集装箱预设
pub mod config;

// 报价单 - 格式化与预算明细
pub mod report;

// API 层 - 输入边界
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ContainerType, CustomerInquiry, Incoterm, ProductSpec, QuoteParameters, QuoteRequest,
    QuoteResult, RateOverrides,
};

// 引擎
pub use engine::{compute, QuotationCalculator, QuoteError};

// 配置
pub use config::{load_config, QuoteConfig};

// 报价单
pub use report::QuoteSheet;

// API
pub use api::{ApiError, ApiResult, QuoteApi, QuoteResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "出口报价系统";
