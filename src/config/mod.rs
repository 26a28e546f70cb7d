// ==========================================
// 出口报价系统 - 配置层
// ==========================================
// 职责: 默认费率、物流费用与集装箱预设表
// 存储: TOML 配置文件（只读），无跨会话持久化
// ==========================================

pub mod quote_config;

// 重导出核心配置类型
pub use quote_config::{
    default_config_path, load_config, ConfigError, ContainerPreset, ContainerPresets,
    LogisticsConfig, QuoteConfig, TaxConfig, TradeConfig, CONFIG_ENV,
};
