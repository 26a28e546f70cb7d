// ==========================================
// 出口报价系统 - 报表层
// ==========================================
// 职责: 报价单（报价建议、出口预算表、详细数据）与金额格式化
// 红线: 全精度结果只在本层舍入到两位小数
// ==========================================

pub mod budget;
pub mod format;

pub use budget::{BudgetLine, QuoteSheet, SheetRow};
pub use format::{format_cny, format_grouped, format_percent, format_rate, format_usd, round_money};
