// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 规范化语言代码，不支持的语言回退到默认语言
///
/// 例如 "EN" / "en-US" → "en"，"zh" → "zh-CN"
pub fn normalize_locale(locale: &str) -> &'static str {
    let lower = locale.trim().to_lowercase();
    if lower == "en" || lower.starts_with("en-") || lower.starts_with("en_") {
        "en"
    } else {
        DEFAULT_LOCALE
    }
}

/// 翻译消息（当前语言，无参数）
///
/// # 示例
/// ```no_run
/// use export_quote::i18n::t;
/// let msg = t("budget.purchase_total");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（当前语言，带参数）
///
/// # 示例
/// ```no_run
/// use export_quote::i18n::t_with_args;
/// let msg = t_with_args("headline.container_count_value", &[("count", "2")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    interpolate(rust_i18n::t!(key).to_string(), args)
}

/// 翻译消息（指定语言，不影响全局语言设置）
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（指定语言，带参数）
pub fn t_in_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    interpolate(t_in(locale, key), args)
}

fn interpolate(mut result: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
