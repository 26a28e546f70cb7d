// ==========================================
// 出口报价系统 - 报价配置
// ==========================================
// 职责: 默认费率/费用、集装箱预设表的加载与校验
// 存储: TOML 文件（只读），缺省时使用内置默认值
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ContainerType;
use crate::engine::validation::is_fraction;

/// 配置文件路径环境变量
pub const CONFIG_ENV: &str = "EXPORT_QUOTE_CONFIG";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.toml";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {path}: {message}")]
    Parse { path: String, message: String },

    #[error("配置序列化失败: {0}")]
    Serialize(String),

    #[error("配置文件写入失败: {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("配置无效: {0}")]
    Invalid(String),
}

// ==========================================
// 配置段
// ==========================================

/// 贸易参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeConfig {
    /// 美元汇率 (CNY / 1 USD)
    pub exchange_rate: Decimal,
    /// 目标利润率
    pub target_profit_rate: Decimal,
}

impl Default for TradeConfig {
    fn default() -> Self {
        Self {
            exchange_rate: Decimal::new(72, 1),
            target_profit_rate: Decimal::new(20, 2),
        }
    }
}

/// 税费参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    pub vat_rate: Decimal,
    pub tariff_rate: Decimal,
    pub insurance_rate: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            vat_rate: Decimal::new(13, 2),
            tariff_rate: Decimal::new(5, 2),
            insurance_rate: Decimal::new(2, 3),
        }
    }
}

/// 物流费用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticsConfig {
    pub domestic_fee_base: Decimal,
    pub domestic_fee_per_container: Decimal,
    pub sea_freight_per_container_usd: Decimal,
    /// 请求未指定柜型时使用
    pub default_container: ContainerType,
}

impl Default for LogisticsConfig {
    fn default() -> Self {
        Self {
            domestic_fee_base: Decimal::new(3000, 0),
            domestic_fee_per_container: Decimal::new(1500, 0),
            sea_freight_per_container_usd: Decimal::new(1000, 0),
            default_container: ContainerType::Hq40,
        }
    }
}

/// 单种柜型的容量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerPreset {
    /// 体积 (CBM)
    pub volume_cbm: Decimal,
    /// 限重 (KG)
    pub max_weight_kg: Decimal,
}

/// 集装箱预设表（按柜型标签查找）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerPresets {
    #[serde(rename = "20HQ")]
    pub hq20: ContainerPreset,
    #[serde(rename = "40HQ")]
    pub hq40: ContainerPreset,
}

impl Default for ContainerPresets {
    fn default() -> Self {
        Self {
            hq20: ContainerPreset {
                volume_cbm: Decimal::new(28, 0),
                max_weight_kg: Decimal::new(22000, 0),
            },
            hq40: ContainerPreset {
                volume_cbm: Decimal::new(677, 1),
                max_weight_kg: Decimal::new(26000, 0),
            },
        }
    }
}

impl ContainerPresets {
    /// 查找柜型容量
    pub fn get(&self, container_type: ContainerType) -> &ContainerPreset {
        match container_type {
            ContainerType::Hq20 => &self.hq20,
            ContainerType::Hq40 => &self.hq40,
        }
    }

    /// 按柜型顺序列出全部预设
    pub fn entries(&self) -> Vec<(ContainerType, ContainerPreset)> {
        ContainerType::ALL
            .iter()
            .map(|t| (*t, *self.get(*t)))
            .collect()
    }
}

// ==========================================
// QuoteConfig - 报价配置根
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub trade: TradeConfig,
    #[serde(default)]
    pub tax: TaxConfig,
    #[serde(default)]
    pub logistics: LogisticsConfig,
    #[serde(default)]
    pub containers: ContainerPresets,
}

impl QuoteConfig {
    /// 从 TOML 文件读取并校验
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        tracing::info!(path = %path.display(), "已加载报价配置");
        Ok(config)
    }

    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 TOML 文本
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// 将默认配置写入文件
    pub fn write_default<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = Self::default().to_toml_string()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// 校验配置
    ///
    /// 费率须在 [0, 1]，汇率与柜容量须为正，费用不能为负
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trade.exchange_rate <= Decimal::ZERO {
            return Err(ConfigError::Invalid(format!(
                "trade.exchange_rate 必须大于 0（实际 {}）",
                self.trade.exchange_rate
            )));
        }

        let rates = [
            ("trade.target_profit_rate", self.trade.target_profit_rate),
            ("tax.vat_rate", self.tax.vat_rate),
            ("tax.tariff_rate", self.tax.tariff_rate),
            ("tax.insurance_rate", self.tax.insurance_rate),
        ];
        for (key, value) in rates {
            if !is_fraction(value) {
                return Err(ConfigError::Invalid(format!(
                    "{} 必须位于 [0, 1] 区间（实际 {}）",
                    key, value
                )));
            }
        }

        let fees = [
            ("logistics.domestic_fee_base", self.logistics.domestic_fee_base),
            (
                "logistics.domestic_fee_per_container",
                self.logistics.domestic_fee_per_container,
            ),
            (
                "logistics.sea_freight_per_container_usd",
                self.logistics.sea_freight_per_container_usd,
            ),
        ];
        for (key, value) in fees {
            if value < Decimal::ZERO {
                return Err(ConfigError::Invalid(format!(
                    "{} 不能为负数（实际 {}）",
                    key, value
                )));
            }
        }

        for (container_type, preset) in self.containers.entries() {
            if preset.volume_cbm <= Decimal::ZERO || preset.max_weight_kg <= Decimal::ZERO {
                return Err(ConfigError::Invalid(format!(
                    "containers.{} 的体积与限重必须大于 0（实际 {} CBM / {} KG）",
                    container_type, preset.volume_cbm, preset.max_weight_kg
                )));
            }
        }

        Ok(())
    }
}

// ==========================================
// 配置文件定位
// ==========================================

/// 获取默认配置文件路径
///
/// # 返回
/// - 用户配置目录/export-quote/config.toml
/// - None: 当前平台没有用户配置目录
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("export-quote").join(CONFIG_FILE_NAME))
}

/// 加载配置
///
/// 查找顺序:
/// 1. 显式指定的路径
/// 2. 环境变量 EXPORT_QUOTE_CONFIG
/// 3. 用户配置目录下的 config.toml（存在时）
/// 4. 内置默认值
pub fn load_config(explicit: Option<&Path>) -> Result<QuoteConfig, ConfigError> {
    if let Some(path) = explicit {
        return QuoteConfig::from_file(path);
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return QuoteConfig::from_file(trimmed);
        }
    }

    if let Some(path) = default_config_path().filter(|p| p.exists()) {
        return QuoteConfig::from_file(path);
    }

    tracing::info!("未找到配置文件，使用内置默认值");
    Ok(QuoteConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_values() {
        let config = QuoteConfig::default();
        assert_eq!(config.trade.exchange_rate, dec!(7.2));
        assert_eq!(config.trade.target_profit_rate, dec!(0.20));
        assert_eq!(config.tax.vat_rate, dec!(0.13));
        assert_eq!(config.tax.tariff_rate, dec!(0.05));
        assert_eq!(config.tax.insurance_rate, dec!(0.002));
        assert_eq!(config.logistics.domestic_fee_base, dec!(3000));
        assert_eq!(config.logistics.domestic_fee_per_container, dec!(1500));
        assert_eq!(config.logistics.sea_freight_per_container_usd, dec!(1000));
        assert_eq!(config.logistics.default_container, ContainerType::Hq40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_container_preset_lookup() {
        let presets = ContainerPresets::default();
        assert_eq!(presets.get(ContainerType::Hq20).volume_cbm, dec!(28));
        assert_eq!(presets.get(ContainerType::Hq20).max_weight_kg, dec!(22000));
        assert_eq!(presets.get(ContainerType::Hq40).volume_cbm, dec!(67.7));
        assert_eq!(presets.get(ContainerType::Hq40).max_weight_kg, dec!(26000));

        let entries = presets.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, ContainerType::Hq20);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = QuoteConfig::from_toml_str(
            r#"
            [trade]
            exchange_rate = 7.1

            [logistics]
            default_container = "20HQ"
            "#,
        )
        .unwrap();

        assert_eq!(config.trade.exchange_rate, dec!(7.1));
        assert_eq!(config.trade.target_profit_rate, dec!(0.20));
        assert_eq!(config.logistics.default_container, ContainerType::Hq20);
        assert_eq!(config.logistics.domestic_fee_base, dec!(3000));
        assert_eq!(config.containers, ContainerPresets::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let text = QuoteConfig::default().to_toml_string().unwrap();
        assert!(text.contains("20HQ"));
        let parsed = QuoteConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, QuoteConfig::default());
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let err = QuoteConfig::from_toml_str(
            r#"
            [tax]
            vat_rate = 13
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("tax.vat_rate")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_capacity_preset_rejected() {
        let err = QuoteConfig::from_toml_str(
            r#"
            [containers.40HQ]
            volume_cbm = 0
            max_weight_kg = 26000
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("40HQ")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_container_type_is_parse_error() {
        let err = QuoteConfig::from_toml_str(
            r#"
            [logistics]
            default_container = "40FQ"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("export-quote/config.toml"));
        }
    }
}
