// ==========================================
// 出口报价系统 - 领域类型定义
// ==========================================
// 集装箱类型标签、贸易术语
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 集装箱类型 (Container Type)
// ==========================================
// 仅支持 20HQ / 40HQ 两种规格
// 容量由配置层的预设表查出，计算引擎不感知标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContainerType {
    #[serde(rename = "20HQ")]
    Hq20, // 20尺高柜
    #[serde(rename = "40HQ")]
    Hq40, // 40尺高柜
}

impl ContainerType {
    /// 全部支持的集装箱类型（按规格从小到大）
    pub const ALL: [ContainerType; 2] = [ContainerType::Hq20, ContainerType::Hq40];

    /// 标签代码（与配置文件中的键一致）
    pub fn code(&self) -> &'static str {
        match self {
            ContainerType::Hq20 => "20HQ",
            ContainerType::Hq40 => "40HQ",
        }
    }
}

impl Default for ContainerType {
    fn default() -> Self {
        ContainerType::Hq40
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 集装箱标签解析失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("不支持的集装箱类型: {0}")]
pub struct UnknownContainerType(pub String);

impl FromStr for ContainerType {
    type Err = UnknownContainerType;

    /// 从下拉框标签解析，例如 "40HQ" 或 "40HQ (67.7 CBM / 26吨)"
    ///
    /// 40FQ 等未定义规格直接拒绝，不做猜测映射
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s
            .trim()
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_uppercase();

        match code.as_str() {
            "20HQ" => Ok(ContainerType::Hq20),
            "40HQ" => Ok(ContainerType::Hq40),
            _ => Err(UnknownContainerType(s.trim().to_string())),
        }
    }
}

// ==========================================
// 贸易术语 (Incoterm)
// ==========================================
// 仅作为询盘元数据携带，不参与计算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Incoterm {
    Cip,
    Fob,
    Cif,
    Exw,
    Dap,
}

impl Default for Incoterm {
    fn default() -> Self {
        Incoterm::Cip
    }
}

impl fmt::Display for Incoterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incoterm::Cip => write!(f, "CIP"),
            Incoterm::Fob => write!(f, "FOB"),
            Incoterm::Cif => write!(f, "CIF"),
            Incoterm::Exw => write!(f, "EXW"),
            Incoterm::Dap => write!(f, "DAP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_type_from_label() {
        assert_eq!("40HQ".parse::<ContainerType>(), Ok(ContainerType::Hq40));
        assert_eq!(
            "20HQ (28 CBM / 22吨)".parse::<ContainerType>(),
            Ok(ContainerType::Hq20)
        );
        assert_eq!(" 40hq ".parse::<ContainerType>(), Ok(ContainerType::Hq40));
    }

    #[test]
    fn test_container_type_rejects_40fq() {
        let err = "40FQ".parse::<ContainerType>().unwrap_err();
        assert_eq!(err.0, "40FQ");
        assert_eq!(err.to_string(), "不支持的集装箱类型: 40FQ");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.to_string().contains("40FQ"));
        assert!("".parse::<ContainerType>().is_err());
    }

    #[test]
    fn test_container_type_serde_uses_code() {
        let json = serde_json::to_string(&ContainerType::Hq20).unwrap();
        assert_eq!(json, "\"20HQ\"");
        let parsed: ContainerType = serde_json::from_str("\"40HQ\"").unwrap();
        assert_eq!(parsed, ContainerType::Hq40);
    }

    #[test]
    fn test_incoterm_display() {
        assert_eq!(Incoterm::Cip.to_string(), "CIP");
        let parsed: Incoterm = serde_json::from_str("\"FOB\"").unwrap();
        assert_eq!(parsed, Incoterm::Fob);
    }
}
