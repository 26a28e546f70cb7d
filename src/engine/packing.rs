// ==========================================
// 出口报价系统 - 装箱引擎
// ==========================================
// 规则: 体积、重量任一维度先达到单柜上限即决定柜数
//       不足一柜按一柜计（向上取整）
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::engine::checked::{ceil_count, div, mul};
use crate::engine::error::EngineResult;

/// 装箱结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingPlan {
    pub total_volume: Decimal,
    pub total_weight: Decimal,
    pub containers_by_volume: u32,
    pub containers_by_weight: u32,
    pub container_count: u32,
}

impl PackingPlan {
    /// 是否由重量决定柜数（重货）
    pub fn is_weight_bound(&self) -> bool {
        self.containers_by_weight > self.containers_by_volume
    }
}

// ==========================================
// ContainerPacker - 装箱引擎
// ==========================================
pub struct ContainerPacker {
    // 无状态引擎
}

impl ContainerPacker {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算所需柜数
    ///
    /// # 参数
    /// - `unit_volume` / `unit_weight`: 单件体积 (CBM) / 毛重 (KG)
    /// - `quantity`: 件数
    /// - `volume_capacity` / `weight_capacity`: 单柜容量，调用方保证为正
    #[instrument(skip(self), level = "debug")]
    pub fn pack(
        &self,
        unit_volume: Decimal,
        unit_weight: Decimal,
        quantity: u32,
        volume_capacity: Decimal,
        weight_capacity: Decimal,
    ) -> EngineResult<PackingPlan> {
        let qty = Decimal::from(quantity);
        let total_volume = mul(unit_volume, qty, "total_volume")?;
        let total_weight = mul(unit_weight, qty, "total_weight")?;

        let containers_by_volume = ceil_count(
            div(total_volume, volume_capacity, "containers_by_volume")?,
            "containers_by_volume",
        )?;
        let containers_by_weight = ceil_count(
            div(total_weight, weight_capacity, "containers_by_weight")?,
            "containers_by_weight",
        )?;
        let container_count = containers_by_volume.max(containers_by_weight);

        tracing::debug!(
            %total_volume,
            %total_weight,
            containers_by_volume,
            containers_by_weight,
            container_count,
            "装箱完成"
        );

        Ok(PackingPlan {
            total_volume,
            total_weight,
            containers_by_volume,
            containers_by_weight,
            container_count,
        })
    }
}

impl Default for ContainerPacker {
    fn default() -> Self {
        Self::new()
    }
}
