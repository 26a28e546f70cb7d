// ==========================================
// 出口报价系统 - 报价计算引擎
// ==========================================
// 流水线: 参数校验 → 装箱 → 成本累加 → 价格推导
// 纯函数: 同一 QuoteParameters 必得同一 QuoteResult
// ==========================================

use rust_decimal::Decimal;
use tracing::instrument;

use crate::domain::{QuoteParameters, QuoteResult};
use crate::engine::checked::{add, div, mul, sub};
use crate::engine::error::EngineResult;
use crate::engine::packing::ContainerPacker;
use crate::engine::validation::ParameterValidator;

/// 保险加成: 按发票金额 110% 投保（CIF 加一成）
pub const INSURANCE_UPLIFT: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

/// 计算报价（便捷入口）
pub fn compute(params: &QuoteParameters) -> EngineResult<QuoteResult> {
    QuotationCalculator::new().compute(params)
}

// ==========================================
// QuotationCalculator - 报价计算引擎
// ==========================================
pub struct QuotationCalculator {
    validator: ParameterValidator,
    packer: ContainerPacker,
}

impl QuotationCalculator {
    pub fn new() -> Self {
        Self {
            validator: ParameterValidator::new(),
            packer: ContainerPacker::new(),
        }
    }

    /// 计算报价
    ///
    /// 校验失败时不产生任何中间结果，直接返回 InvalidParameter。
    ///
    /// # 步骤
    /// 1. 总体积 / 总毛重
    /// 2. 柜数 = max(ceil(体积/单柜体积), ceil(毛重/单柜限重))
    /// 3. 采购总价
    /// 4. 退税 = 采购总价 / (1 + 增值税率) × 增值税率（按不含税价计）
    /// 5. 国内运费 = 基础费 + 每柜费 × 柜数
    /// 6. 国际运费 = 海运费(USD) × 汇率 × 柜数
    /// 7. 保险费 = (采购总价 + 国际运费) × 110% × 保险费率
    /// 8. 出口关税 = 采购总价 × 关税率
    /// 9. 总成本 = 采购总价 − 退税 + 国内运费 + 国际运费 + 保险费 + 关税
    /// 10. 目标利润 = 总成本 × 利润率；合同金额 = 总成本 + 目标利润
    /// 11. FOB 单价 = 合同金额 / 数量 / 汇率
    /// 12. 投资回报率 = 目标利润 / 采购总价 × 100
    #[instrument(skip(self, params), fields(quantity = params.quantity))]
    pub fn compute(&self, params: &QuoteParameters) -> EngineResult<QuoteResult> {
        self.validator.validate(params)?;

        // 1-2. 装箱
        let packing = self.packer.pack(
            params.unit_volume,
            params.unit_weight,
            params.quantity,
            params.container_volume_capacity,
            params.container_weight_capacity,
        )?;
        let containers = Decimal::from(packing.container_count);
        let qty = Decimal::from(params.quantity);

        // 3-8. 成本构成
        let purchase_total = mul(params.unit_purchase_price, qty, "purchase_total")?;

        let vat_divisor = add(Decimal::ONE, params.vat_rate, "tax_rebate")?;
        let tax_rebate = mul(
            div(purchase_total, vat_divisor, "tax_rebate")?,
            params.vat_rate,
            "tax_rebate",
        )?;

        let domestic_fee = add(
            params.domestic_fee_base,
            mul(params.domestic_fee_per_container, containers, "domestic_fee")?,
            "domestic_fee",
        )?;

        let international_freight = mul(
            mul(
                params.sea_freight_per_container_usd,
                params.exchange_rate,
                "international_freight",
            )?,
            containers,
            "international_freight",
        )?;

        let insured_value = mul(
            add(purchase_total, international_freight, "insurance")?,
            INSURANCE_UPLIFT,
            "insurance",
        )?;
        let insurance = mul(insured_value, params.insurance_rate, "insurance")?;

        let tariff = mul(purchase_total, params.tariff_rate, "tariff")?;

        // 9. 总成本
        let mut total_cost = sub(purchase_total, tax_rebate, "total_cost")?;
        for part in [domestic_fee, international_freight, insurance, tariff] {
            total_cost = add(total_cost, part, "total_cost")?;
        }

        // 10-12. 价格与利润
        let target_profit = mul(total_cost, params.target_profit_rate, "target_profit")?;
        let contract_amount = add(total_cost, target_profit, "contract_amount")?;

        let unit_price_usd = div(
            div(contract_amount, qty, "unit_price_usd")?,
            params.exchange_rate,
            "unit_price_usd",
        )?;
        let unit_price_cny = mul(unit_price_usd, params.exchange_rate, "unit_price_cny")?;

        let return_on_investment_percent = mul(
            div(target_profit, purchase_total, "return_on_investment")?,
            Decimal::ONE_HUNDRED,
            "return_on_investment",
        )?;
        let cost_profit_margin_percent = mul(
            div(target_profit, total_cost, "cost_profit_margin")?,
            Decimal::ONE_HUNDRED,
            "cost_profit_margin",
        )?;

        tracing::debug!(
            container_count = packing.container_count,
            weight_bound = packing.is_weight_bound(),
            %total_cost,
            %contract_amount,
            %unit_price_usd,
            "报价计算完成"
        );

        Ok(QuoteResult {
            total_volume: packing.total_volume,
            total_weight: packing.total_weight,
            containers_by_volume: packing.containers_by_volume,
            containers_by_weight: packing.containers_by_weight,
            container_count: packing.container_count,
            purchase_total,
            tax_rebate,
            domestic_fee,
            international_freight,
            insurance,
            tariff,
            total_cost,
            target_profit,
            contract_amount,
            unit_price_usd,
            unit_price_cny,
            return_on_investment_percent,
            cost_profit_margin_percent,
        })
    }
}

impl Default for QuotationCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::QuoteError;
    use rust_decimal_macros::dec;

    fn params() -> QuoteParameters {
        QuoteParameters {
            exchange_rate: dec!(7.2),
            target_profit_rate: dec!(0.20),
            container_volume_capacity: dec!(67.7),
            container_weight_capacity: dec!(26000),
            domestic_fee_base: dec!(3000),
            domestic_fee_per_container: dec!(1500),
            sea_freight_per_container_usd: dec!(1000),
            vat_rate: dec!(0.13),
            tariff_rate: dec!(0.05),
            insurance_rate: dec!(0.002),
            unit_volume: dec!(2.55),
            unit_weight: dec!(280),
            unit_purchase_price: dec!(4778),
            quantity: 29,
        }
    }

    #[test]
    fn test_insurance_uplift_constant() {
        assert_eq!(INSURANCE_UPLIFT, dec!(1.10));
    }

    #[test]
    fn test_exact_cost_lines() {
        let result = compute(&params()).unwrap();

        assert_eq!(result.purchase_total, dec!(138562));
        assert_eq!(result.domestic_fee, dec!(6000));
        assert_eq!(result.international_freight, dec!(14400));
        // (138562 + 14400) × 1.10 × 0.002
        assert_eq!(result.insurance, dec!(336.5164));
        assert_eq!(result.tariff, dec!(6928.10));
    }

    #[test]
    fn test_rebate_on_tax_exclusive_base() {
        let result = compute(&params()).unwrap();
        // 138562 / 1.13 × 0.13，而非 138562 × 0.13
        assert_eq!(result.tax_rebate.round_dp(2), dec!(15940.76));
        assert!(result.tax_rebate < dec!(138562) * dec!(0.13));
    }

    #[test]
    fn test_zero_vat_means_no_rebate() {
        let mut p = params();
        p.vat_rate = Decimal::ZERO;
        let result = compute(&p).unwrap();
        assert_eq!(result.tax_rebate, Decimal::ZERO);
    }

    #[test]
    fn test_zero_profit_rate() {
        let mut p = params();
        p.target_profit_rate = Decimal::ZERO;
        let result = compute(&p).unwrap();
        assert_eq!(result.target_profit, Decimal::ZERO);
        assert_eq!(result.contract_amount, result.total_cost);
        assert_eq!(result.return_on_investment_percent, Decimal::ZERO);
    }

    #[test]
    fn test_validation_runs_before_packing() {
        let mut p = params();
        p.container_weight_capacity = Decimal::ZERO;
        let err = compute(&p).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::InvalidParameter {
                field: "container_weight_capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_cost_profit_margin_equals_profit_rate() {
        let result = compute(&params()).unwrap();
        assert_eq!(result.cost_profit_margin_percent.round_dp(10), dec!(20));
    }
}
