// ==========================================
// 出口报价系统 - 报价单
// ==========================================
// 职责: 由参数与计算结果生成报价建议、出口预算表、详细计算数据
// 说明: 只做展示层舍入，不重新计算任何金额
// ==========================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::domain::{ContainerType, CustomerInquiry, ProductSpec, QuoteParameters, QuoteResult};
use crate::i18n::{normalize_locale, t_in, t_in_with_args};
use crate::report::format::{
    format_cny, format_grouped, format_percent, format_rate, format_usd, round_money,
};

/// 预算表行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// 行标识（与 i18n 键一致，例如 "tax_rebate"）
    pub key: String,
    pub label: String,
    /// 带符号金额（退税为负），已保留两位小数
    pub amount: Decimal,
    pub display: String,
    pub formula: String,
}

/// 标签-数值行（询盘信息、报价建议、详细数据）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub label: String,
    pub value: String,
}

impl SheetRow {
    fn new(label: String, value: String) -> Self {
        Self { label, value }
    }
}

// ==========================================
// QuoteSheet - 报价单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSheet {
    pub locale: String,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub inquiry: Vec<SheetRow>,
    pub headline: Vec<SheetRow>,
    pub budget: Vec<BudgetLine>,
    pub details: Vec<SheetRow>,
}

impl QuoteSheet {
    /// 生成报价单
    ///
    /// # 参数
    /// - `locale`: 语言代码，不支持的语言回退到 zh-CN
    /// - `generated_at`: 报价时间，与响应中的时间一致
    pub fn build(
        inquiry: &CustomerInquiry,
        product: &ProductSpec,
        container_type: ContainerType,
        params: &QuoteParameters,
        result: &QuoteResult,
        locale: &str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let locale = normalize_locale(locale);

        Self {
            locale: locale.to_string(),
            title: t_in(locale, "sheet.title"),
            generated_at,
            inquiry: inquiry_rows(locale, inquiry, product, container_type),
            headline: headline_rows(locale, params, result),
            budget: budget_lines(locale, params, result),
            details: detail_rows(locale, params, result),
        }
    }

    /// 按行标识查找预算行
    pub fn budget_line(&self, key: &str) -> Option<&BudgetLine> {
        self.budget.iter().find(|line| line.key == key)
    }

    /// 渲染为纯文本（命令行输出）
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "==================================================");
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(
            out,
            "{}: {}",
            t_in(&self.locale, "sheet.generated_at"),
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out, "==================================================");

        render_rows(&mut out, &t_in(&self.locale, "sheet.inquiry"), None, &self.inquiry);
        render_rows(&mut out, &t_in(&self.locale, "sheet.headline"), None, &self.headline);

        let _ = writeln!(out);
        let _ = writeln!(out, "## {}", t_in(&self.locale, "sheet.budget"));
        let column_item = t_in(&self.locale, "budget.column_item");
        let column_amount = t_in(&self.locale, "budget.column_amount");
        let column_formula = t_in(&self.locale, "budget.column_formula");
        let label_width = self
            .budget
            .iter()
            .map(|l| display_width(&l.label))
            .chain(std::iter::once(display_width(&column_item)))
            .max()
            .unwrap_or(0);
        let amount_width = self
            .budget
            .iter()
            .map(|l| display_width(&l.display))
            .chain(std::iter::once(display_width(&column_amount)))
            .max()
            .unwrap_or(0);
        let _ = writeln!(
            out,
            "{}  {}  {}",
            pad_right(&column_item, label_width),
            pad_left(&column_amount, amount_width),
            column_formula,
        );
        for line in &self.budget {
            let _ = writeln!(
                out,
                "{}  {}  {}",
                pad_right(&line.label, label_width),
                pad_left(&line.display, amount_width),
                line.formula,
            );
        }

        let detail_header = (
            t_in(&self.locale, "detail.column_param"),
            t_in(&self.locale, "detail.column_value"),
        );
        render_rows(
            &mut out,
            &t_in(&self.locale, "sheet.details"),
            Some(&detail_header),
            &self.details,
        );
        out
    }
}

fn render_rows(
    out: &mut String,
    title: &str,
    header: Option<&(String, String)>,
    rows: &[SheetRow],
) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## {}", title);
    let width = rows
        .iter()
        .map(|r| display_width(&r.label))
        .chain(header.map(|(label, _)| display_width(label)))
        .max()
        .unwrap_or(0);
    if let Some((label, value)) = header {
        let _ = writeln!(out, "{}  {}", pad_right(label, width), value);
    }
    for row in rows {
        let _ = writeln!(out, "{}  {}", pad_right(&row.label, width), row.value);
    }
}

// 全角字符按两列计
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

// ==========================================
// 各区块
// ==========================================

fn inquiry_rows(
    locale: &str,
    inquiry: &CustomerInquiry,
    product: &ProductSpec,
    container_type: ContainerType,
) -> Vec<SheetRow> {
    let mut rows = vec![
        SheetRow::new(t_in(locale, "inquiry.customer"), inquiry.customer.clone()),
        SheetRow::new(t_in(locale, "inquiry.country"), inquiry.destination_country.clone()),
        SheetRow::new(t_in(locale, "inquiry.port"), inquiry.destination_port.clone()),
        SheetRow::new(t_in(locale, "inquiry.incoterm"), inquiry.incoterm.to_string()),
        SheetRow::new(t_in(locale, "inquiry.product"), product.name.clone()),
    ];
    if let Some(hs_code) = product.hs_code.as_ref().filter(|c| !c.trim().is_empty()) {
        rows.push(SheetRow::new(t_in(locale, "inquiry.hs_code"), hs_code.clone()));
    }
    rows.push(SheetRow::new(
        t_in(locale, "inquiry.container"),
        container_type.to_string(),
    ));
    rows
}

fn headline_rows(locale: &str, params: &QuoteParameters, result: &QuoteResult) -> Vec<SheetRow> {
    let count = result.container_count.to_string();
    vec![
        SheetRow::new(
            t_in(locale, "headline.container_count"),
            t_in_with_args(locale, "headline.container_count_value", &[("count", &count)]),
        ),
        SheetRow::new(
            t_in(locale, "headline.unit_price_usd"),
            format_usd(result.unit_price_usd),
        ),
        SheetRow::new(
            t_in(locale, "headline.contract_amount"),
            format_cny(result.contract_amount),
        ),
        SheetRow::new(
            t_in(locale, "headline.profit_rate"),
            format_rate(params.target_profit_rate, 1),
        ),
        SheetRow::new(
            t_in(locale, "headline.target_profit"),
            format_cny(result.target_profit),
        ),
        SheetRow::new(
            t_in(locale, "headline.roi"),
            format_percent(result.return_on_investment_percent, 1),
        ),
        SheetRow::new(
            t_in(locale, "headline.cost_margin"),
            format_percent(result.cost_profit_margin_percent, 1),
        ),
    ]
}

fn budget_lines(locale: &str, params: &QuoteParameters, result: &QuoteResult) -> Vec<BudgetLine> {
    let containers = result.container_count.to_string();
    let quantity = params.quantity.to_string();
    let price = format_grouped(params.unit_purchase_price, 0);
    let vat_divisor = format_grouped(Decimal::ONE + params.vat_rate, 2);
    let vat = format_grouped(params.vat_rate, 2);
    let base = format_grouped(params.domestic_fee_base, 0);
    let per = format_grouped(params.domestic_fee_per_container, 0);
    let freight = params.sea_freight_per_container_usd.normalize().to_string();
    let exchange_rate = params.exchange_rate.normalize().to_string();
    let insurance_rate = format_rate(params.insurance_rate, 2);
    let tariff_rate = format_rate(params.tariff_rate, 2);
    let profit_rate = format_rate(params.target_profit_rate, 0);

    let line = |key: &str, amount: Decimal, formula: String| {
        let amount = round_money(amount);
        BudgetLine {
            key: key.to_string(),
            label: t_in(locale, &format!("budget.{}", key)),
            amount,
            display: format_cny(amount),
            formula,
        }
    };
    let formula = |key: &str, args: &[(&str, &str)]| {
        t_in_with_args(locale, &format!("formula.{}", key), args)
    };

    vec![
        line(
            "purchase_total",
            result.purchase_total,
            formula("purchase_total", &[("price", &price), ("quantity", &quantity)]),
        ),
        line(
            "tax_rebate",
            -result.tax_rebate,
            formula("tax_rebate", &[("divisor", &vat_divisor), ("rate", &vat)]),
        ),
        line(
            "domestic_fee",
            result.domestic_fee,
            formula(
                "domestic_fee",
                &[("base", &base), ("per", &per), ("containers", &containers)],
            ),
        ),
        line(
            "international_freight",
            result.international_freight,
            formula(
                "international_freight",
                &[
                    ("freight", &freight),
                    ("rate", &exchange_rate),
                    ("containers", &containers),
                ],
            ),
        ),
        line(
            "insurance",
            result.insurance,
            formula("insurance", &[("rate", &insurance_rate)]),
        ),
        line(
            "tariff",
            result.tariff,
            formula("tariff", &[("rate", &tariff_rate)]),
        ),
        line("total_cost", result.total_cost, formula("total_cost", &[])),
        line(
            "contract_amount",
            result.contract_amount,
            formula("contract_amount", &[("rate", &profit_rate)]),
        ),
    ]
}

fn detail_rows(locale: &str, params: &QuoteParameters, result: &QuoteResult) -> Vec<SheetRow> {
    vec![
        SheetRow::new(
            t_in(locale, "detail.unit_volume"),
            format_grouped(params.unit_volume, 2),
        ),
        SheetRow::new(
            t_in(locale, "detail.unit_weight"),
            format_grouped(params.unit_weight, 1),
        ),
        SheetRow::new(
            t_in(locale, "detail.total_volume"),
            format_grouped(result.total_volume, 2),
        ),
        SheetRow::new(
            t_in(locale, "detail.total_weight"),
            format_grouped(result.total_weight, 0),
        ),
        SheetRow::new(
            t_in(locale, "detail.container_count"),
            result.container_count.to_string(),
        ),
        SheetRow::new(
            t_in(locale, "detail.unit_price_usd"),
            format_usd(result.unit_price_usd),
        ),
        SheetRow::new(
            t_in(locale, "detail.unit_price_cny"),
            format_cny(result.unit_price_cny),
        ),
        SheetRow::new(t_in(locale, "detail.total_cost"), format_cny(result.total_cost)),
        SheetRow::new(
            t_in(locale, "detail.contract_amount"),
            format_cny(result.contract_amount),
        ),
        SheetRow::new(
            t_in(locale, "detail.target_profit"),
            format_cny(result.target_profit),
        ),
    ]
}
