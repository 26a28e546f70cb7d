// ==========================================
// QuoteApi 集成测试
// ==========================================
// 测试目标: 验证请求解析、参数组装、校验与报价单生成
// ==========================================

mod test_helpers;

use export_quote::api::{load_request, ApiError, QuoteApi};
use export_quote::config::QuoteConfig;
use export_quote::domain::{ContainerType, QuoteRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use test_helpers::{money, reference_parameters, write_temp_file};

fn default_api() -> QuoteApi {
    export_quote::logging::init_test();
    QuoteApi::new(Arc::new(QuoteConfig::default()))
}

#[test]
fn test_reference_request_resolves_to_reference_parameters() {
    let api = default_api();
    let params = api.resolve_parameters(&QuoteRequest::reference_inquiry());
    assert_eq!(params, reference_parameters());
}

#[test]
fn test_quote_reference_inquiry() {
    let api = default_api();
    let response = api
        .quote(&QuoteRequest::reference_inquiry(), "zh-CN")
        .unwrap();

    assert_eq!(response.container_type, ContainerType::Hq40);
    assert_eq!(response.result.container_count, 2);
    assert_eq!(money(response.result.unit_price_usd), dec!(863.71));
    assert_eq!(response.sheet.locale, "zh-CN");
    assert_eq!(response.sheet.generated_at, response.generated_at);

    let rebate = response.sheet.budget_line("tax_rebate").unwrap();
    assert_eq!(rebate.display, "-¥15,940.76");
}

#[test]
fn test_quote_with_20hq_needs_more_containers() {
    let api = default_api();
    let mut request = QuoteRequest::reference_inquiry();
    request.container_type = Some(ContainerType::Hq20);

    let response = api.quote(&request, "en").unwrap();
    // 73.95 / 28 → 3 柜
    assert_eq!(response.result.containers_by_volume, 3);
    assert_eq!(response.result.container_count, 3);
    assert_eq!(response.result.domestic_fee, dec!(7500));
    assert_eq!(response.sheet.locale, "en");
}

#[test]
fn test_overrides_take_precedence_over_config() {
    let api = default_api();
    let mut request = QuoteRequest::reference_inquiry();
    request.overrides.target_profit_rate = Some(dec!(0.15));
    request.overrides.sea_freight_per_container_usd = Some(dec!(1200));

    let response = api.quote(&request, "zh-CN").unwrap();
    assert_eq!(response.parameters.target_profit_rate, dec!(0.15));
    assert_eq!(response.result.international_freight, dec!(17280));
}

#[test]
fn test_validation_failure_lists_every_violation() {
    let api = default_api();
    let mut request = QuoteRequest::reference_inquiry();
    request.quantity = 0;
    request.product.unit_volume_cbm = Decimal::ZERO;
    request.overrides.insurance_rate = Some(dec!(1.5));

    match api.quote(&request, "zh-CN") {
        Err(ApiError::ValidationFailed { reason, violations }) => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["quantity", "unit_volume", "insurance_rate"]);
            assert!(reason.contains("insurance_rate"));
        }
        other => panic!("Expected ValidationFailed, got {:?}", other),
    }
}

#[test]
fn test_config_default_container_is_used() {
    let mut config = QuoteConfig::default();
    config.logistics.default_container = ContainerType::Hq20;
    let api = QuoteApi::new(Arc::new(config));

    let mut request = QuoteRequest::reference_inquiry();
    request.container_type = None;

    let response = api.quote(&request, "zh-CN").unwrap();
    assert_eq!(response.container_type, ContainerType::Hq20);
    assert_eq!(response.parameters.container_volume_capacity, dec!(28));
}

#[test]
fn test_response_serializes_to_json() {
    let api = default_api();
    let response = api
        .quote(&QuoteRequest::reference_inquiry(), "en")
        .unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["container_type"], "40HQ");
    assert_eq!(value["result"]["container_count"], 2);
    assert_eq!(value["inquiry"]["incoterm"], "CIP");
    assert!(value["sheet"]["budget"].as_array().unwrap().len() >= 8);
}

#[test]
fn test_load_request_from_toml() {
    let content = r#"
quantity = 10
container_type = "20HQ"

[inquiry]
customer = "Test Buyer"
destination_country = "Vietnam"
destination_port = "Ho Chi Minh"
incoterm = "FOB"

[product]
name = "Snack vending machine"
unit_volume_cbm = "1.8"
unit_weight_kg = "200"
unit_purchase_price = "3500"

[overrides]
exchange_rate = "7.1"
"#;
    let (_dir, path) = write_temp_file("request.toml", content);

    let request = load_request(&path).unwrap();
    assert_eq!(request.quantity, 10);
    assert_eq!(request.container_type, Some(ContainerType::Hq20));
    assert_eq!(request.product.hs_code, None);
    assert_eq!(request.overrides.exchange_rate, Some(dec!(7.1)));

    let response = default_api().quote(&request, "zh-CN").unwrap();
    assert_eq!(response.result.total_volume, dec!(18));
    assert_eq!(response.result.container_count, 1);
}

#[test]
fn test_load_request_from_json() {
    let json = serde_json::to_string(&QuoteRequest::reference_inquiry()).unwrap();
    let (_dir, path) = write_temp_file("request.json", &json);

    let request = load_request(&path).unwrap();
    assert_eq!(request, QuoteRequest::reference_inquiry());
}

#[test]
fn test_load_request_rejects_unknown_extension() {
    let (_dir, path) = write_temp_file("request.yaml", "quantity: 1");
    assert!(matches!(
        load_request(&path),
        Err(ApiError::InvalidInput(_))
    ));
}

#[test]
fn test_load_request_rejects_unsupported_container() {
    let content = r#"
quantity = 1
container_type = "40FQ"

[inquiry]
customer = "A"
destination_country = "B"
destination_port = "C"

[product]
name = "D"
unit_volume_cbm = "1"
unit_weight_kg = "1"
unit_purchase_price = "1"
"#;
    let (_dir, path) = write_temp_file("request.toml", content);
    assert!(matches!(
        load_request(&path),
        Err(ApiError::InvalidInput(_))
    ));
}
