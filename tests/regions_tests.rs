//! Region directory client against a wiremock server.

use cuaca::{CuacaError, RegionClient, RegionSelection};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, at: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_provinces_are_listed() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/provinces.json",
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": "31", "name": "DKI JAKARTA"},
            {"id": "32", "name": "JAWA BARAT"}
        ])),
    )
    .await;

    let client = RegionClient::with_base_url(&server.uri()).unwrap();
    let provinces = client.provinces().await.unwrap();

    assert_eq!(provinces.len(), 2);
    assert_eq!(provinces[1].id, "32");
    assert_eq!(provinces[1].name, "JAWA BARAT");
}

#[tokio::test]
async fn test_regencies_of_a_province() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/regencies/32.json",
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": "3201", "province_id": "32", "name": "KABUPATEN BOGOR"},
            {"id": "3273", "province_id": "32", "name": "KOTA BANDUNG"}
        ])),
    )
    .await;

    let client = RegionClient::with_base_url(&format!("{}/", server.uri())).unwrap();
    let regencies = client.regencies("32").await.unwrap();

    assert_eq!(regencies.len(), 2);
    assert_eq!(regencies[0].province_id.as_deref(), Some("32"));
    assert_eq!(regencies[1].name, "KOTA BANDUNG");
}

#[tokio::test]
async fn test_malformed_listing_is_a_decode_failure() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/provinces.json",
        ResponseTemplate::new(200).set_body_json(json!({"provinces": "nope"})),
    )
    .await;

    let client = RegionClient::with_base_url(&server.uri()).unwrap();
    let err = client.provinces().await.unwrap_err();
    assert!(matches!(err, CuacaError::Decode { .. }));
}

#[tokio::test]
async fn test_missing_province_is_a_network_failure() {
    let server = MockServer::start().await;
    mount(&server, "/regencies/99.json", ResponseTemplate::new(404)).await;

    let client = RegionClient::with_base_url(&server.uri()).unwrap();
    let err = client.regencies("99").await.unwrap_err();
    assert!(matches!(err, CuacaError::Network { .. }));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_empty_province_id_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = RegionClient::with_base_url(&server.uri()).unwrap();
    let err = client.regencies("  ").await.unwrap_err();
    assert!(matches!(err, CuacaError::Validation { .. }));
}

#[tokio::test]
async fn test_selection_flow_from_loaded_lists() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/provinces.json",
        ResponseTemplate::new(200).set_body_json(json!([{"id": "35", "name": "JAWA TIMUR"}])),
    )
    .await;
    mount(
        &server,
        "/regencies/35.json",
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": "3578", "province_id": "35", "name": "KOTA SURABAYA"}
        ])),
    )
    .await;

    let client = RegionClient::with_base_url(&server.uri()).unwrap();
    let mut selection = RegionSelection::new(client.provinces().await.unwrap());
    let province_id = selection.select_province(0).unwrap().id.clone();
    selection.set_regencies(client.regencies(&province_id).await.unwrap());
    selection.select_regency(0).unwrap();

    assert!(selection.validate(Some("Budi")));
    let query = selection.to_query().unwrap();
    assert_eq!(query.regency_name, "KOTA SURABAYA");
    assert_eq!(query.province_name.as_deref(), Some("JAWA TIMUR"));
}
