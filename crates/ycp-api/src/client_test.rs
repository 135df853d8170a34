use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ycp_core::app_config::{AppConfig, Environment};
use ycp_core::geo::GeoPoint;

use super::*;

fn test_client(base_url: &str) -> CouponClient {
    CouponClient::with_base_url(base_url, 30, None)
        .expect("client construction should not fail")
}

fn promotion_body() -> serde_json::Value {
    json!([{
        "id": "7b3e9a50-6f1c-4a7e-9a33-0e2f5cbb6f10",
        "title": "2x1 cinema tickets",
        "businessName": "Cines Avenida",
        "closestBranch": { "location": "(-3.7038,40.4168)" }
    }])
}

#[tokio::test]
async fn nearby_promotions_hits_expected_path_and_parses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/promotions/nearby"))
        .and(query_param("lat", "40.4168"))
        .and(query_param("lon", "-3.7038"))
        .and(query_param("radiusKm", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(promotion_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let promotions = client
        .nearby_promotions(GeoPoint::new(40.4168, -3.7038), 3.0)
        .await
        .expect("request should succeed");

    assert_eq!(promotions.len(), 1);
    assert_eq!(promotions[0].title, "2x1 cinema tickets");
    let position = promotions[0].position().expect("branch should parse");
    assert!((position.latitude - 40.4168).abs() < f64::EPSILON);
}

#[tokio::test]
async fn nearby_collaborators_parses_camel_case_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collaborators/nearby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "1c1f77aa-6b2a-4f3e-8f80-55b9c8c7d210",
            "name": "Librería Sur",
            "logoUrl": "https://cdn.example.org/sur.png",
            "closestBranch": { "name": "Centro", "location": "(-3.70,40.41)" }
        }])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let collaborators = client
        .nearby_collaborators(GeoPoint::new(40.41, -3.70), 3.0)
        .await
        .expect("request should succeed");

    assert_eq!(collaborators.len(), 1);
    assert_eq!(
        collaborators[0].logo_url.as_deref(),
        Some("https://cdn.example.org/sur.png")
    );
}

#[tokio::test]
async fn list_promotions_passes_category_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/promotions"))
        .and(query_param("category", "culture"))
        .respond_with(ResponseTemplate::new(200).set_body_json(promotion_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let promotions = client
        .list_promotions(Some("culture"))
        .await
        .expect("request should succeed");
    assert_eq!(promotions.len(), 1);
}

#[tokio::test]
async fn redemption_history_builds_user_path() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/v1/users/{user_id}/redemptions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "usedAt": "2024-03-01T10:00:00Z",
            "promotion": { "title": "Free coffee", "businessName": "Cafetería Lua" }
        }])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let redemptions = client
        .redemption_history(user_id)
        .await
        .expect("request should succeed");
    assert_eq!(redemptions.len(), 1);
    assert_eq!(
        redemptions[0].used_at.as_deref(),
        Some("2024-03-01T10:00:00Z")
    );
}

#[tokio::test]
async fn bearer_token_is_attached_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/promotions"))
        .and(bearer_token("session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CouponClient::with_base_url(&server.uri(), 30, Some("session-token"))
        .expect("client construction should not fail");
    let promotions = client
        .list_promotions(None)
        .await
        .expect("request should succeed");
    assert!(promotions.is_empty());
}

#[tokio::test]
async fn non_2xx_status_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/promotions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_promotions(None).await.unwrap_err();
    assert!(matches!(err, BackendError::Http(_)), "got: {err:?}");
}

#[tokio::test]
async fn malformed_body_surfaces_as_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/promotions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_promotions(None).await.unwrap_err();
    assert!(
        matches!(err, BackendError::Deserialize { ref context, .. } if context == "promotions"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn transient_server_error_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/promotions"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/promotions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(promotion_body()))
        .mount(&server)
        .await;

    let config = AppConfig {
        env: Environment::Test,
        log_level: "debug".to_string(),
        api_base_url: server.uri(),
        api_token: None,
        api_user_agent: "ycp/0.1 (test)".to_string(),
        api_request_timeout_secs: 30,
        api_max_retries: 2,
        api_retry_backoff_base_ms: 1,
        categories_path: "./config/categories.yaml".into(),
    };
    let client = CouponClient::from_config(&config).expect("client construction");
    let promotions = client
        .list_promotions(None)
        .await
        .expect("retry should recover from a single 500");
    assert_eq!(promotions.len(), 1);
}
