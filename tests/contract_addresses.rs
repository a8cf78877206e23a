use std::sync::Arc;

use address_book_api::{
    application::address_service::AddressService, build_router,
    infrastructure::in_memory_address_repository::InMemoryAddressRepository, state::AppState,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn build_app() -> Router {
    let repository = Arc::new(InMemoryAddressRepository::new());
    let service = Arc::new(AddressService::new(repository));
    build_router(AppState::new(service))
}

fn address_body() -> Value {
    json!({
        "street": "Street",
        "city": "City",
        "state": "State",
        "zipCode": "12345",
        "country": "Country"
    })
}

async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request must succeed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();

    if bytes.is_empty() {
        (status, Value::Null)
    } else {
        (
            status,
            serde_json::from_slice(&bytes).expect("body must be JSON"),
        )
    }
}

fn assert_problem(problem: &Value, status: u16, title: &str) {
    assert_eq!(
        problem.get("status").and_then(Value::as_u64),
        Some(u64::from(status))
    );
    assert_eq!(problem.get("title").and_then(Value::as_str), Some(title));
    assert!(problem.get("detail").and_then(Value::as_str).is_some());
    assert!(
        problem
            .get("correlation_id")
            .and_then(Value::as_str)
            .is_some()
    );
}

fn post_address(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/addresses")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid create request")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (status, body) = request_json(
        build_app(),
        Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .expect("valid health request"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));
}

#[tokio::test]
async fn create_returns_201_with_server_assigned_id_and_audit_fields() {
    let (status, created) = request_json(build_app(), post_address(address_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("id").and_then(Value::as_i64).is_some());
    assert_eq!(created.get("street").and_then(Value::as_str), Some("Street"));
    assert_eq!(created.get("city").and_then(Value::as_str), Some("City"));
    assert_eq!(created.get("state").and_then(Value::as_str), Some("State"));
    assert_eq!(created.get("zipCode").and_then(Value::as_str), Some("12345"));
    assert_eq!(
        created.get("country").and_then(Value::as_str),
        Some("Country")
    );
    assert!(created.get("createdAt").and_then(Value::as_str).is_some());
    assert!(created.get("updatedAt").and_then(Value::as_str).is_some());
    assert_eq!(
        created.get("createdBy").and_then(Value::as_str),
        Some("System")
    );
    assert_eq!(
        created.get("lastModifiedBy").and_then(Value::as_str),
        Some("system")
    );
}

#[tokio::test]
async fn create_with_blank_fields_returns_400_with_violations() {
    let mut body = address_body();
    body["street"] = json!("   ");
    body["country"] = json!("");

    let (status, problem) = request_json(build_app(), post_address(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Validation failed");
    let violations = problem
        .get("violations")
        .and_then(Value::as_array)
        .expect("problem must include violations");
    assert_eq!(violations.len(), 2);
    assert_eq!(
        violations[0].get("field").and_then(Value::as_str),
        Some("street")
    );
    assert_eq!(
        violations[0].get("message").and_then(Value::as_str),
        Some("Street cannot be blank")
    );
}

#[tokio::test]
async fn get_returns_the_persisted_address() {
    let app = build_app();

    let (status, created) = request_json(app.clone(), post_address(address_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created.get("id").and_then(Value::as_i64).expect("id");

    let (status, fetched) = request_json(
        app,
        Request::builder()
            .method("GET")
            .uri(format!("/addresses/{id}"))
            .body(Body::empty())
            .expect("valid get request"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_on_missing_id_returns_404_referencing_the_id() {
    let (status, problem) = request_json(
        build_app(),
        Request::builder()
            .method("GET")
            .uri("/addresses/99")
            .body(Body::empty())
            .expect("valid get request"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_problem(&problem, 404, "Not found");
    assert_eq!(
        problem.get("detail").and_then(Value::as_str),
        Some("Address not found with id: 99")
    );
}

#[tokio::test]
async fn get_with_malformed_id_returns_400() {
    let (status, problem) = request_json(
        build_app(),
        Request::builder()
            .method("GET")
            .uri("/addresses/not-a-number")
            .body(Body::empty())
            .expect("valid malformed id request"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Invalid argument");
}

#[tokio::test]
async fn put_replaces_descriptive_fields_and_preserves_creation_audit() {
    let app = build_app();

    let (status, created) = request_json(app.clone(), post_address(address_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created.get("id").and_then(Value::as_i64).expect("id");

    let mut body = address_body();
    body["street"] = json!("New Street");

    let (status, updated) = request_json(
        app,
        Request::builder()
            .method("PUT")
            .uri(format!("/addresses/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid update request"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated.get("id").and_then(Value::as_i64), Some(id));
    assert_eq!(
        updated.get("street").and_then(Value::as_str),
        Some("New Street")
    );
    assert_eq!(
        updated.get("createdAt").and_then(Value::as_str),
        created.get("createdAt").and_then(Value::as_str)
    );
    assert_eq!(
        updated.get("createdBy").and_then(Value::as_str),
        Some("System")
    );
    assert_eq!(
        updated.get("lastModifiedBy").and_then(Value::as_str),
        Some("system")
    );
}

#[tokio::test]
async fn put_on_missing_id_returns_404() {
    let (status, problem) = request_json(
        build_app(),
        Request::builder()
            .method("PUT")
            .uri("/addresses/42")
            .header("content-type", "application/json")
            .body(Body::from(address_body().to_string()))
            .expect("valid update request"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_problem(&problem, 404, "Not found");
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = build_app();

    let (status, created) = request_json(app.clone(), post_address(address_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created.get("id").and_then(Value::as_i64).expect("id");

    let (status, body) = request_json(
        app.clone(),
        Request::builder()
            .method("DELETE")
            .uri(format!("/addresses/{id}"))
            .body(Body::empty())
            .expect("valid delete request"),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, problem) = request_json(
        app,
        Request::builder()
            .method("GET")
            .uri(format!("/addresses/{id}"))
            .body(Body::empty())
            .expect("valid get after delete request"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_problem(&problem, 404, "Not found");
}

#[tokio::test]
async fn delete_on_missing_id_returns_404_not_a_silent_success() {
    let (status, problem) = request_json(
        build_app(),
        Request::builder()
            .method("DELETE")
            .uri("/addresses/-1")
            .body(Body::empty())
            .expect("valid delete request"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_problem(&problem, 404, "Not found");
}

#[tokio::test]
async fn list_on_empty_storage_returns_an_empty_array() {
    let (status, body) = request_json(
        build_app(),
        Request::builder()
            .method("GET")
            .uri("/addresses")
            .body(Body::empty())
            .expect("valid list request"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_returns_every_persisted_address() {
    let app = build_app();

    let (status, _) = request_json(app.clone(), post_address(address_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    let mut second = address_body();
    second["city"] = json!("Other City");
    let (status, _) = request_json(app.clone(), post_address(second)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request_json(
        app,
        Request::builder()
            .method("GET")
            .uri("/addresses")
            .body(Body::empty())
            .expect("valid list request"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("list body must be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("city").and_then(Value::as_str), Some("City"));
    assert_eq!(
        items[1].get("city").and_then(Value::as_str),
        Some("Other City")
    );
}
