//! End-to-end CRUD behaviour over the fully built application, including the
//! id-reuse scenario and the OpenAPI document endpoint.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test as actix_test, web};
use serde_json::{json, Value};

use storefront::inbound::http::health::HealthState;
use storefront::inbound::http::state::HttpState;
use storefront::server::build_app;

async fn init_app() -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    actix_test::init_service(build_app(
        web::Data::new(HttpState::new()),
        web::Data::new(HealthState::new()),
    ))
    .await
}

fn product_body(name: &str) -> Value {
    json!({
        "name": name,
        "image": "/images/x.jpg",
        "description": "desc",
        "brand": "Summit",
        "category": "Footwear",
        "price": 25.0,
        "countInStock": 4,
        "rating": 4.0,
        "numReviews": 1
    })
}

async fn create_product<S>(app: &S, name: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/products")
        .set_json(product_body(name))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    actix_test::read_body_json(response).await
}

#[actix_web::test]
async fn full_product_lifecycle_never_reuses_ids() {
    let app = init_app().await;

    // Insert A and B: sequential ids from 1.
    let a = create_product(&app, "A").await;
    let b = create_product(&app, "B").await;
    assert_eq!(a["id"], 1);
    assert_eq!(b["id"], 2);

    // Delete A; the collection shrinks to just B.
    let request = actix_test::TestRequest::delete().uri("/products/1").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::OK);

    let request = actix_test::TestRequest::get().uri("/products").to_request();
    let listed: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
    let ids: Vec<u64> = listed
        .as_array()
        .expect("array body")
        .iter()
        .map(|p| p["id"].as_u64().expect("numeric id"))
        .collect();
    assert_eq!(ids, vec![2]);

    // Insert C: id 3, never a recycled 2.
    let c = create_product(&app, "C").await;
    assert_eq!(c["id"], 3);
}

#[actix_web::test]
async fn every_route_rejects_a_non_numeric_id_with_400() {
    let app = init_app().await;

    for request in [
        actix_test::TestRequest::get().uri("/products/abc").to_request(),
        actix_test::TestRequest::put()
            .uri("/products/abc")
            .set_json(json!({ "price": 1.0 }))
            .to_request(),
        actix_test::TestRequest::delete().uri("/products/abc").to_request(),
        actix_test::TestRequest::get().uri("/users/abc").to_request(),
    ] {
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["code"], "invalid_request");
    }
}

#[actix_web::test]
async fn the_two_collections_are_independent() {
    let app = init_app().await;
    create_product(&app, "A").await;

    let request = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "ci": 40_123_456_u64,
            "password": "pw",
            "isAdmin": true
        }))
        .to_request();
    let created: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
    // Each collection counts its own ids.
    assert_eq!(created["id"], 1);

    let request = actix_test::TestRequest::get().uri("/users").to_request();
    let users: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
    assert_eq!(users.as_array().expect("array body").len(), 1);

    let request = actix_test::TestRequest::get().uri("/products").to_request();
    let products: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
    assert_eq!(products.as_array().expect("array body").len(), 1);
}

#[actix_web::test]
async fn responses_carry_a_trace_id_header() {
    let app = init_app().await;
    let request = actix_test::TestRequest::get().uri("/products").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.headers().contains_key("trace-id"));
}

#[actix_web::test]
async fn readiness_follows_the_health_state_handle() {
    let health_state = web::Data::new(HealthState::new());
    let app = actix_test::init_service(build_app(
        web::Data::new(HttpState::new()),
        health_state.clone(),
    ))
    .await;

    let request = actix_test::TestRequest::get().uri("/health/ready").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(
        response.status(),
        actix_web::http::StatusCode::SERVICE_UNAVAILABLE
    );

    health_state.mark_ready();
    let request = actix_test::TestRequest::get().uri("/health/ready").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::OK);
}

#[actix_web::test]
async fn openapi_document_is_served_in_debug_builds() {
    let app = init_app().await;
    let request = actix_test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    let doc: Value = actix_test::read_body_json(response).await;
    assert!(doc["openapi"].as_str().is_some());
    assert!(doc["paths"]["/products"].is_object());
}
