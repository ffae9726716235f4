//! Product CRUD handlers.
//!
//! ```text
//! GET    /products        list the collection
//! GET    /products/{id}   fetch one record
//! POST   /products        create (id store-assigned)
//! PUT    /products/{id}   partial field overwrite
//! DELETE /products/{id}   remove
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::{Error, Product, ProductDraft, ProductPatch};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// List all products in insertion order.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products in insertion order", body = [Product]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Product>>> {
    Ok(web::Json(state.products.list()?))
}

/// Fetch one product by id.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The matching product", body = Product),
        (status = 400, description = "Non-numeric id", body = Error),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Product>> {
    let id = path.into_inner();
    let product = state
        .products
        .get(id)?
        .ok_or_else(|| Error::not_found(format!("no product with id {id}")))?;
    Ok(web::Json(product))
}

/// Create a product. The id is assigned by the store, never by the client.
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductDraft,
    responses(
        (status = 200, description = "The created product", body = Product),
        (status = 400, description = "Malformed or incomplete body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<ProductDraft>,
) -> ApiResult<web::Json<Product>> {
    Ok(web::Json(state.products.insert(payload.into_inner())?))
}

/// Overwrite the supplied fields of a product in place.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = u64, Path, description = "Product id")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "The updated product", body = Product),
        (status = 400, description = "Non-numeric id or malformed body", body = Error),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[put("/products/{id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<ProductPatch>,
) -> ApiResult<web::Json<Product>> {
    let id = path.into_inner();
    let product = state
        .products
        .update(id, payload.into_inner())?
        .ok_or_else(|| Error::not_found(format!("no product with id {id}")))?;
    Ok(web::Json(product))
}

/// Delete a product by id.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product removed"),
        (status = 400, description = "Non-numeric id", body = Error),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    if state.products.remove(id)? {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(Error::not_found(format!("no product with id {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::error::{json_config, path_config};
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::new()))
            .app_data(json_config())
            .app_data(path_config())
            .service(list_products)
            .service(get_product)
            .service(create_product)
            .service(update_product)
            .service(delete_product)
    }

    fn draft_body(name: &str) -> Value {
        json!({
            "name": name,
            "image": "/images/x.jpg",
            "description": "desc",
            "brand": "Summit",
            "category": "Footwear",
            "price": 10.0,
            "countInStock": 5,
            "rating": 4.0,
            "numReviews": 2
        })
    }

    async fn create(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        name: &str,
    ) -> Value {
        let request = actix_test::TestRequest::post()
            .uri("/products")
            .set_json(draft_body(name))
            .to_request();
        let response = actix_test::call_service(app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        actix_test::read_body_json(response).await
    }

    #[actix_web::test]
    async fn create_assigns_sequential_ids_and_get_round_trips() {
        let app = actix_test::init_service(test_app()).await;

        let first = create(&app, "A").await;
        let second = create(&app, "B").await;
        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);

        let request = actix_test::TestRequest::get().uri("/products/1").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let fetched: Value = actix_test::read_body_json(response).await;
        assert_eq!(fetched, first);
    }

    #[actix_web::test]
    async fn list_returns_insertion_order() {
        let app = actix_test::init_service(test_app()).await;
        create(&app, "A").await;
        create(&app, "B").await;

        let request = actix_test::TestRequest::get().uri("/products").to_request();
        let listed: Value =
            actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
        let names: Vec<&str> = listed
            .as_array()
            .expect("array body")
            .iter()
            .map(|p| p["name"].as_str().expect("name"))
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[actix_web::test]
    async fn get_missing_returns_404_with_empty_body() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get().uri("/products/999").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn non_numeric_id_returns_400_with_json_error() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/products/not-a-number")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn create_with_missing_fields_returns_400() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/products")
            .set_json(json!({ "name": "only a name" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn update_changes_only_the_supplied_fields() {
        let app = actix_test::init_service(test_app()).await;
        create(&app, "A").await;

        let request = actix_test::TestRequest::put()
            .uri("/products/1")
            .set_json(json!({ "price": 42.5 }))
            .to_request();
        let updated: Value =
            actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
        assert_eq!(updated["price"], 42.5);
        assert_eq!(updated["name"], "A");
        assert_eq!(updated["id"], 1);
    }

    #[actix_web::test]
    async fn update_missing_returns_404_without_a_body() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::put()
            .uri("/products/999")
            .set_json(json!({ "price": 1.0 }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn delete_returns_200_with_empty_body_then_404() {
        let app = actix_test::init_service(test_app()).await;
        create(&app, "A").await;

        let request = actix_test::TestRequest::delete().uri("/products/1").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty());

        let request = actix_test::TestRequest::get().uri("/products/1").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);

        let request = actix_test::TestRequest::delete().uri("/products/1").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn ids_are_not_reused_after_a_delete() {
        let app = actix_test::init_service(test_app()).await;
        create(&app, "A").await;
        create(&app, "B").await;

        let request = actix_test::TestRequest::delete().uri("/products/1").to_request();
        assert!(actix_test::call_service(&app, request).await.status().is_success());

        let third = create(&app, "C").await;
        assert_eq!(third["id"], 3, "deleted ids must not be recycled");
    }
}
