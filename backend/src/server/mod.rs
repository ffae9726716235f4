//! Server construction and middleware wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::error::{json_config, path_config};
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::Trace;

/// Assemble the application: state, extractor error handlers, tracing, the
/// ten CRUD routes, the health probes, and (in debug builds) Swagger UI at
/// `/docs` with the document at `/api-docs/openapi.json`.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(list_products)
        .service(get_product)
        .service(create_product)
        .service(update_product)
        .service(delete_product)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the given configuration.
///
/// The caller keeps the `health_state` handle and flips it to ready once the
/// server has been created, so the readiness probe only reports 200 after the
/// listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(if config.seed_example_data() {
        HttpState::seeded()
    } else {
        HttpState::new()
    });
    let server = HttpServer::new(move || build_app(http_state.clone(), health_state.clone()))
        .bind(config.bind_addr())?
        .run();
    Ok(server)
}
