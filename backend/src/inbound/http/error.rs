//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into consistent status codes. The response
//! contract: 400 and 500 carry the JSON error payload, 404 carries a status
//! only.

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};

use crate::domain::{Error, ErrorCode};

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        // Not-found responses carry no body.
        if self.code() == ErrorCode::NotFound {
            return builder.finish();
        }
        builder.json(self)
    }
}

/// JSON body extractor configuration rejecting malformed or incomplete
/// payloads with the standard error schema instead of Actix's default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid request body: {err}")).into()
    })
}

/// Path extractor configuration rejecting non-numeric ids with a 400 rather
/// than coercing garbage input.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid path parameter: {err}")).into()
    })
}
