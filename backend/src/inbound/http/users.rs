//! User CRUD handlers.
//!
//! Structurally identical to the product handlers; the two collections share
//! nothing but the store type.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::{Error, User, UserDraft, UserPatch};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// List all users in insertion order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users in insertion order", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users.list()?))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "The matching user", body = User),
        (status = 400, description = "Non-numeric id", body = Error),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    let user = state
        .users
        .get(id)?
        .ok_or_else(|| Error::not_found(format!("no user with id {id}")))?;
    Ok(web::Json(user))
}

/// Create a user. The id is assigned by the store, never by the client.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserDraft,
    responses(
        (status = 200, description = "The created user", body = User),
        (status = 400, description = "Malformed or incomplete body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserDraft>,
) -> ApiResult<web::Json<User>> {
    Ok(web::Json(state.users.insert(payload.into_inner())?))
}

/// Overwrite the supplied fields of a user in place.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "The updated user", body = User),
        (status = 400, description = "Non-numeric id or malformed body", body = Error),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<UserPatch>,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    let user = state
        .users
        .update(id, payload.into_inner())?
        .ok_or_else(|| Error::not_found(format!("no user with id {id}")))?;
    Ok(web::Json(user))
}

/// Delete a user by id.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed"),
        (status = 400, description = "Non-numeric id", body = Error),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    if state.users.remove(id)? {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(Error::not_found(format!("no user with id {id}")))
    }
}
