use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use axum_helpers::{
    ApiResponse, JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, Role, UpdateUser, User, UserStatus};
use crate::repository::UserRepository;
use crate::service::UserService;

type UserEnvelope = Json<ApiResponse<User>>;
type UsersEnvelope = Json<ApiResponse<Vec<User>>>;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        list_users_by_status,
        get_user,
        create_user,
        update_user,
        delete_user,
        restore_user,
    ),
    components(
        schemas(User, CreateUser, UpdateUser, UserStatus, Role),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "User management with soft delete")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/status/{status}", get(list_users_by_status))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/restore", patch(restore_user))
        .with_state(shared_service)
}

fn found(id: String, user: Option<User>, message: &str) -> UserResult<UserEnvelope> {
    user.map(|u| Json(ApiResponse::success(message, u)))
        .ok_or(UserError::NotFound(id))
}

/// List all users regardless of status
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = ApiResponse<Vec<User>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<UsersEnvelope> {
    let users = service.list_users().await?;
    Ok(Json(ApiResponse::success("Users retrieved successfully", users)))
}

/// List users with the given status
#[utoipa::path(
    get,
    path = "/status/{status}",
    tag = "Users",
    params(
        ("status" = String, Path, description = "ACTIVE or INACTIVE (case-insensitive)")
    ),
    responses(
        (status = 200, description = "Users with status retrieved successfully", body = ApiResponse<Vec<User>>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users_by_status<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(status): Path<String>,
) -> UserResult<UsersEnvelope> {
    let status: UserStatus = status
        .parse()
        .map_err(|_| UserError::InvalidInput("Invalid status. Use ACTIVE or INACTIVE".to_string()))?;

    let users = service.list_users_by_status(status).await?;
    Ok(Json(ApiResponse::success(
        format!("Users with status {} retrieved successfully", status),
        users,
    )))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<User>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<UserEnvelope> {
    let user = service.get_user(&id).await?;
    found(id, user, "User retrieved successfully")
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<User>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<CreateUser>,
) -> UserResult<(StatusCode, UserEnvelope)> {
    let user = service.create_user(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}

/// Update a user's contact fields and, optionally, its status
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated successfully", body = ApiResponse<User>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateUser>,
) -> UserResult<UserEnvelope> {
    let user = service.update_user(&id, input).await?;
    found(id, user, "User updated successfully")
}

/// Soft-delete a user (status becomes INACTIVE)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = ApiResponse<User>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<UserEnvelope> {
    let user = service.delete_user(&id).await?;
    found(id, user, "User deleted successfully")
}

/// Restore a soft-deleted user (status becomes ACTIVE)
#[utoipa::path(
    patch,
    path = "/{id}/restore",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User restored successfully", body = ApiResponse<User>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn restore_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<UserEnvelope> {
    let user = service.restore_user(&id).await?;
    found(id, user, "User restored successfully")
}
