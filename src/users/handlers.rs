use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{CreateUserRequest, UserResponse},
        extractors::JsonObject,
        repo::StoreError,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/insert", post(create_user).fallback(method_not_allowed))
}

async fn method_not_allowed(method: Method) -> ApiError {
    warn!(%method, "method not allowed on /insert");
    ApiError::MethodNotAllowed
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonObject(payload): JsonObject<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Some(new_user) = payload.into_new_user() else {
        warn!("missing required fields");
        return Err(ApiError::MissingFields);
    };

    let user = match state.users.insert(&new_user).await {
        Ok(u) => u,
        Err(e) => {
            match &e {
                StoreError::Connection(_) => error!(error = %e, "database connection failed"),
                StoreError::Insert(_) => error!(error = %e, "error inserting user"),
                StoreError::MissingId => error!(error = %e, "error getting last insert id"),
            }
            return Err(e.into());
        }
    };

    info!(user_id = user.user_id, username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(user.into())))
}
