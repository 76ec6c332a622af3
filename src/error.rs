use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::users::repo::StoreError;

/// Per-request failures. Each one is answered with a status code and a short
/// plain-text message; the underlying cause only goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid request payload")]
    InvalidPayload,
    #[error("Missing required fields")]
    MissingFields,
    #[error("Database connection error")]
    DatabaseConnection,
    #[error("Error creating user")]
    CreateUser,
    #[error("Error retrieving last insert ID")]
    MissingInsertId,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidPayload | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::DatabaseConnection | ApiError::CreateUser | ApiError::MissingInsertId => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Connection(_) => ApiError::DatabaseConnection,
            StoreError::Insert(_) => ApiError::CreateUser,
            StoreError::MissingId => ApiError::MissingInsertId,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;

    #[test]
    fn client_errors_are_4xx() {
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::InvalidPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_map_to_500_with_terse_messages() {
        let cases = [
            (
                StoreError::Connection(DbError::InvalidPort("x".into())),
                "Database connection error",
            ),
            (StoreError::Insert(sqlx::Error::RowNotFound), "Error creating user"),
            (StoreError::MissingId, "Error retrieving last insert ID"),
        ];
        for (store_err, message) in cases {
            let api_err = ApiError::from(store_err);
            assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_err.to_string(), message);
        }
    }

    #[test]
    fn response_body_is_plain_text() {
        let res = ApiError::MissingFields.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let content_type = res
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/plain"));
    }
}
