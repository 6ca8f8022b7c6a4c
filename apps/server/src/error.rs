use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use networth_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::UnsupportedCurrency(_)
                | CoreError::InvalidExchangeRate(_)
                | CoreError::Calculation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                CoreError::NotFound(_) | CoreError::Database(DatabaseError::NotFound(_)) => {
                    StatusCode::NOT_FOUND
                }
                CoreError::Database(DatabaseError::UniqueViolation(_))
                | CoreError::Database(DatabaseError::ForeignKeyViolation(_)) => {
                    StatusCode::CONFLICT
                }
                CoreError::Fx(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
