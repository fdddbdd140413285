use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

use crate::db::StoreError;

/// Failure taxonomy for the domain services.
///
/// `NotFound` and `Validation` are detected before any write and abort the
/// operation without side effects; `Upstream` covers record-store failures,
/// after which nothing partial is ever returned or persisted.
#[derive(Debug, Display)]
pub enum AppError {
    #[display(fmt = "{} not found", _0)]
    NotFound(String),

    #[display(fmt = "{}", _0)]
    Validation(String),

    #[display(fmt = "record store failure: {}", _0)]
    Upstream(StoreError),
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingId { collection, id } => {
                AppError::NotFound(format!("{collection}/{id}"))
            }
            transport => AppError::Upstream(transport),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_maps_to_not_found() {
        let err: AppError = StoreError::MissingId {
            collection: "users",
            id: "u-1".into(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn transport_maps_to_bad_gateway() {
        let err: AppError = StoreError::Transport {
            collection: "users",
            message: "timed out".into(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
