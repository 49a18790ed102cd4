use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::BTreeMap;

use crate::core::response::ClientResponseError;

pub type AppResult<T = ()> = Result<T, AppError>;

/// Field name -> first violation message for that field.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed")]
    ValidationError { errors: FieldErrors },
    #[error("{0}")]
    BadRequestError(String),
    #[error("{0}")]
    InvalidPayloadError(String),
    #[error("{detail}")]
    EntityNotFoundError { detail: String },
    #[error(transparent)]
    DatabaseError(#[from] sea_orm::DbErr),
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    AddrParseError(#[from] std::net::AddrParseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::ValidationError { errors } => (
                StatusCode::BAD_REQUEST,
                ClientResponseError {
                    message: "Please correct the errors below.".to_string(),
                    errors: Some(errors.clone()),
                },
            ),
            AppError::BadRequestError(message) | AppError::InvalidPayloadError(message) => (
                StatusCode::BAD_REQUEST,
                ClientResponseError { message: message.clone(), errors: None },
            ),
            AppError::EntityNotFoundError { detail } => (
                StatusCode::NOT_FOUND,
                ClientResponseError { message: detail.clone(), errors: None },
            ),
            AppError::DatabaseError(err) => {
                // The cause goes to the operator log, never to the client.
                log::error!("Persistence error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ClientResponseError {
                        message: "A storage error occurred while processing the request."
                            .to_string(),
                        errors: None,
                    },
                )
            },
            AppError::ConfigError(_) | AppError::IoError(_) | AppError::AddrParseError(_) => {
                log::error!("Internal error: {self:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ClientResponseError {
                        message: "An internal error occurred.".to_string(),
                        errors: None,
                    },
                )
            },
        };

        (status, Json(body)).into_response()
    }
}
