use std::error::Error;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mongodb::{bson, error::Error as MongoError};
use thiserror::Error;
use bson::ser::Error as BsonError;
use bson::de::Error as BsonDeError;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    MongoError(#[from] MongoError),

    #[error("Serialization error")]
    SerializationError(#[from] BsonError),

    #[error("Deserialization error")]
    DeserializationError(#[from] BsonDeError)
}

impl ApiError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        ApiError::NotFound(format!("{} with id {} not found", entity, id))
    }

    /// The store failed to hand back an identifier for an entity it just
    /// returned, so no redirect target can be built.
    pub fn missing_id(entity: &str) -> Self {
        ApiError::InternalServerError(format!("{} has no identifier", entity))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_)
            | ApiError::InvalidData(_)
            | ApiError::SerializationError(_)
            | ApiError::DeserializationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_)
            | ApiError::MongoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.status_code();
        let body = match self {
            ApiError::Conflict(message)
            | ApiError::BadRequest(message)
            | ApiError::InternalServerError(message)
            | ApiError::InvalidData(message)
            | ApiError::NotFound(message) => serde_json::json!({
                "error": message,
                "code": code.as_u16()
            }),
            ApiError::MongoError(message) => serde_json::json!({
                "error": format!("Database error: {}", message),
                "code": code.as_u16(),
                "details": message.source().map(|src| src.to_string())
            }),
            ApiError::SerializationError(message) => serde_json::json!({
                "error": "Invalid data format",
                "code": code.as_u16(),
                "details": message.source().map(|src| src.to_string())
            }),
            ApiError::DeserializationError(message) => serde_json::json!({
                "error": "Invalid data format",
                "code": code.as_u16(),
                "details": message.source().map(|src| src.to_string())
            }),
        };
        HttpResponse::build(code).json(body)
    }
}

// ----------------------------- TESTS --------------------------------
