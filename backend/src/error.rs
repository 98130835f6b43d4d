use crate::openai::ModelError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::models::ErrorBody;
use thiserror::Error;

/// Anything that stops a character from being produced. Always fatal to the
/// request.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("Model returned malformed JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("Failed to generate valid character description")]
    MissingDescription,
    #[error("Failed to generate image")]
    MissingImage,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required fields in request body")]
    MissingFields,
    #[error("Invalid prompt: messages must be a non-empty array.")]
    InvalidMessages,
    #[error("Failed to generate character.")]
    Generation(#[from] GenerationError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidMessages => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Generation(cause) => {
                ErrorBody::new(self.to_string()).with_details(cause.to_string())
            }
            _ => ErrorBody::new(self.to_string()),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_failures_carry_details() {
        let err = ApiError::from(GenerationError::MissingImage);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to generate character.");
    }

    #[test]
    fn validation_failures_are_client_errors() {
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidMessages.status(), StatusCode::BAD_REQUEST);
    }
}
