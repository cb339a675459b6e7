use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Caller-facing failures of the directory operations.
///
/// None of these are transient; the `Display` text is sent back verbatim as
/// the `detail` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Participant not found")]
    ParticipantNotFound { activity: String, email: String },
}

impl DirectoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::ActivityNotFound { .. } => StatusCode::NOT_FOUND,
            DirectoryError::AlreadySignedUp { .. } => StatusCode::BAD_REQUEST,
            DirectoryError::ParticipantNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn activity(&self) -> &str {
        match self {
            DirectoryError::ActivityNotFound { activity }
            | DirectoryError::AlreadySignedUp { activity, .. }
            | DirectoryError::ParticipantNotFound { activity, .. } => activity,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            DirectoryError::ActivityNotFound { .. } => None,
            DirectoryError::AlreadySignedUp { email, .. }
            | DirectoryError::ParticipantNotFound { email, .. } => Some(email),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
