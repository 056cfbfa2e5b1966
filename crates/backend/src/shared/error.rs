use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Everything that can go wrong while registering an account or a role.
///
/// The messages are the ones surfaced to the user on the register page.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Sorry, this username is already taken, please try another one!")]
    UsernameTaken,

    #[error("Sorry, form is not valid, please correct it or refresh it!: {0}")]
    InvalidForm(String),

    #[error("Sorry, you cannot create another Student/Instructor account")]
    RoleAlreadyRegistered,

    #[error("Sorry, '{0}' is not a role you can register for")]
    UnknownRole(String),

    #[error("Account not found")]
    AccountNotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RegistrationError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistrationError::UsernameTaken | RegistrationError::RoleAlreadyRegistered => {
                StatusCode::CONFLICT
            }
            RegistrationError::InvalidForm(_) | RegistrationError::UnknownRole(_) => {
                StatusCode::BAD_REQUEST
            }
            RegistrationError::AccountNotFound => StatusCode::NOT_FOUND,
            RegistrationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        if let RegistrationError::Internal(ref e) = self {
            tracing::error!("registration failed: {e:#}");
        }
        let status = self.status_code();
        let body = Json(serde_json::json!({ "failure_message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            RegistrationError::UsernameTaken.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            RegistrationError::RoleAlreadyRegistered.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            RegistrationError::UnknownRole("admin".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistrationError::InvalidForm("bad email".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages_name_the_problem() {
        let err = RegistrationError::UnknownRole("admin".into());
        assert!(err.to_string().contains("admin"));

        let err = RegistrationError::UsernameTaken;
        assert!(err.to_string().contains("already taken"));
    }
}
