//! Mapping from domain failures to HTTP responses.
//!
//! Every error body is a [`ErrorResponse`] whose `error` field is the stable
//! machine code from `cr_shared::error_codes`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use cr_core::errors::{AuthError, DomainError, ValidationError};
use cr_shared::{error_codes, ErrorResponse};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request could not be decoded (malformed JSON, bad path or query)
    #[error("{message}")]
    BadRequest {
        message: String,
        fields: Vec<String>,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(err) => err.code(),
            Self::BadRequest { .. } => error_codes::VALIDATION_ERROR,
        }
    }

    /// Client-facing message; internal and mail transport failures are not described
    fn public_message(&self) -> String {
        match self {
            Self::Domain(DomainError::Internal { .. }) => "An internal error occurred".to_string(),
            Self::Domain(DomainError::Dispatch { .. }) => {
                "Failed to send verification email".to_string()
            }
            Self::Domain(DomainError::Auth(AuthError::InvalidOrExpiredCode)) => {
                "Invalid or expired verification code".to_string()
            }
            other => other.to_string(),
        }
    }

    fn field(&self) -> Option<&str> {
        match self {
            Self::Domain(DomainError::ValidationErr(err)) => err.field(),
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Domain(err) => match err {
                DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::Conflict { .. } => StatusCode::CONFLICT,
                DomainError::Dispatch { .. } => StatusCode::BAD_GATEWAY,
                DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                DomainError::Auth(AuthError::InvalidOrExpiredCode) => StatusCode::BAD_REQUEST,
                DomainError::Auth(AuthError::UserNotFound) => StatusCode::NOT_FOUND,
                DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "Request failed");
        } else {
            tracing::debug!(error = %self, code = self.code(), "Request rejected");
        }

        let mut body = ErrorResponse::new(self.code(), self.public_message());
        if let Some(field) = self.field() {
            body = body.add_detail("field", field);
        }
        if let Self::BadRequest { fields, .. } = self {
            if !fields.is_empty() {
                body = body.add_detail("fields", fields);
            }
        }

        HttpResponse::build(status).json(body)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

/// Run the `validator` rules declared on a request DTO
pub fn validate_request<T: validator::Validate>(request: &T) -> ApiResult<()> {
    request.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|f| f.to_string()).collect();
        fields.sort();
        ApiError::BadRequest {
            message: format!("Invalid value for: {}", fields.join(", ")),
            fields,
        }
    })
}
