use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use cr_core::services::account::Registration;
use cr_core::User;

/// Body of `POST /register/`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[validate(length(max = 255))]
    pub first_name: Option<String>,
    #[validate(length(max = 255))]
    pub last_name: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Registration {
            email: request.email,
            password: request.password,
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
        }
    }
}

/// Body of `POST /login/`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user; the password digest never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
        }
    }
}

/// Body of `POST /send-verification-code/`
#[derive(Debug, Clone, Deserialize)]
pub struct SendCodeRequest {
    pub email: String,
}

/// Body of `POST /reset-password/`
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}
