//! Email verification codes and password reset.

use actix_web::{web, HttpResponse};

use cr_shared::MessageResponse;

use crate::dto::{ResetPasswordRequest, SendCodeRequest};
use crate::handlers::ApiResult;
use crate::state::AppState;

/// Handler for POST /send-verification-code/
///
/// # Request Body
///
/// ```json
/// { "email": "resident@example.com" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed email
/// - 502 Bad Gateway: the code was stored but the mail relay refused it
pub async fn send_verification_code(
    state: web::Data<AppState>,
    request: web::Json<SendCodeRequest>,
) -> ApiResult<HttpResponse> {
    state.verification.issue_code(&request.email).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "Verification code sent to your email",
    )))
}

/// Handler for POST /reset-password/
///
/// # Request Body
///
/// ```json
/// { "email": "resident@example.com", "code": "123456", "new_password": "..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: no live code matches, or the new password is empty
/// - 404 Not Found: the code is valid but no user has this email
pub async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> ApiResult<HttpResponse> {
    state
        .verification
        .consume_code(&request.email, &request.code, &request.new_password)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Password reset successfully")))
}
