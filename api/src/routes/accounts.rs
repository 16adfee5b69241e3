//! Registration, login and account removal.

use actix_web::{web, HttpResponse};

use cr_shared::MessageResponse;

use crate::dto::{LoginRequest, RegisterRequest, UserResponse};
use crate::handlers::{validate_request, ApiResult};
use crate::state::AppState;

/// Handler for POST /register/
///
/// Responds with the stored user. A taken email is `409 CONFLICT`.
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate_request(&request)?;

    let user = state.accounts.register(request.into()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Handler for POST /login/
///
/// Checks the credentials only; no session or token is issued.
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    state.accounts.login(&request.email, &request.password).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Login successful")))
}

pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.accounts.delete_user(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted")))
}
