//! Contact-form endpoints.

use actix_web::{web, HttpResponse};

use cr_shared::MessageResponse;

use crate::dto::{ContactMessageResponse, CreateMessageRequest};
use crate::handlers::{validate_request, ApiResult};
use crate::state::AppState;

pub async fn create_message(
    state: web::Data<AppState>,
    request: web::Json<CreateMessageRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate_request(&request)?;

    let message = state.messages.create(request.into()).await?;
    Ok(HttpResponse::Ok().json(ContactMessageResponse::from(message)))
}

pub async fn get_message(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let message = state.messages.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ContactMessageResponse::from(message)))
}

pub async fn delete_message(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.messages.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Message deleted")))
}
