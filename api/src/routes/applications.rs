//! Citizen report endpoints.

use actix_web::{web, HttpResponse};

use cr_shared::MessageResponse;

use crate::dto::{
    ApplicationResponse, CreateApplicationRequest, ListApplicationsQuery, UpdateStatusRequest,
};
use crate::handlers::{validate_request, ApiResult};
use crate::state::AppState;

/// Handler for POST /applications/
///
/// ```json
/// {
///     "phone_number": "+79001112233",
///     "photo": "<base64>",
///     "longitude": 37.61,
///     "latitude": 55.75,
///     "description": "Broken street light"
/// }
/// ```
///
/// New reports always start as `Pending`.
pub async fn create_application(
    state: web::Data<AppState>,
    request: web::Json<CreateApplicationRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate_request(&request)?;

    let application = state.applications.create(request.into_draft()?).await?;
    Ok(HttpResponse::Ok().json(ApplicationResponse::from(application)))
}

/// Handler for GET /applications/?status=&skip=&limit=
pub async fn list_applications(
    state: web::Data<AppState>,
    query: web::Query<ListApplicationsQuery>,
) -> ApiResult<HttpResponse> {
    let applications = state
        .applications
        .list(query.status(), query.page())
        .await?;

    let body: Vec<ApplicationResponse> = applications.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub async fn get_application(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let application = state.applications.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApplicationResponse::from(application)))
}

/// Handler for PATCH /applications/{id}
///
/// Any non-empty status up to 50 characters is accepted; there is no
/// transition table.
pub async fn update_status(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<UpdateStatusRequest>,
) -> ApiResult<HttpResponse> {
    let application = state
        .applications
        .transition(id.into_inner(), &request.status)
        .await?;
    Ok(HttpResponse::Ok().json(ApplicationResponse::from(application)))
}

pub async fn delete_application(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.applications.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Application deleted")))
}
