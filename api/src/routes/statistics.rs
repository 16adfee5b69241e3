use actix_web::{web, HttpResponse};

use crate::handlers::ApiResult;
use crate::state::AppState;

/// Handler for GET /statistics/
///
/// ```json
/// { "total_users": 3, "total_applications": 10, "completed_applications": 4 }
/// ```
pub async fn get_statistics(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let statistics = state.statistics.collect().await?;
    Ok(HttpResponse::Ok().json(statistics))
}
