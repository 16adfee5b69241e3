//! Image conversion endpoint.

use actix_web::{web, HttpResponse};

use cr_core::errors::ValidationError;

use crate::dto::{ConvertImagePayload, ConvertImageResponse};
use crate::handlers::ApiResult;
use crate::state::AppState;

/// Handler for POST /convert_image
///
/// Takes `Hax_Value` from the query string, or failing that from a JSON body,
/// stores the decoded bytes as a `.jpg` and returns where it is served.
pub async fn convert_image(
    state: web::Data<AppState>,
    query: web::Query<ConvertImagePayload>,
    body: Option<web::Json<ConvertImagePayload>>,
) -> ApiResult<HttpResponse> {
    let encoded = query
        .into_inner()
        .hax_value
        .or_else(|| body.and_then(|body| body.into_inner().hax_value))
        .ok_or_else(|| ValidationError::required("Hax_Value"))?;

    let url = state.media.convert_image(&encoded).await?;
    Ok(HttpResponse::Ok().json(ConvertImageResponse {
        converted_image_url: url,
    }))
}
