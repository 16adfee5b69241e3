//! Application factory
//!
//! Builds the actix-web `App` with state, middleware, extractor error handling,
//! the route table and static file serving.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use cr_shared::{error_codes, AppConfig, ErrorResponse};

use crate::handlers::ApiError;
use crate::middleware::cors::create_cors;
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(query_config)
        .app_data(path_config)
        // The last wrap runs first, so CORS answers preflights itself
        .wrap(TracingLogger::default())
        .wrap(create_cors(&config.cors))
        .configure(routes::configure)
        .service(actix_files::Files::new("/static", &config.storage.static_dir))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
