//! Route table and handlers, one module per resource.

use actix_web::web;

pub mod accounts;
pub mod applications;
pub mod health;
pub mod media;
pub mod messages;
pub mod password_reset;
pub mod statistics;

/// Register every endpoint on `cfg`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/applications")
                .route("/", web::post().to(applications::create_application))
                .route("/", web::get().to(applications::list_applications))
                .route("/{id}", web::get().to(applications::get_application))
                .route("/{id}", web::patch().to(applications::update_status))
                .route("/{id}", web::delete().to(applications::delete_application)),
        )
        .service(
            web::scope("/messages")
                .route("/", web::post().to(messages::create_message))
                .route("/{id}", web::get().to(messages::get_message))
                .route("/{id}", web::delete().to(messages::delete_message)),
        )
        .route("/statistics/", web::get().to(statistics::get_statistics))
        .route("/convert_image", web::post().to(media::convert_image))
        .route("/register/", web::post().to(accounts::register))
        .route("/login/", web::post().to(accounts::login))
        .route("/delete-user/{id}", web::delete().to(accounts::delete_user))
        .route(
            "/send-verification-code/",
            web::post().to(password_reset::send_verification_code),
        )
        .route("/reset-password/", web::post().to(password_reset::reset_password));
}
