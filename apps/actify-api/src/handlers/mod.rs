//! HTTP handlers and route configuration.

mod health;
mod posts;
mod requests;
mod session;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    }))
    // Public routes
    .route("/", web::get().to(health::liveness))
    .route("/health", web::get().to(health::health_check))
    .route("/needVolunteer", web::get().to(posts::list_all))
    // Session routes
    .route("/jwt", web::post().to(session::login))
    .route("/logout", web::post().to(session::logout))
    // Volunteer posts
    .service(
        web::resource("/volunteers")
            .route(web::get().to(posts::list_by_organizer))
            .route(web::post().to(posts::create)),
    )
    .service(
        web::resource("/volunteer/{id}")
            .route(web::get().to(posts::get))
            .route(web::put().to(posts::upsert))
            .route(web::delete().to(posts::delete)),
    )
    // Volunteer requests
    .service(
        web::resource("/newVolunteer")
            .route(web::get().to(requests::list_by_volunteer))
            .route(web::post().to(requests::create)),
    )
    .service(
        web::resource("/newVolunteer/{id}")
            .route(web::put().to(requests::decrement_post))
            .route(web::delete().to(requests::delete)),
    );
}
