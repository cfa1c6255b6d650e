//! HTTP handlers and route configuration.

mod admin;
mod api;
mod blog;
mod enquiry;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Internal read API consumed by the page handlers
            .route("/blog/{slug}", web::get().to(api::blog_by_slug))
            .route("/blog", web::get().to(api::related_posts))
            .route("/enquiry/open", web::post().to(enquiry::open_popup)),
    )
    // Server-rendered pages
    .route("/blog/{slug}", web::get().to(blog::blog_detail))
    .route("/admin/blog/edit/{id}", web::get().to(admin::edit_blog));
}
