//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// "connected", "error", or "unavailable" when the server runs
    /// without a configured database.
    pub database: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - reports server status and database reachability.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.db {
        Some(handle) => match handle.conn().ping().await {
            Ok(()) => "connected",
            Err(err) => {
                tracing::warn!("Database ping failed during health check: {err}");
                "error"
            }
        },
        None => "unavailable",
    };

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
