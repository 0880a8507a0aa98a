//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: String,
    pub timestamp: String,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
///
/// Answers 503 when the configured database cannot be reached.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let healthy = store_reachable(&state).await;

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store: state.store.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if healthy {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(feature = "postgres")]
async fn store_reachable(state: &AppState) -> bool {
    match &state.db {
        Some(db) => match db.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Database health check failed: {}", e);
                false
            }
        },
        None => true,
    }
}

#[cfg(not(feature = "postgres"))]
async fn store_reachable(_state: &AppState) -> bool {
    true
}
