use actix_web::{web, HttpResponse};
use chrono::Utc;

use kyc_shared::types::HealthResponse;
use kyc_shared::ApiResponse;

use crate::app::AppState;

pub const SERVICE_NAME: &str = "kyc-onboarding-api";

/// Handler for GET /health
///
/// Probes the MySQL pool and the Redis ledger when they are in use. Any
/// failed probe reports `degraded` with 503 so load balancers drain the node.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let mut healthy = true;

    if let Some(database) = &state.database {
        healthy &= database.health_check().await.unwrap_or(false);
    }
    if let Some(cache) = &state.cache {
        healthy &= cache.health_check().await.unwrap_or(false);
    }

    let body = ApiResponse::success(HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.storage.to_string(),
        timestamp: Utc::now(),
    });

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        tracing::warn!("Health check reported degraded storage");
        HttpResponse::ServiceUnavailable().json(body)
    }
}
