use actix_web::{HttpResponse, web};

use super::{AppState, HealthResponse};

#[utoipa::path(
    get,
    path = "/health",
    summary = "Health check",
    description = "Returns 200 when the service is up. The engine is a pure in-process computation with no backing store, so liveness is the only thing to report.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "health"
)]
/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    summary = "Readiness check",
    description = "Returns 200 once configuration has been loaded and routes are mounted. The service holds no connections or shared state, so readiness follows liveness.",
    responses(
        (status = 200, description = "Service is ready to accept traffic"),
    ),
    tag = "health"
)]
/// Readiness check
pub async fn readiness_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ready",
        "authRequired": state.config.auth.required
    }))
}
