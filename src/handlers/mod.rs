//! HTTP handlers for the scheduling service.
//!
//! This module contains all HTTP handler functions that can be used by both
//! the main application and integration tests.

mod health;
pub mod response;
mod schedule;

use std::sync::Arc;

use actix_web::web;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, dtos, engine::Scheduler};

// Re-export handlers for route configuration
pub use health::{health_check, readiness_check};
pub use schedule::schedule_project_tasks;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scheduler: Scheduler,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build application state from loaded configuration.
    pub fn from_config(config: Config) -> Self {
        let scheduler = Scheduler::new(crate::engine::WorkCalendar::new(
            config.workday.start_hour,
            config.workday.end_hour,
        ));
        Self {
            scheduler,
            config: Arc::new(config),
        }
    }
}

/// Health check response.
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Overall service status: always "ok" while the process is up
    pub status: String,
    /// Crate version of the running binary
    pub version: String,
}

// =============================================================================
// OpenAPI Documentation
// =============================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness_check,
        schedule::schedule_project_tasks,
    ),
    components(schemas(
        HealthResponse,
        dtos::TaskSpecDto,
        dtos::ScheduleRequestDto,
        dtos::ScheduledTaskDto,
        dtos::ScheduleResultDto,
    )),
    tags(
        (name = "health", description = "Health and readiness probes. Use GET /health for liveness and GET /ready for readiness."),
        (name = "schedule", description = "Dependency-aware task scheduling. Submit a project's tasks with estimated hours, optional due dates, and dependency titles; receive a dependency-respecting order with concrete start/end timestamps inside the working-hours calendar, plus warnings for cycles, dangling dependencies, and due-date overruns."),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Schedule Engine API",
        version = "0.1.0",
        description = "Stateless scheduling service: topologically orders tasks by dependency (Kahn's algorithm with a due-date tie-break) and places them into a Monday-Friday working-hours calendar. Conflicts are reported as warnings, never as hard failures.",
    )
)]
pub struct ApiDoc;

/// Registers the bearer scheme referenced by the schedule endpoint. Tokens
/// are issued by the external auth service; this service only checks for
/// their presence.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

// =============================================================================
// Route Configuration
// =============================================================================

/// Configure all routes for the application.
/// This can be used by both the main application and integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Payloads that fail deserialization (invalid JSON, fractional hours,
    // wrong field types) get the same JSON error shape as auth failures
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        crate::error::ApiError::BadRequest(err.to_string()).into()
    }))
    .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check))
        .route(
            "/api/v1/projects/{project_id}/schedule",
            web::post().to(schedule_project_tasks),
        )
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}
