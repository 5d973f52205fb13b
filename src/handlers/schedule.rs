use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use crate::{auth::BearerAuth, dtos, error::ApiError, metrics, validation};

use super::AppState;
use super::response::validation_error_response;

#[utoipa::path(
    post,
    path = "/api/v1/projects/{project_id}/schedule",
    summary = "Schedule a project's tasks",
    description = "Orders the submitted tasks by dependency (earliest due date first among ties) and places them back-to-back into the working-hours calendar, starting from the current time.

Recoverable conflicts never fail the request: dangling dependency titles, cycles, and due-date overruns are all reported in the `warnings` array of a 200 response. A cycle additionally sets `isSchedulable` to false, with the cyclic tasks appended to the order so every input task always appears exactly once in the result.

Only malformed payloads are rejected: empty task list, duplicate titles, non-positive estimated hours, self-dependencies.",
    params(("project_id" = Uuid, Path, description = "The project whose tasks are being scheduled. The engine itself is stateless; the id is used for request logging only.")),
    request_body(content = dtos::ScheduleRequestDto, description = "Tasks with estimated hours, optional due dates, and dependency titles."),
    responses(
        (status = 200, description = "Complete schedule with ordering, timing, and warnings", body = dtos::ScheduleResultDto),
        (status = 400, description = "Malformed payload (empty task list, duplicate titles, non-positive hours, ...)"),
        (status = 401, description = "Bearer token required but missing or malformed"),
    ),
    security(("bearer" = [])),
    tag = "schedule"
)]
/// Schedule a project's tasks by dependency and due date
pub async fn schedule_project_tasks(
    state: web::Data<AppState>,
    project_id: web::Path<Uuid>,
    form: web::Json<dtos::ScheduleRequestDto>,
    auth: Option<web::Header<BearerAuth>>,
) -> actix_web::Result<HttpResponse> {
    if state.config.auth.required && auth.is_none() {
        return Err(ApiError::Unauthorized(
            "Missing or malformed bearer token".to_string(),
        )
        .into());
    }

    if let Err(errors) = validation::validate_schedule_request(&form, &state.config.limits) {
        return Ok(validation_error_response(&errors));
    }

    let result = state.scheduler.schedule(&form.tasks, Utc::now());

    log::info!(
        "scheduled {} task(s) for project {}: schedulable={}, warnings={}",
        form.tasks.len(),
        *project_id,
        result.is_schedulable,
        result.warnings.len()
    );
    metrics::record_schedule_run(
        form.tasks.len(),
        result.is_schedulable,
        result.warnings.len(),
    );

    Ok(HttpResponse::Ok().json(result))
}
