#![allow(dead_code)]

use actix_web::test::TestRequest;
use serde_json::json;

use schedule_engine::config::{AuthConfig, Config};
use schedule_engine::handlers::AppState;

/// Build application state with auth disabled, the way most tests want it.
pub fn test_state() -> AppState {
    AppState::from_config(Config {
        auth: AuthConfig { required: false },
        ..Config::default()
    })
}

/// Build application state that requires a bearer token.
pub fn test_state_with_auth() -> AppState {
    AppState::from_config(Config {
        auth: AuthConfig { required: true },
        ..Config::default()
    })
}

/// Helper to create a basic task JSON
pub fn task_json(title: &str, hours: i64) -> serde_json::Value {
    json!({
        "title": title,
        "estimatedHours": hours
    })
}

/// Helper to create a task with a due date
pub fn task_with_due(title: &str, hours: i64, due: &str) -> serde_json::Value {
    json!({
        "title": title,
        "estimatedHours": hours,
        "dueDate": due
    })
}

/// Helper to create a task with dependencies
pub fn task_with_deps(title: &str, hours: i64, deps: Vec<&str>) -> serde_json::Value {
    json!({
        "title": title,
        "estimatedHours": hours,
        "dependencies": deps
    })
}

/// Build a schedule request for a fresh random project id.
pub fn post_schedule(tasks: Vec<serde_json::Value>) -> TestRequest {
    TestRequest::post()
        .uri(&format!(
            "/api/v1/projects/{}/schedule",
            uuid::Uuid::new_v4()
        ))
        .set_json(json!({ "tasks": tasks }))
}

macro_rules! test_service {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .configure(schedule_engine::handlers::configure_routes),
        )
        .await
    };
}
