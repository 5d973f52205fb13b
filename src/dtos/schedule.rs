use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One task to schedule, as submitted by the client.
///
/// The title doubles as the task's identifier within a request: other tasks
/// reference it by name in their `dependencies` array, and the response echoes
/// it back in `recommendedOrder` and `scheduledTasks`. No numeric ID exists on
/// the wire.
///
/// ## Example
/// ```json
/// {
///   "title": "Write report",
///   "estimatedHours": 6,
///   "dueDate": "2025-03-14T17:00:00Z",
///   "dependencies": ["Collect data"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpecDto {
    /// Task title. Must be non-empty, max 255 characters, and unique within
    /// the request.
    pub title: String,

    /// Estimated working hours. Must be a positive integer; durations are not
    /// fractional on the wire.
    pub estimated_hours: i64,

    /// Optional due date (ISO-8601). Absence means no deadline constraint.
    /// Used as the tie-break when several tasks are simultaneously eligible,
    /// and to detect overruns after placement.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    /// Titles of tasks that must complete before this one starts. Each title
    /// should name another task in the same request; a title with no matching
    /// task is reported as a warning and the edge is ignored.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Request body for `POST /api/v1/projects/{project_id}/schedule`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequestDto {
    /// Tasks to order and place. Must be non-empty.
    pub tasks: Vec<TaskSpecDto>,
}

/// A task with its computed calendar placement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTaskDto {
    /// Title echoed from the input task.
    pub title: String,

    /// When work on this task begins (first working instant of the task).
    pub start_date: DateTime<Utc>,

    /// When work on this task ends. The next task starts here or at the next
    /// working instant after it; tasks never overlap.
    pub end_date: DateTime<Utc>,

    /// Estimated hours echoed from the input task.
    pub estimated_hours: i64,
}

/// Result of a scheduling run. Always structurally complete: every input task
/// appears exactly once in both `recommendedOrder` and `scheduledTasks`, even
/// when the dependency graph contains cycles.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResultDto {
    /// Task titles in dependency-respecting order. Where dependencies tie,
    /// tasks with earlier due dates come first; dateless tasks come after all
    /// dated ones, in input order. Tasks stuck in a cycle are appended at the
    /// end in input order.
    pub recommended_order: Vec<String>,

    /// Calendar placement for each task, parallel to `recommendedOrder`.
    pub scheduled_tasks: Vec<ScheduledTaskDto>,

    /// False when the dependency graph contains a cycle. Dangling dependencies
    /// and due-date overruns do not affect this flag.
    pub is_schedulable: bool,

    /// Human-readable conflict descriptions: dangling dependencies first (in
    /// input order), then the cycle warning if any, then due-date overruns in
    /// schedule order.
    pub warnings: Vec<String>,
}
