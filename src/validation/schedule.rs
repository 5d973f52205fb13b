use std::collections::HashSet;

use crate::config::LimitsConfig;
use crate::dtos::ScheduleRequestDto;

use super::constants::MAX_TITLE_LENGTH;
use super::{ValidationError, ValidationResult};

/// Validates a scheduling request before graph construction.
///
/// Collects every problem rather than stopping at the first one. Dependency
/// titles that name no task in the request are deliberately NOT rejected
/// here: the engine surfaces them as warnings so the rest of the tasks can
/// still be scheduled.
pub fn validate_schedule_request(dto: &ScheduleRequestDto, limits: &LimitsConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if dto.tasks.is_empty() {
        errors.push(ValidationError {
            field: "tasks".to_string(),
            message: "Task list cannot be empty".to_string(),
        });
    } else if dto.tasks.len() > limits.max_tasks_per_request {
        errors.push(ValidationError {
            field: "tasks".to_string(),
            message: format!(
                "Task list cannot exceed {} tasks",
                limits.max_tasks_per_request
            ),
        });
    }

    let mut seen_titles: HashSet<&str> = HashSet::with_capacity(dto.tasks.len());

    for (i, task) in dto.tasks.iter().enumerate() {
        // Validate title
        if task.title.trim().is_empty() {
            errors.push(ValidationError {
                field: format!("tasks[{}].title", i),
                message: "Task title cannot be empty".to_string(),
            });
        } else if task.title.chars().count() > MAX_TITLE_LENGTH {
            errors.push(ValidationError {
                field: format!("tasks[{}].title", i),
                message: format!("Task title cannot exceed {} characters", MAX_TITLE_LENGTH),
            });
        }

        // Titles act as identifiers, so they must be unique per request
        if !task.title.trim().is_empty() && !seen_titles.insert(task.title.as_str()) {
            errors.push(ValidationError {
                field: format!("tasks[{}].title", i),
                message: format!("Duplicate task title: {}", task.title),
            });
        }

        // Validate estimated hours
        if task.estimated_hours < 1 {
            errors.push(ValidationError {
                field: format!("tasks[{}].estimatedHours", i),
                message: "Estimated hours must be a positive integer".to_string(),
            });
        } else if task.estimated_hours > limits.max_estimated_hours {
            errors.push(ValidationError {
                field: format!("tasks[{}].estimatedHours", i),
                message: format!(
                    "Estimated hours cannot exceed {}",
                    limits.max_estimated_hours
                ),
            });
        }

        // Validate dependencies
        for (j, dep) in task.dependencies.iter().enumerate() {
            if dep.trim().is_empty() {
                errors.push(ValidationError {
                    field: format!("tasks[{}].dependencies[{}]", i, j),
                    message: "Dependency title cannot be empty".to_string(),
                });
            }
        }

        // Check for self-referencing dependency (an empty title is already
        // reported above and cannot meaningfully self-reference)
        if !task.title.trim().is_empty() && task.dependencies.iter().any(|d| *d == task.title) {
            errors.push(ValidationError {
                field: format!("tasks[{}].dependencies", i),
                message: "Task cannot depend on itself".to_string(),
            });
        }

        // Check for duplicate dependencies
        let mut seen_deps: Vec<&str> = Vec::new();
        for dep in &task.dependencies {
            if seen_deps.contains(&dep.as_str()) {
                errors.push(ValidationError {
                    field: format!("tasks[{}].dependencies", i),
                    message: format!("Duplicate dependency: {}", dep),
                });
            } else {
                seen_deps.push(dep);
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
