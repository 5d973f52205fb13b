//! The dependency-aware scheduling engine.
//!
//! A pure, synchronous, request-scoped computation: the task list is turned
//! into a dependency graph, topologically ordered with a due-date tie-break,
//! and placed into a working-hours calendar. Recoverable conflicts are
//! modeled as data (the `warnings` list), never as control-flow aborts, so
//! one malformed subgraph cannot prevent scheduling the rest of the tasks.

mod calendar;
mod graph;
mod ordering;

pub use calendar::WorkCalendar;
pub use graph::DependencyGraph;
pub use ordering::{TopologicalOrder, topological_order};

use std::fmt;

use chrono::{DateTime, Utc};

use crate::dtos::{ScheduleResultDto, ScheduledTaskDto, TaskSpecDto};

/// A recoverable conflict found during a scheduling run. Rendered into the
/// `warnings` array of the response; only `CyclicDependency` clears the
/// `isSchedulable` flag.
#[derive(Debug, Clone)]
pub enum Conflict {
    /// A dependency title with no matching task in the request. The edge is
    /// ignored and the task scheduled without it.
    DanglingDependency { task: String, missing: String },

    /// One or more tasks form a dependency cycle (including tasks downstream
    /// of one). They are appended to the order in input order.
    CyclicDependency { tasks: Vec<String> },

    /// A task's computed end time falls after its due date.
    DueDateOverrun {
        task: String,
        end: DateTime<Utc>,
        due: DateTime<Utc>,
    },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::DanglingDependency { task, missing } => write!(
                f,
                "Task \"{}\" depends on \"{}\", which is not part of this request; the dependency was ignored",
                task, missing
            ),
            Conflict::CyclicDependency { tasks } => {
                write!(f, "Cyclic dependency detected among tasks: ")?;
                for (i, t) in tasks.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", t)?;
                }
                Ok(())
            }
            Conflict::DueDateOverrun { task, end, due } => write!(
                f,
                "Task \"{}\" is overdue: scheduled to finish {} but due {}",
                task,
                end.to_rfc3339(),
                due.to_rfc3339()
            ),
        }
    }
}

/// The scheduler: graph construction, ordering, and calendar placement
/// combined into one request-scoped run.
#[derive(Debug, Clone)]
pub struct Scheduler {
    calendar: WorkCalendar,
}

impl Scheduler {
    pub fn new(calendar: WorkCalendar) -> Self {
        Self { calendar }
    }

    /// Schedule a validated task list, placing tasks from the first working
    /// instant at or after `started_at`.
    ///
    /// Always returns a structurally complete result: every input task
    /// appears exactly once in both `recommendedOrder` and `scheduledTasks`,
    /// cyclic or not.
    pub fn schedule(&self, tasks: &[TaskSpecDto], started_at: DateTime<Utc>) -> ScheduleResultDto {
        let graph = DependencyGraph::build(tasks);

        let mut warnings: Vec<String> =
            graph.dangling().iter().map(|c| c.to_string()).collect();

        let topo = topological_order(&graph);
        let is_schedulable = topo.is_schedulable();
        if let Some(cycle) = &topo.cycle {
            warnings.push(cycle.to_string());
        }

        let mut cursor = started_at;
        let mut recommended_order = Vec::with_capacity(tasks.len());
        let mut scheduled_tasks = Vec::with_capacity(tasks.len());
        let mut overruns = Vec::new();

        for &node in &topo.order {
            let task = graph.task(node);
            let (start, end) = self.calendar.place(cursor, task.estimated_hours);
            cursor = end;

            if let Some(due) = task.due_date {
                if end > due {
                    overruns.push(Conflict::DueDateOverrun {
                        task: task.title.clone(),
                        end,
                        due,
                    });
                }
            }

            recommended_order.push(task.title.clone());
            scheduled_tasks.push(ScheduledTaskDto {
                title: task.title.clone(),
                start_date: start,
                end_date: end,
                estimated_hours: task.estimated_hours,
            });
        }

        warnings.extend(overruns.iter().map(|c| c.to_string()));

        ScheduleResultDto {
            recommended_order,
            scheduled_tasks,
            is_schedulable,
            warnings,
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(WorkCalendar::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(title: &str, hours: i64, deps: &[&str]) -> TaskSpecDto {
        TaskSpecDto {
            title: title.to_string(),
            estimated_hours: hours,
            due_date: None,
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
        }
    }

    // Monday 2025-01-06 09:00 UTC
    fn monday_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_tasks_placed_back_to_back() {
        let scheduler = Scheduler::default();
        let tasks = vec![task("a", 2, &[]), task("b", 3, &["a"])];
        let result = scheduler.schedule(&tasks, monday_morning());

        assert!(result.is_schedulable);
        assert_eq!(result.recommended_order, vec!["a", "b"]);
        assert_eq!(result.scheduled_tasks[0].end_date, result.scheduled_tasks[1].start_date);
        assert_eq!(
            result.scheduled_tasks[1].end_date,
            Utc.with_ymd_and_hms(2025, 1, 6, 14, 0, 0).unwrap()
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_result_is_total_even_with_cycle() {
        let scheduler = Scheduler::default();
        let tasks = vec![task("a", 1, &["b"]), task("b", 1, &["a"])];
        let result = scheduler.schedule(&tasks, monday_morning());

        assert!(!result.is_schedulable);
        assert_eq!(result.recommended_order.len(), 2);
        assert_eq!(result.scheduled_tasks.len(), 2);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Cyclic dependency"));
        // Cyclic tasks still get calendar placement
        assert!(result.scheduled_tasks[1].start_date >= result.scheduled_tasks[0].end_date);
    }

    #[test]
    fn test_overdue_task_warns_once_and_stays_schedulable() {
        let scheduler = Scheduler::default();
        let mut late = task("late", 16, &[]);
        // Due before the two working days the task needs
        late.due_date = Some(Utc.with_ymd_and_hms(2025, 1, 6, 17, 0, 0).unwrap());
        let result = scheduler.schedule(&[late], monday_morning());

        assert!(result.is_schedulable);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("\"late\""));
        assert!(result.warnings[0].contains("overdue"));
    }

    #[test]
    fn test_task_meeting_due_date_has_no_warning() {
        let scheduler = Scheduler::default();
        let mut fine = task("fine", 4, &[]);
        fine.due_date = Some(Utc.with_ymd_and_hms(2025, 1, 6, 17, 0, 0).unwrap());
        let result = scheduler.schedule(&[fine], monday_morning());

        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_dangling_dependency_warns_and_schedules() {
        let scheduler = Scheduler::default();
        let tasks = vec![task("a", 1, &["ghost"])];
        let result = scheduler.schedule(&tasks, monday_morning());

        // Soft warning: the edge is dropped, scheduling proceeds
        assert!(result.is_schedulable);
        assert_eq!(result.recommended_order, vec!["a"]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("\"ghost\""));
    }

    #[test]
    fn test_start_before_working_hours_is_aligned() {
        let scheduler = Scheduler::default();
        let tasks = vec![task("a", 1, &[])];
        let sunday_night = Utc.with_ymd_and_hms(2025, 1, 5, 22, 0, 0).unwrap();
        let result = scheduler.schedule(&tasks, sunday_night);

        assert_eq!(result.scheduled_tasks[0].start_date, monday_morning());
    }

    #[test]
    fn test_warning_order_is_dangling_cycle_overrun() {
        let scheduler = Scheduler::default();
        let mut c = task("c", 16, &[]);
        c.due_date = Some(Utc.with_ymd_and_hms(2025, 1, 6, 10, 0, 0).unwrap());
        let tasks = vec![
            task("a", 1, &["ghost", "b"]),
            task("b", 1, &["a"]),
            c,
        ];
        let result = scheduler.schedule(&tasks, monday_morning());

        assert_eq!(result.warnings.len(), 3);
        assert!(result.warnings[0].contains("ghost"));
        assert!(result.warnings[1].contains("Cyclic dependency"));
        assert!(result.warnings[2].contains("overdue"));
    }
}
