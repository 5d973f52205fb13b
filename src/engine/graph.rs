use std::collections::HashMap;

use crate::dtos::TaskSpecDto;

use super::Conflict;

/// The dependency graph of one scheduling request, keyed by dense node
/// indices into the input slice. Titles are interned into indices here and
/// translated back only at the response boundary.
///
/// Edges point dependency -> dependent. Built fresh per request and discarded
/// with it; nothing is shared across requests.
pub struct DependencyGraph<'a> {
    tasks: &'a [TaskSpecDto],
    dependents: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    dangling: Vec<Conflict>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph from the validated task list. A dependency title with
    /// no matching task is recorded as a `DanglingDependency` conflict and
    /// the edge is skipped; scheduling continues without it.
    pub fn build(tasks: &'a [TaskSpecDto]) -> Self {
        // Validation guarantees titles are unique, so the map is total
        let index: HashMap<&str, usize> = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.title.as_str(), i))
            .collect();

        let mut dependents = vec![Vec::new(); tasks.len()];
        let mut in_degree = vec![0usize; tasks.len()];
        let mut dangling = Vec::new();

        for (i, task) in tasks.iter().enumerate() {
            for dep in &task.dependencies {
                match index.get(dep.as_str()) {
                    Some(&j) => {
                        dependents[j].push(i);
                        in_degree[i] += 1;
                    }
                    None => dangling.push(Conflict::DanglingDependency {
                        task: task.title.clone(),
                        missing: dep.clone(),
                    }),
                }
            }
        }

        Self {
            tasks,
            dependents,
            in_degree,
            dangling,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, node: usize) -> &TaskSpecDto {
        &self.tasks[node]
    }

    /// Nodes that depend on `node` (outgoing edges).
    pub fn dependents(&self, node: usize) -> &[usize] {
        &self.dependents[node]
    }

    /// Number of unresolved dependencies per node.
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    /// Dangling-dependency conflicts found while building, in input order.
    pub fn dangling(&self) -> &[Conflict] {
        &self.dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, deps: &[&str]) -> TaskSpecDto {
        TaskSpecDto {
            title: title.to_string(),
            estimated_hours: 1,
            due_date: None,
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_builds_edges_and_in_degrees() {
        let tasks = vec![task("a", &[]), task("b", &["a"]), task("c", &["a", "b"])];
        let graph = DependencyGraph::build(&tasks);

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.dependents(0), &[1, 2]);
        assert_eq!(graph.dependents(1), &[2]);
        assert_eq!(graph.in_degrees(), &[0, 1, 2]);
        assert!(graph.dangling().is_empty());
    }

    #[test]
    fn test_dangling_dependency_skips_edge() {
        let tasks = vec![task("a", &["ghost"])];
        let graph = DependencyGraph::build(&tasks);

        assert_eq!(graph.in_degrees(), &[0]);
        assert_eq!(graph.dangling().len(), 1);
        let warning = graph.dangling()[0].to_string();
        assert!(warning.contains("\"a\""));
        assert!(warning.contains("\"ghost\""));
    }
}
