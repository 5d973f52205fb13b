use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::Conflict;
use super::graph::DependencyGraph;

/// Output of topological ordering: a total order over all nodes, plus the
/// cycle conflict when one was found. Nodes stuck in a cycle (and anything
/// downstream of one) are appended at the end in input order, so `order` is
/// always a permutation of the input.
pub struct TopologicalOrder {
    pub order: Vec<usize>,
    pub cycle: Option<Conflict>,
}

impl TopologicalOrder {
    pub fn is_schedulable(&self) -> bool {
        self.cycle.is_none()
    }
}

/// Heap key for eligible nodes: tasks with earlier due dates first, dateless
/// tasks after all dated ones, input order as the final tie-break. Wrapped in
/// `Reverse` so the max-heap pops the smallest key.
fn heap_key(graph: &DependencyGraph, node: usize) -> Reverse<(bool, i64, usize)> {
    let due = graph.task(node).due_date;
    Reverse((
        due.is_none(),
        due.map(|d| d.timestamp_millis()).unwrap_or(0),
        node,
    ))
}

/// Kahn's algorithm with a deterministic tie-break.
///
/// Instead of draining whole levels, eligible nodes sit in a min-heap so that
/// among all currently-eligible tasks the one with the earliest due date is
/// extracted next. Re-running with the same input always yields the same
/// order. O(V log V + E).
pub fn topological_order(graph: &DependencyGraph) -> TopologicalOrder {
    let mut in_degree = graph.in_degrees().to_vec();
    let mut heap = BinaryHeap::with_capacity(graph.len());

    for node in 0..graph.len() {
        if in_degree[node] == 0 {
            heap.push(heap_key(graph, node));
        }
    }

    let mut order = Vec::with_capacity(graph.len());
    while let Some(Reverse((_, _, node))) = heap.pop() {
        order.push(node);
        for &dependent in graph.dependents(node) {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                heap.push(heap_key(graph, dependent));
            }
        }
    }

    if order.len() == graph.len() {
        return TopologicalOrder { order, cycle: None };
    }

    // Every remaining node has nonzero in-degree: it is on a cycle or
    // downstream of one. Append them in input order so the response stays a
    // total permutation of the request.
    let stuck: Vec<usize> = (0..graph.len()).filter(|&n| in_degree[n] > 0).collect();
    let cycle = Conflict::CyclicDependency {
        tasks: stuck.iter().map(|&n| graph.task(n).title.clone()).collect(),
    };
    order.extend(&stuck);

    TopologicalOrder {
        order,
        cycle: Some(cycle),
    }
}
