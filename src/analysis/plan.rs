//! Dependency-respecting work order.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use topological_sort::TopologicalSort;

use crate::core::ScoredTask;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStep {
    /// 1-based position in the plan
    pub step: usize,
    pub id: String,
    pub title: String,
    pub priority_score: f64,
}

/// Orders scored tasks so that every task comes after the tasks it depends
/// on. Tasks released in the same round are ordered by score (highest first),
/// then by input position. Dependencies on unknown ids are ignored.
///
/// Cycles are expected to be rejected beforehand; any tasks left over are
/// appended by score.
pub fn plan_order(scored: &[ScoredTask]) -> Vec<PlanStep> {
    let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(scored.len());
    for (index, entry) in scored.iter().enumerate() {
        index_of.entry(entry.task.id.as_str()).or_insert(index);
    }

    let mut ts = TopologicalSort::<usize>::new();
    for index in 0..scored.len() {
        ts.insert(index);
    }

    // A depends on B implies B precedes A
    for (index, entry) in scored.iter().enumerate() {
        for dep in &entry.task.dependencies {
            #[allow(clippy::collapsible_if)]
            if let Some(&dep_index) = index_of.get(dep.as_str()) {
                if dep_index != index {
                    ts.add_dependency(dep_index, index);
                }
            }
        }
    }

    let by_priority = |a: &usize, b: &usize| -> Ordering {
        scored[*b]
            .priority_score
            .total_cmp(&scored[*a].priority_score)
            .then(a.cmp(b))
    };

    let mut order: Vec<usize> = Vec::with_capacity(scored.len());
    while !ts.is_empty() {
        let mut batch = ts.pop_all();
        if batch.is_empty() {
            break;
        }
        batch.sort_by(by_priority);
        order.extend(batch);
    }

    if order.len() < scored.len() {
        let included: HashSet<usize> = order.iter().copied().collect();
        let mut remaining: Vec<usize> = (0..scored.len())
            .filter(|i| !included.contains(i))
            .collect();
        remaining.sort_by(by_priority);
        order.extend(remaining);
    }

    order
        .into_iter()
        .enumerate()
        .map(|(position, index)| {
            let entry = &scored[index];
            PlanStep {
                step: position + 1,
                id: entry.task.id.clone(),
                title: entry.task.title.clone(),
                priority_score: entry.priority_score,
            }
        })
        .collect()
}
