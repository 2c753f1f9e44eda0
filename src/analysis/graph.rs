//! Node/link view of a task batch for visualization.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::Task;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub importance: i32,
    /// ISO-8601 date
    pub due_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    DependsOn,
}

/// Edge from a dependency (`source`) to the task that needs it (`target`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DependencyGraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl DependencyGraphData {
    /// Link sources that are not nodes of this graph, first occurrence order.
    pub fn dangling_sources(&self) -> Vec<&str> {
        let known: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut seen = HashSet::new();
        self.links
            .iter()
            .map(|l| l.source.as_str())
            .filter(|source| !known.contains(source) && seen.insert(*source))
            .collect()
    }
}

/// Builds one node per task and one link per dependency edge, preserving
/// input order. Links to unknown ids are kept.
pub fn build_graph(tasks: &[Task]) -> DependencyGraphData {
    let mut graph = DependencyGraphData {
        nodes: Vec::with_capacity(tasks.len()),
        links: Vec::new(),
    };

    for task in tasks {
        graph.nodes.push(GraphNode {
            id: task.id.clone(),
            name: task.title.clone(),
            importance: task.importance,
            due_date: task.due_date.to_string(),
        });

        graph
            .links
            .extend(task.dependencies.iter().map(|dep| GraphLink {
                source: dep.clone(),
                target: task.id.clone(),
                kind: LinkKind::DependsOn,
            }));
    }

    graph
}
