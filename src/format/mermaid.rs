use std::collections::HashMap;

use crate::analysis::DependencyGraphData;

const MAX_NODES: usize = 200;

/// Generates a Mermaid flowchart of the dependency graph. Arrows point from a
/// dependency to the task that needs it.
pub fn generate_diagram(graph: &DependencyGraphData) -> String {
    let dangling = graph.dangling_sources();
    let node_count = graph.nodes.len() + dangling.len();

    // Safeguard: Limit node count
    if node_count > MAX_NODES {
        return format!(
            "%% Graph too large to display ({} nodes). Limit is {}.",
            node_count, MAX_NODES
        );
    }

    if node_count == 0 {
        return String::new();
    }

    let mut lines = vec!["graph TD;".to_string()];

    // Task ids are arbitrary strings, so every node gets a synthetic id.
    let mut mermaid_id: HashMap<&str, String> = HashMap::with_capacity(node_count);

    for (i, node) in graph.nodes.iter().enumerate() {
        let id = format!("N{}", i);
        lines.push(format!(
            "    {}[\"{}\"]:::{}",
            id,
            clean_label(&node.name),
            importance_class(node.importance)
        ));
        mermaid_id.entry(node.id.as_str()).or_insert(id);
    }

    for (i, &source) in dangling.iter().enumerate() {
        let id = format!("X{}", i);
        lines.push(format!("    {}[\"{}\"]:::external", id, clean_label(source)));
        mermaid_id.insert(source, id);
    }

    for link in &graph.links {
        if let (Some(from), Some(to)) = (
            mermaid_id.get(link.source.as_str()),
            mermaid_id.get(link.target.as_str()),
        ) {
            lines.push(format!("    {} --> {};", from, to));
        }
    }

    lines.push("    classDef critical fill:#f8d7da,stroke:#dc3545,stroke-width:1px;".to_string());
    lines.push("    classDef high fill:#fff3cd,stroke:#ffc107,stroke-width:1px;".to_string());
    lines.push("    classDef normal fill:#d4edda,stroke:#28a745,stroke-width:1px;".to_string());
    lines.push(
        "    classDef external fill:#eee,stroke:#999,stroke-width:1px,stroke-dasharray: 4 2;"
            .to_string(),
    );

    lines.join("\n")
}

fn importance_class(importance: i32) -> &'static str {
    if importance >= 9 {
        "critical"
    } else if importance >= 7 {
        "high"
    } else {
        "normal"
    }
}

fn clean_label(label: &str) -> String {
    label.replace('"', "'").replace(['\n', '\r'], " ")
}
