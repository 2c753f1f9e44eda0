//! Cycle detection over task dependency lists.

use std::collections::{HashMap, HashSet};

use crate::core::TaskNode;

/// Returns `true` iff the dependency graph contains a cycle, self-loops
/// included.
///
/// Ids that do not belong to any task in `tasks` are treated as leaves. When
/// two tasks share an id the later one's dependencies win.
pub fn detect_cycle<T: TaskNode>(tasks: &[T]) -> bool {
    let mut order: Vec<&str> = Vec::with_capacity(tasks.len());
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::with_capacity(tasks.len());

    for task in tasks {
        let id = task.node_id();
        if adjacency
            .insert(id, task.dependency_ids().collect())
            .is_none()
        {
            order.push(id);
        }
    }

    let mut visited: HashSet<&str> = HashSet::with_capacity(order.len());
    order
        .iter()
        .any(|&root| !visited.contains(root) && cycle_reachable_from(root, &adjacency, &mut visited))
}

/// Iterative depth-first search from `root`. Each stack frame holds a node
/// and the index of the next neighbour to explore.
fn cycle_reachable_from<'a>(
    root: &'a str,
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
) -> bool {
    let mut on_stack: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
    visited.insert(root);
    on_stack.insert(root);

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let neighbours = adjacency.get(node).map_or(&[][..], Vec::as_slice);

        match neighbours.get(next) {
            Some(&neighbour) => {
                frame.1 += 1;
                if !adjacency.contains_key(neighbour) {
                    continue;
                }
                if on_stack.contains(neighbour) {
                    return true;
                }
                if visited.insert(neighbour) {
                    on_stack.insert(neighbour);
                    stack.push((neighbour, 0));
                }
            }
            None => {
                on_stack.remove(node);
                stack.pop();
            }
        }
    }

    false
}
