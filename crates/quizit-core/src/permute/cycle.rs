//! Cycle detection over the dependency graph.

use crate::permute::graph::DependencyGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// True when the graph contains at least one cycle.
pub fn has_cycle(graph: &DependencyGraph) -> bool {
    find_cycle(graph).is_some()
}

/// DFS from every node in input order. Returns the first cycle found as a
/// closed path of ids, e.g. `["A", "B", "A"]`.
///
/// Every node is used as a root so cycles in disconnected parts of the graph
/// are found too.
pub fn find_cycle(graph: &DependencyGraph) -> Option<Vec<String>> {
    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut path = Vec::new();

    for start in 0..graph.len() {
        if marks[start] == Mark::Unvisited && dfs_cycle(graph, start, &mut marks, &mut path) {
            return Some(
                path.into_iter()
                    .map(|idx| graph.id_at(idx).to_string())
                    .collect(),
            );
        }
    }
    None
}

fn dfs_cycle(
    graph: &DependencyGraph,
    node: usize,
    marks: &mut [Mark],
    path: &mut Vec<usize>,
) -> bool {
    marks[node] = Mark::OnStack;
    path.push(node);

    for &next in graph.successors_at(node) {
        match marks[next] {
            Mark::OnStack => {
                // Back edge: keep only the part of the stack that loops.
                let start = path.iter().position(|&n| n == next).unwrap_or(0);
                path.drain(..start);
                path.push(next);
                return true;
            }
            Mark::Unvisited => {
                if dfs_cycle(graph, next, marks, path) {
                    return true;
                }
            }
            Mark::Done => {}
        }
    }

    path.pop();
    marks[node] = Mark::Done;
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;

    fn graph(components: &[Component]) -> DependencyGraph {
        DependencyGraph::from_components(components).unwrap()
    }

    #[test]
    fn test_acyclic_diamond_has_no_cycle() {
        let g = graph(&[
            Component::new("A"),
            Component::new("B").with_prerequisites(["A"]),
            Component::new("C").with_prerequisites(["A"]),
            Component::new("D").with_prerequisites(["B", "C"]),
        ]);
        assert!(!has_cycle(&g));
    }

    #[test]
    fn test_mutual_dependency_is_a_cycle() {
        let g = graph(&[
            Component::new("A").with_prerequisites(["B"]),
            Component::new("B").with_prerequisites(["A"]),
        ]);
        assert_eq!(find_cycle(&g), Some(vec!["A".into(), "B".into(), "A".into()]));
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let g = graph(&[Component::new("A").with_prerequisites(["A"])]);
        assert_eq!(find_cycle(&g), Some(vec!["A".into(), "A".into()]));
    }

    #[test]
    fn test_cycle_in_disconnected_component_is_found() {
        // X stands alone; the loop lives in P → Q → R → P.
        let g = graph(&[
            Component::new("X"),
            Component::new("P").with_prerequisites(["R"]),
            Component::new("Q").with_prerequisites(["P"]),
            Component::new("R").with_prerequisites(["Q"]),
        ]);
        let cycle = find_cycle(&g).expect("cycle expected");
        assert_eq!(cycle.first(), cycle.last());
        assert_eq!(cycle.len(), 4);
        assert!(!cycle.contains(&"X".to_string()));
    }

    #[test]
    fn test_shared_descendant_is_not_a_cycle() {
        // D is reached twice through B and C; revisiting a finished node is fine.
        let g = graph(&[
            Component::new("D").with_prerequisites(["B", "C"]),
            Component::new("B").with_prerequisites(["A"]),
            Component::new("C").with_prerequisites(["A"]),
            Component::new("A"),
        ]);
        assert!(!has_cycle(&g));
    }
}
