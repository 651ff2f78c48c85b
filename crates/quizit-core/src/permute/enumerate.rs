//! Exhaustive topological-order enumeration.
//!
//! Recursive backtracking over the set of currently available nodes (not yet
//! placed, no unplaced prerequisites). Each branch decrements the in-degree
//! of the chosen node's dependents and restores it on the way back, so one
//! scratch state is shared by the whole search.
//!
//! The number of orderings is factorial in the worst case (`n!` for `n`
//! unconstrained nodes). Inputs are expected to be a handful of authored
//! components.

use tracing::trace;

use crate::permutation::Permutation;
use crate::permute::graph::DependencyGraph;

struct Search<'g> {
    graph: &'g DependencyGraph,
    in_degree: Vec<usize>,
    placed: Vec<bool>,
    current: Vec<usize>,
    out: Vec<Permutation>,
}

/// Every ordering of the graph's nodes that places each prerequisite before
/// its dependents.
///
/// Orderings come out in backtracking order: at each step candidates are
/// tried in input order. The graph must be acyclic; a cyclic graph yields
/// only the orderings that avoid the stuck nodes, which is none.
pub fn enumerate_orderings(graph: &DependencyGraph) -> Vec<Permutation> {
    if graph.is_empty() {
        return Vec::new();
    }

    let mut search = Search {
        graph,
        in_degree: graph.in_degrees().to_vec(),
        placed: vec![false; graph.len()],
        current: Vec::with_capacity(graph.len()),
        out: Vec::new(),
    };
    search.extend();
    search.out
}

impl Search<'_> {
    fn available(&self) -> Vec<usize> {
        (0..self.graph.len())
            .filter(|&n| !self.placed[n] && self.in_degree[n] == 0)
            .collect()
    }

    fn extend(&mut self) {
        if self.current.len() == self.graph.len() {
            let ids = self
                .current
                .iter()
                .map(|&n| self.graph.id_at(n).to_string())
                .collect();
            self.out.push(Permutation::new(ids));
            return;
        }

        let available = self.available();
        if available.is_empty() {
            trace!(placed = self.current.len(), "enumeration branch stalled");
            return;
        }

        for node in available {
            self.placed[node] = true;
            self.current.push(node);
            for &next in self.graph.successors_at(node) {
                self.in_degree[next] -= 1;
            }

            self.extend();

            for &next in self.graph.successors_at(node) {
                self.in_degree[next] += 1;
            }
            self.current.pop();
            self.placed[node] = false;
        }
    }
}
