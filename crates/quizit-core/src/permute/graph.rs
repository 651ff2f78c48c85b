//! Dependency graph over scenario components.
//!
//! An edge `A → B` means "B depends on A": A must be placed before B. Nodes
//! keep the order in which components were supplied, which is what makes
//! enumeration order deterministic for a given input.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::component::Component;
use crate::error::{OrderingError, OrderingResult};

/// Adjacency list plus in-degree counts, indexed by input position.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    /// `prerequisite → [dependent, ...]` (downstream adjacency)
    successors: Vec<Vec<usize>>,
    /// Number of distinct prerequisites per node.
    in_degree: Vec<usize>,
}

impl DependencyGraph {
    /// Build the graph from a component list.
    ///
    /// Ids must be non-empty and free of whitespace so orderings survive the
    /// space-joined wire form. Every prerequisite id is checked before any
    /// edge is added; the first dangling reference (in input order) is
    /// returned as [`OrderingError::MissingPrerequisite`]. Repeated
    /// prerequisite ids on one component count once.
    pub fn from_components(components: &[Component]) -> OrderingResult<Self> {
        let mut index = HashMap::with_capacity(components.len());
        for (pos, component) in components.iter().enumerate() {
            if !is_wire_safe(&component.id) {
                return Err(OrderingError::InvalidComponentId {
                    id: component.id.clone(),
                });
            }
            if index.insert(component.id.clone(), pos).is_some() {
                return Err(OrderingError::DuplicateComponent {
                    id: component.id.clone(),
                });
            }
        }

        for component in components {
            if let Some(missing) = component
                .prerequisites
                .iter()
                .find(|p| !index.contains_key(p.as_str()))
            {
                return Err(OrderingError::MissingPrerequisite {
                    component: component.id.clone(),
                    missing: missing.clone(),
                });
            }
        }

        let mut successors = vec![Vec::new(); components.len()];
        let mut in_degree = vec![0usize; components.len()];

        for (dependent, component) in components.iter().enumerate() {
            let mut seen = HashSet::new();
            for prerequisite in &component.prerequisites {
                if !seen.insert(prerequisite.as_str()) {
                    continue;
                }
                let from = index[prerequisite.as_str()];
                successors[from].push(dependent);
                in_degree[dependent] += 1;
            }
        }

        let graph = Self {
            ids: components.iter().map(|c| c.id.clone()).collect(),
            index,
            successors,
            in_degree,
        };
        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "dependency graph built"
        );
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Node ids in input order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Ids that depend directly on `id`, in edge insertion order.
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        self.index
            .get(id)
            .map(|&idx| {
                self.successors[idx]
                    .iter()
                    .map(|&s| self.ids[s].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Count of distinct prerequisites of `id`.
    pub fn in_degree(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|&idx| self.in_degree[idx])
    }

    pub(crate) fn id_at(&self, idx: usize) -> &str {
        &self.ids[idx]
    }

    pub(crate) fn successors_at(&self, idx: usize) -> &[usize] {
        &self.successors[idx]
    }

    pub(crate) fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }
}

fn is_wire_safe(id: &str) -> bool {
    !id.is_empty() && !id.chars().any(char::is_whitespace)
}
