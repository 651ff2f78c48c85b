//! Public entry points: validate, enumerate, select.

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::config::GeneratorConfig;
use crate::error::{OrderingError, OrderingResult};
use crate::obs::{self, GenerationSpan};
use crate::permutation::Permutation;
use crate::permute::{enumerate_orderings, find_cycle, select_diverse, DependencyGraph};

/// Wire-compatible result shape: orderings on success, an error message
/// otherwise. Never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingsResult {
    pub valid_orderings: Vec<Permutation>,
    pub error: Option<String>,
}

impl OrderingsResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<OrderingResult<Vec<Permutation>>> for OrderingsResult {
    fn from(result: OrderingResult<Vec<Permutation>>) -> Self {
        match result {
            Ok(valid_orderings) => Self {
                valid_orderings,
                error: None,
            },
            Err(err) => Self {
                valid_orderings: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }
}

/// Configured ordering generator. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct OrderingGenerator {
    config: GeneratorConfig,
}

impl OrderingGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Every valid ordering, in enumeration order, without selection.
    ///
    /// Validation happens before any traversal: duplicate ids and dangling
    /// prerequisites are rejected first, then cycles.
    pub fn all_orderings(&self, components: &[Component]) -> OrderingResult<Vec<Permutation>> {
        if components.is_empty() {
            return Ok(Vec::new());
        }

        let graph = DependencyGraph::from_components(components)?;
        if let Some(cycle) = find_cycle(&graph) {
            return Err(OrderingError::CircularDependency { cycle });
        }

        let orderings = enumerate_orderings(&graph);
        if orderings.is_empty() {
            return Err(OrderingError::Internal(format!(
                "no ordering enumerated for {} acyclic components",
                graph.len()
            )));
        }
        obs::emit_orderings_enumerated(orderings.len());
        Ok(orderings)
    }

    /// At most `max_permutations` representative orderings, in enumeration
    /// order.
    pub fn generate(&self, components: &[Component]) -> OrderingResult<Vec<Permutation>> {
        let max = self.config.max_permutations;
        let _span = GenerationSpan::enter(components.len(), max);
        obs::emit_generation_started(components.len(), max);

        let result = self.all_orderings(components).map(|all| {
            let total = all.len();
            let selection = select_diverse(all, max);
            obs::emit_orderings_selected(
                selection.orderings.len(),
                total,
                selection.first_groups,
            );
            selection.orderings
        });

        if let Err(err) = &result {
            obs::emit_generation_rejected(err);
        }
        result
    }
}

/// Generate up to `max_permutations` valid, diverse orderings.
///
/// An empty component list succeeds with no orderings whatever the limit.
/// Every other failure, including an invalid limit, is reported through
/// [`OrderingsResult::error`] with an empty ordering list.
pub fn generate_valid_orderings(
    components: &[Component],
    max_permutations: usize,
) -> OrderingsResult {
    if components.is_empty() {
        return OrderingsResult::default();
    }
    GeneratorConfig::new(max_permutations)
        .and_then(|config| OrderingGenerator::new(config).generate(components))
        .into()
}
