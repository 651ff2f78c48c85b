//! Stable permutation → color index mapping.
//!
//! Consumers color-code ordering chips. The index of an ordering is its rank
//! among *all* valid orderings of the component set (sorted by wire form),
//! modulo the palette size, so a given ordering keeps its color no matter
//! which subset ends up selected.

use std::collections::HashMap;

use crate::error::{OrderingError, OrderingResult};
use crate::permutation::Permutation;

#[derive(Debug, Clone)]
pub struct PermutationPalette {
    size: usize,
    ranks: HashMap<Permutation, usize>,
}

impl PermutationPalette {
    /// Build from the full enumeration. `size` must be at least 1.
    pub fn new(all_orderings: &[Permutation], size: usize) -> OrderingResult<Self> {
        if size == 0 {
            return Err(OrderingError::InvalidConfig(
                "palette size must be at least 1".to_string(),
            ));
        }

        let mut sorted: Vec<&Permutation> = all_orderings.iter().collect();
        sorted.sort_by_key(|p| p.to_string());
        sorted.dedup();

        let ranks = sorted
            .into_iter()
            .enumerate()
            .map(|(rank, p)| (p.clone(), rank))
            .collect();
        Ok(Self { size, ranks })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Color slot for `ordering`, or `None` if it is not one of the valid
    /// orderings the palette was built from.
    pub fn color_index(&self, ordering: &Permutation) -> Option<usize> {
        self.ranks.get(ordering).map(|rank| rank % self.size)
    }
}
