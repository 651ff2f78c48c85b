//! Bounded, diversity-aware selection of orderings.
//!
//! Two greedy phases:
//!
//! 1. **Coverage**: one ordering per distinct first component, taking the
//!    earliest ordering of each group, groups in order of first appearance.
//! 2. **Diversity**: remaining budget goes to the unselected orderings with
//!    the largest summed displacement from the coverage picks.
//!
//! The result is always returned in enumeration order.

use std::collections::HashSet;

use crate::permutation::Permutation;

/// Outcome of a selection pass, with the bookkeeping callers log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen orderings in enumeration order.
    pub orderings: Vec<Permutation>,
    /// Number of distinct first components across all candidates.
    pub first_groups: usize,
}

/// Pick at most `max` orderings from `orderings`.
///
/// When there are no more than `max` orderings they are all returned
/// unchanged.
pub fn select_diverse(orderings: Vec<Permutation>, max: usize) -> Selection {
    let groups = first_group_representatives(&orderings);
    let first_groups = groups.len();

    if orderings.len() <= max {
        return Selection {
            orderings,
            first_groups,
        };
    }

    let mut selected: Vec<usize> = groups.into_iter().take(max).collect();
    let budget = max.saturating_sub(selected.len());

    if budget > 0 {
        let chosen: HashSet<usize> = selected.iter().copied().collect();
        let mut scored: Vec<(usize, usize)> = (0..orderings.len())
            .filter(|idx| !chosen.contains(idx))
            .map(|idx| {
                let score = selected
                    .iter()
                    .map(|&s| orderings[idx].displacement(&orderings[s]))
                    .sum::<usize>();
                (idx, score)
            })
            .collect();
        // `sort_by` is stable: equal scores keep enumeration order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        selected.extend(scored.into_iter().take(budget).map(|(idx, _)| idx));
    }

    let keep: HashSet<usize> = selected.into_iter().collect();
    let orderings = orderings
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| keep.contains(idx))
        .map(|(_, p)| p)
        .collect();

    Selection {
        orderings,
        first_groups,
    }
}

/// Index of the first ordering for each distinct first component, in order
/// of first appearance.
fn first_group_representatives(orderings: &[Permutation]) -> Vec<usize> {
    let mut seen = HashSet::new();
    orderings
        .iter()
        .enumerate()
        .filter(|(_, p)| seen.insert(p.first().unwrap_or_default()))
        .map(|(idx, _)| idx)
        .collect()
}
