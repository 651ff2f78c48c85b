//! Property tests over random acyclic component sets.

use std::collections::HashSet;

use proptest::prelude::*;
use quizit_core::{generate_valid_orderings, Component, OrderingGenerator};

const IDS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Components `IDS[..n]` where an edge `i → j` (i < j) exists when the matching
/// flag is set. Declaration order is reversed so edges point at later entries
/// in the slice as often as earlier ones.
fn dag(n: usize, flags: &[bool]) -> Vec<Component> {
    let mut flag = flags.iter().copied().cycle();
    let mut components: Vec<Component> = (0..n)
        .map(|j| {
            let prerequisites: Vec<&str> = (0..j)
                .filter(|_| flag.next().unwrap_or(false))
                .map(|i| IDS[i])
                .collect();
            Component::new(IDS[j]).with_prerequisites(prerequisites)
        })
        .collect();
    components.reverse();
    components
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn returned_orderings_are_bounded_and_valid(
        n in 1usize..=IDS.len(),
        flags in prop::collection::vec(any::<bool>(), 1..16),
        max in 1usize..10,
    ) {
        let components = dag(n, &flags);
        let result = generate_valid_orderings(&components, max);

        prop_assert_eq!(result.error.as_deref(), None);
        prop_assert!(!result.valid_orderings.is_empty());
        prop_assert!(result.valid_orderings.len() <= max);
        for ordering in &result.valid_orderings {
            prop_assert!(ordering.respects(&components));
        }

        let unique: HashSet<_> = result.valid_orderings.iter().collect();
        prop_assert_eq!(unique.len(), result.valid_orderings.len());
    }

    #[test]
    fn generation_is_deterministic(
        n in 1usize..=IDS.len(),
        flags in prop::collection::vec(any::<bool>(), 1..16),
        max in 1usize..10,
    ) {
        let components = dag(n, &flags);
        prop_assert_eq!(
            generate_valid_orderings(&components, max),
            generate_valid_orderings(&components, max)
        );
    }

    #[test]
    fn every_first_element_is_covered_when_limit_allows(
        n in 1usize..=IDS.len(),
        flags in prop::collection::vec(any::<bool>(), 1..16),
        max in 1usize..10,
    ) {
        let components = dag(n, &flags);
        let all = OrderingGenerator::default().all_orderings(&components).unwrap();
        let groups: HashSet<&str> = all.iter().filter_map(|p| p.first()).collect();

        let result = generate_valid_orderings(&components, max);
        let covered: HashSet<&str> = result
            .valid_orderings
            .iter()
            .filter_map(|p| p.first())
            .collect();

        if groups.len() <= max {
            prop_assert_eq!(covered, groups);
        } else {
            prop_assert_eq!(covered.len(), max);
        }
    }
}
