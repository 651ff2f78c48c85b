//! Quizit Core Library
//!
//! Decides which orderings of a concept card's scenario components are valid
//! quizits. Components carry prerequisite ids; the pipeline builds a
//! dependency graph, rejects dangling references and cycles, enumerates every
//! topologically valid ordering and selects a small, diverse subset of them.
//!
//! ```rust
//! use quizit_core::{generate_valid_orderings, Component};
//!
//! let components = vec![
//!     Component::new("A"),
//!     Component::new("B").with_prerequisites(["A"]),
//!     Component::new("C").with_prerequisites(["A"]),
//!     Component::new("D").with_prerequisites(["B", "C"]),
//! ];
//! let result = generate_valid_orderings(&components, 3);
//! assert_eq!(result.error, None);
//! assert_eq!(result.valid_orderings.len(), 2);
//! assert_eq!(result.valid_orderings[0].to_string(), "A B C D");
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod generate;
pub mod obs;
pub mod palette;
pub mod permutation;
pub mod permute;

pub use component::{scenario_components, Component, ComponentKind};
pub use config::{GeneratorConfig, DEFAULT_MAX_PERMUTATIONS, MAX_PERMUTATIONS_ENV};
pub use error::{OrderingError, OrderingResult};
pub use generate::{generate_valid_orderings, OrderingGenerator, OrderingsResult};
pub use palette::PermutationPalette;
pub use permutation::Permutation;
pub use permute::{
    enumerate_orderings, find_cycle, has_cycle, select_diverse, DependencyGraph, Selection,
};
