//! Dependency-constrained permutation pipeline.
//!
//! Provides:
//! - [`graph::DependencyGraph`]: adjacency list and in-degrees from components
//! - [`cycle::find_cycle`] / [`cycle::has_cycle`]: DFS cycle detection
//! - [`enumerate::enumerate_orderings`]: every topologically valid ordering
//! - [`select::select_diverse`]: bounded coverage-then-diversity selection
//!
//! Stages run in that order; [`crate::OrderingGenerator`] wires them together.

pub mod cycle;
pub mod enumerate;
pub mod graph;
pub mod select;

pub use cycle::{find_cycle, has_cycle};
pub use enumerate::enumerate_orderings;
pub use graph::DependencyGraph;
pub use select::{select_diverse, Selection};
