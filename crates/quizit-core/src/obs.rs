//! Structured observability hooks for ordering generation.
//!
//! Events are emitted through `tracing`; the library never prints. Binaries
//! decide on the subscriber and filter.

use tracing::{info, warn};

use crate::error::OrderingError;

/// RAII guard that enters a generation-scoped span for the duration of a call.
pub struct GenerationSpan {
    _span: tracing::span::EnteredSpan,
}

impl GenerationSpan {
    pub fn enter(component_count: usize, max_permutations: usize) -> Self {
        let span = tracing::debug_span!(
            "quizit.generate",
            components = component_count,
            max_permutations = max_permutations,
        );
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: generation requested.
pub fn emit_generation_started(component_count: usize, max_permutations: usize) {
    info!(
        event = "generate.started",
        components = component_count,
        max_permutations = max_permutations,
    );
}

/// Emit event: exhaustive enumeration finished.
pub fn emit_orderings_enumerated(total: usize) {
    info!(event = "generate.enumerated", total = total);
}

/// Emit event: selection finished.
pub fn emit_orderings_selected(selected: usize, total: usize, first_groups: usize) {
    info!(
        event = "generate.selected",
        selected = selected,
        total = total,
        first_groups = first_groups,
    );
}

/// Emit event: the request was rejected (warning level).
pub fn emit_generation_rejected(error: &OrderingError) {
    warn!(event = "generate.rejected", kind = error.kind(), error = %error);
}
