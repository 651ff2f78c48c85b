//! Scenario and reasoning components authored on a concept card.

use serde::{Deserialize, Serialize};

/// Whether a component describes the scenario or the reasoning about it.
///
/// Only scenario components take part in ordering; filtering is up to the
/// caller (see [`scenario_components`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Scenario,
    Reasoning,
}

/// A user-authored unit with prerequisite edges to other components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique label, usually a single uppercase letter.
    pub id: String,
    /// Free-form description. Not used by ordering.
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: ComponentKind,
    /// Ids that must appear before this component in any valid ordering.
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Component {
    /// Create a scenario component with no text and no prerequisites.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            kind: ComponentKind::Scenario,
            prerequisites: Vec::new(),
        }
    }

    /// Set the prerequisite ids.
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    /// Set the description text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the component kind.
    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_scenario(&self) -> bool {
        self.kind == ComponentKind::Scenario
    }
}

/// Keep only scenario-tagged components, preserving input order.
pub fn scenario_components(components: &[Component]) -> Vec<Component> {
    components
        .iter()
        .filter(|c| c.is_scenario())
        .cloned()
        .collect()
}
