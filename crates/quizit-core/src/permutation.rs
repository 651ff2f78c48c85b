//! A single valid ordering of component ids.
//!
//! On the wire a permutation is one space-joined token such as `"A C B D"`,
//! which is what existing consumers render as selectable chips.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::component::Component;

/// An ordered sequence of component ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation(Vec<String>);

impl Permutation {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    /// Parse the space-joined wire form. Any run of whitespace separates ids.
    pub fn from_wire(s: &str) -> Self {
        Self(s.split_whitespace().map(str::to_string).collect())
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn into_ids(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The component placed first, if any.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// 0-indexed position of `id`, if present.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|x| x == id)
    }

    fn positions(&self) -> HashMap<&str, usize> {
        self.0
            .iter()
            .enumerate()
            .map(|(pos, id)| (id.as_str(), pos))
            .collect()
    }

    /// Total absolute positional displacement between two permutations.
    ///
    /// Sums `|pos_self(id) - pos_other(id)|` over every id of `self`. Ids
    /// missing from `other` contribute nothing.
    pub fn displacement(&self, other: &Permutation) -> usize {
        let other_pos = other.positions();
        self.0
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| other_pos.get(id.as_str()).map(|&o| pos.abs_diff(o)))
            .sum()
    }

    /// True when every component is present and each of its prerequisites
    /// appears strictly earlier.
    pub fn respects(&self, components: &[Component]) -> bool {
        let pos = self.positions();
        components.iter().all(|component| {
            let Some(&at) = pos.get(component.id.as_str()) else {
                return false;
            };
            component
                .prerequisites
                .iter()
                .all(|p| pos.get(p.as_str()).is_some_and(|&before| before < at))
        })
    }

    /// Lowercase hex SHA-256 over the ids, each prefixed with its byte
    /// length so `["A B", "C"]` and `["A", "B C"]` differ.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for id in &self.0 {
            hasher.update((id.len() as u64).to_le_bytes());
            hasher.update(id.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl FromStr for Permutation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_wire(s))
    }
}

impl From<Vec<String>> for Permutation {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl Serialize for Permutation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permutation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Joined(String),
            Ids(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Joined(s) => Self::from_wire(&s),
            Repr::Ids(ids) => Self(ids),
        })
    }
}
