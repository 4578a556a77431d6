//! Combinations of parts and how they render as shell aliases

use std::collections::HashSet;
use std::fmt;

use crate::parts::part::Part;

/// An ordered selection of parts, at most one per stage.
///
/// Every branch of the traversal owns its own combination, extending it with
/// [`Combination::with`] produces a new value and leaves the prefix untouched.
#[derive(Debug, Clone, Default)]
pub struct Combination<'a> {
    parts: Vec<&'a Part>,
    aliases: HashSet<&'a str>,
}

impl<'a> Combination<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this combination with `part` appended
    #[must_use]
    pub fn with(&self, part: &'a Part) -> Self {
        let mut next = self.clone();
        next.parts.push(part);
        next.aliases.insert(part.alias.as_str());
        next
    }

    #[must_use]
    pub fn parts(&self) -> &[&'a Part] {
        &self.parts
    }

    /// Whether a part with this alias has been chosen
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains(alias)
    }

    /// Whether `candidate` may be appended.
    ///
    /// Rejected if any chosen part lists the candidate's alias as incompatible,
    /// or if the candidate has an allow-list and none of it is present yet.
    #[must_use]
    pub fn accepts(&self, candidate: &Part) -> bool {
        if self.parts.iter().any(|part| part.blocks(&candidate.alias)) {
            return false;
        }
        candidate.allow_when_one_of.is_empty()
            || candidate
                .allow_when_one_of
                .iter()
                .any(|alias| self.contains(alias))
    }

    /// Concatenated aliases, eg. `kgpo`
    #[must_use]
    pub fn alias_name(&self) -> String {
        self.parts.iter().map(|p| p.alias.as_str()).collect()
    }

    /// Expanded command text, eg. `kubectl get pods`
    #[must_use]
    pub fn expansion(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.full.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

impl fmt::Display for Combination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alias {}='{}'", self.alias_name(), self.expansion())
    }
}
