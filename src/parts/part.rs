/// A single token of a shorthand command, eg. `g` for `get` or `po` for `pods`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Part {
    pub alias: String,
    pub full: String,
    /// If non-empty, one of these aliases must already be present before this part can be added
    pub allow_when_one_of: Vec<String>,
    /// Aliases that may not be added after this part
    pub incompatible_with: Vec<String>,
}

impl Part {
    #[must_use]
    pub fn new(alias: impl Into<String>, full: impl Into<String>) -> Self {
        Part {
            alias: alias.into(),
            full: full.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn allow_when_one_of<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_when_one_of = aliases.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn incompatible_with<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.incompatible_with = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this part blocks a later part with the given alias
    #[must_use]
    pub fn blocks(&self, alias: &str) -> bool {
        self.incompatible_with.iter().any(|a| a == alias)
    }
}
