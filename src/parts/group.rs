use crate::parts::part::Part;

/// Ordered list of parts making up one traversal stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub parts: Vec<Part>,
}

impl Group {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    /// Aliases of every part in declaration order
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.alias.as_str())
    }
}

impl From<Vec<Part>> for Group {
    fn from(parts: Vec<Part>) -> Self {
        Group { parts }
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
