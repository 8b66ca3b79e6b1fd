use serde::{Deserialize, Serialize};
use std::fmt;

/// A label attached to a person, e.g. `[friend]` or `[colleague]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// An interest is a tag rendered with brace delimiters, e.g. `{hiking}`.
/// Equality is name-based, exactly as for a plain tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interest {
    tag: Tag,
}

impl Interest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { tag: Tag::new(name) }
    }

    pub fn name(&self) -> &str {
        self.tag.name()
    }

    pub fn as_tag(&self) -> &Tag {
        &self.tag
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.tag.name())
    }
}
