use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

use crate::tag::{Interest, Tag};
use crate::validation::validate_required_field;

/// Stable surrogate key for a person, assigned once at creation and kept
/// across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(Uuid);

impl PersonId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PersonError {
    #[error("person {0} must not be empty")]
    EmptyField(&'static str),
}

/// A contact entry: identity fields, contact details, and labels.
///
/// Name, phone and email are required and non-empty; phone and email are
/// assumed to be format-validated by the caller. A person is immutable once
/// constructed; edits build a replacement and swap it into the book under
/// the same [`PersonId`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub(crate) id: PersonId,
    name: String,
    phone: String,
    email: String,
    address: String,
    remark: Option<String>,
    tags: BTreeSet<Tag>,
    interests: BTreeSet<Interest>,
}

impl Person {
    /// Creates a person with the required fields; address defaults to empty
    /// and remark to none.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, PersonError> {
        let name = name.into();
        let phone = phone.into();
        let email = email.into();
        if !validate_required_field(&name) {
            return Err(PersonError::EmptyField("name"));
        }
        if !validate_required_field(&phone) {
            return Err(PersonError::EmptyField("phone"));
        }
        if !validate_required_field(&email) {
            return Err(PersonError::EmptyField("email"));
        }
        Ok(Self {
            id: PersonId::generate(),
            name,
            phone,
            email,
            address: String::new(),
            remark: None,
            tags: BTreeSet::new(),
            interests: BTreeSet::new(),
        })
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_interests(mut self, interests: BTreeSet<Interest>) -> Self {
        self.interests = interests;
        self
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn interests(&self) -> &BTreeSet<Interest> {
        &self.interests
    }

    /// Combined view of tags and interests; a tag and an interest sharing a
    /// name collapse into one entry.
    pub fn all_tags(&self) -> BTreeSet<&Tag> {
        self.tags
            .iter()
            .chain(self.interests.iter().map(Interest::as_tag))
            .collect()
    }

    /// Weaker notion of identity than full equality: same name and at least
    /// one matching contact channel. Used for de-duplication.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && (self.phone == other.phone || self.email == other.email)
    }
}

/// Structural equality over identity and data fields. The surrogate id,
/// remark and interests do not participate.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.tags == other.tags
    }
}

impl Eq for Person {}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Phone: {}; Email: {}", self.name, self.phone, self.email)?;
        if !self.address.is_empty() {
            write!(f, "; Address: {}", self.address)?;
        }
        if let Some(remark) = &self.remark {
            write!(f, "; Remark: {}", remark)?;
        }
        for tag in &self.tags {
            write!(f, " {}", tag)?;
        }
        for interest in &self.interests {
            write!(f, " {}", interest)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn alice() -> Person {
        Person::new("Alice Pauline", "94351253", "alice@example.com").unwrap()
    }

    #[test]
    fn new_rejects_empty_required_fields() {
        assert_eq!(
            Person::new("", "94351253", "alice@example.com"),
            Err(PersonError::EmptyField("name"))
        );
        assert_eq!(
            Person::new("Alice", "  ", "alice@example.com"),
            Err(PersonError::EmptyField("phone"))
        );
        assert_eq!(Person::new("Alice", "94351253", ""), Err(PersonError::EmptyField("email")));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let person = alice();
        assert_eq!(person.address(), "");
        assert_eq!(person.remark(), None);
        assert!(person.tags().is_empty());
        assert!(person.interests().is_empty());
    }

    #[test]
    fn all_tags_merges_tags_and_interests() {
        let person = alice()
            .with_tags([Tag::new("friend"), Tag::new("chess")].into())
            .with_interests([Interest::new("chess"), Interest::new("hiking")].into());
        let combined: Vec<&str> = person.all_tags().iter().map(|t| t.name()).collect();
        assert_eq!(combined, vec!["chess", "friend", "hiking"]);
    }

    #[test_case("Alice", "94351253", "alice@example.com", true; "same phone and email")]
    #[test_case("Alice", "94351253", "other@example.com", true; "same phone only")]
    #[test_case("Alice", "00000000", "alice@example.com", true; "same email only")]
    #[test_case("Alice", "00000000", "other@example.com", false; "no matching channel")]
    #[test_case("Bob", "94351253", "alice@example.com", false; "different name")]
    fn is_same_person_matrix(name: &str, phone: &str, email: &str, expected: bool) {
        let base = Person::new("Alice", "94351253", "alice@example.com").unwrap();
        let other = Person::new(name, phone, email).unwrap();
        assert_eq!(base.is_same_person(&other), expected);
    }

    #[test]
    fn equality_ignores_id_and_remark() {
        let a = alice();
        let b = alice().with_remark("met at the library");
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn serialization_round_trips_with_the_id() {
        let person = alice().with_tags([Tag::new("friend")].into());
        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), person.id());
        assert_eq!(back, person);
    }

    #[test]
    fn equality_covers_address_and_tags() {
        let a = alice().with_tags([Tag::new("friend")].into());
        assert_ne!(a, alice());
        assert_ne!(alice().with_address("Jurong West"), alice());
    }
}
