use anyhow::Result;
use log::{debug, info};
use std::collections::BTreeSet;

use crate::commands::{resolve_person, Command, CommandError, CommandResult, Index};
use crate::person::Person;
use crate::state::{BookError, ContactBook};
use crate::tag::{Interest, Tag};

/// The fields of a person edit; every field is optional, absent fields keep
/// their current value.
#[derive(Debug, Clone, Default)]
pub struct EditPersonDescriptor {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub remark: Option<String>,
    pub tags: Option<BTreeSet<Tag>>,
    pub interests: Option<BTreeSet<Interest>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.remark.is_some()
            || self.tags.is_some()
            || self.interests.is_some()
    }
}

/// Edits the person at the given display index, rebuilding them from the
/// descriptor and replacing them under the same id.
#[derive(Debug)]
pub struct EditPersonCommand {
    target: Index,
    descriptor: EditPersonDescriptor,
}

impl EditPersonCommand {
    pub fn new(target: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { target, descriptor }
    }

    fn build_edited(&self, current: &Person) -> Result<Person> {
        let d = &self.descriptor;
        let mut edited = Person::new(
            d.name.clone().unwrap_or_else(|| current.name().to_string()),
            d.phone.clone().unwrap_or_else(|| current.phone().to_string()),
            d.email.clone().unwrap_or_else(|| current.email().to_string()),
        )?
        .with_address(d.address.clone().unwrap_or_else(|| current.address().to_string()))
        .with_tags(d.tags.clone().unwrap_or_else(|| current.tags().clone()))
        .with_interests(d.interests.clone().unwrap_or_else(|| current.interests().clone()));
        if let Some(remark) = d.remark.clone().or_else(|| current.remark().map(String::from)) {
            edited = edited.with_remark(remark);
        }
        Ok(edited)
    }
}

impl Command for EditPersonCommand {
    fn execute(&self, book: &mut ContactBook) -> Result<CommandResult> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NothingToEdit.into());
        }
        debug!("Editing person at index {} with {:?}", self.target, self.descriptor);

        let id = resolve_person(book, self.target)?;
        let current = book.person(id).ok_or(BookError::UnknownPerson(id))?;
        let edited = self.build_edited(current)?;

        // The edit must not collide with anyone else in the book.
        if book.persons().iter().any(|other| other.id() != id && other.is_same_person(&edited)) {
            return Err(BookError::DuplicatePerson.into());
        }

        let message = format!("Edited person: {}", edited);
        book.set_person(id, edited)?;
        info!("Edited person {}", id);
        Ok(CommandResult::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_book() -> ContactBook {
        let mut book = ContactBook::new();
        book.add_person(Person::new("Alice Pauline", "94351253", "alice@example.com").unwrap())
            .unwrap();
        book.add_person(Person::new("Bob Choo", "98765432", "bob@example.com").unwrap()).unwrap();
        book
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn edits_the_named_fields_and_keeps_the_rest() -> Result<()> {
        let mut book = sample_book();
        let descriptor = EditPersonDescriptor {
            phone: Some("91234567".to_string()),
            ..Default::default()
        };
        EditPersonCommand::new(first(), descriptor).execute(&mut book)?;

        let alice = &book.persons()[0];
        assert_eq!(alice.phone(), "91234567");
        assert_eq!(alice.name(), "Alice Pauline");
        assert_eq!(alice.email(), "alice@example.com");
        Ok(())
    }

    #[test]
    fn rejects_an_empty_descriptor_before_resolving_the_index() {
        let mut book = ContactBook::new();
        // Out-of-bounds index, but the empty descriptor is reported first.
        let err = EditPersonCommand::new(first(), EditPersonDescriptor::default())
            .execute(&mut book)
            .unwrap_err();
        assert_eq!(err.downcast_ref::<CommandError>(), Some(&CommandError::NothingToEdit));
    }

    #[test]
    fn rejects_an_edit_that_collides_with_another_person() {
        let mut book = sample_book();
        let descriptor = EditPersonDescriptor {
            name: Some("Bob Choo".to_string()),
            phone: Some("98765432".to_string()),
            ..Default::default()
        };
        let err = EditPersonCommand::new(first(), descriptor).execute(&mut book).unwrap_err();
        assert_eq!(err.downcast_ref::<BookError>(), Some(&BookError::DuplicatePerson));
        assert_eq!(book.persons()[0].name(), "Alice Pauline");
    }

    #[test]
    fn editing_back_to_the_same_identity_is_allowed() -> Result<()> {
        let mut book = sample_book();
        let descriptor = EditPersonDescriptor {
            address: Some("Jurong West".to_string()),
            ..Default::default()
        };
        EditPersonCommand::new(first(), descriptor).execute(&mut book)?;
        assert_eq!(book.persons()[0].address(), "Jurong West");
        Ok(())
    }

    #[test]
    fn rejects_an_out_of_bounds_index() {
        let mut book = sample_book();
        let descriptor =
            EditPersonDescriptor { name: Some("Carl".to_string()), ..Default::default() };
        let err = EditPersonCommand::new(Index::from_one_based(3).unwrap(), descriptor)
            .execute(&mut book)
            .unwrap_err();
        assert_eq!(err.downcast_ref::<CommandError>(), Some(&CommandError::InvalidPersonIndex(3)));
    }
}
