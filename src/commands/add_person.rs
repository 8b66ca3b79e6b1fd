use anyhow::Result;
use log::info;

use crate::commands::{Command, CommandResult};
use crate::person::Person;
use crate::state::ContactBook;

/// Adds a person to the contact book, rejecting duplicates (same name plus
/// a matching phone or email).
#[derive(Debug)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Command for AddPersonCommand {
    fn execute(&self, book: &mut ContactBook) -> Result<CommandResult> {
        let person = self.person.clone();
        let name = person.name().to_string();
        book.add_person(person)?;
        info!("Added person '{}'", name);
        Ok(CommandResult::new(format!("New person added: {}", self.person)))
    }
}
