use anyhow::Result;
use std::fmt;

use crate::person::PersonId;
use crate::state::ContactBook;

pub mod add_person;
pub mod add_schedule;
pub mod delete_person;
pub mod delete_schedule;
pub mod edit_person;
pub mod edit_schedule;

pub use add_person::AddPersonCommand;
pub use add_schedule::AddScheduleCommand;
pub use delete_person::DeletePersonCommand;
pub use delete_schedule::DeleteScheduleCommand;
pub use edit_person::{EditPersonCommand, EditPersonDescriptor};
pub use edit_schedule::{EditScheduleCommand, EditScheduleDescriptor};

/// Typed failures a command surfaces to its caller. Terminal for the
/// invocation; the user is expected to reissue a corrected command.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("The person index provided is invalid: {0}")]
    InvalidPersonIndex(usize),
    #[error("The schedule index provided is invalid: {0}")]
    InvalidScheduleIndex(usize),
    #[error("At least one field to edit must be provided")]
    NothingToEdit,
    #[error("Participants may either be replaced or added/removed, not both")]
    ConflictingParticipantEdits,
}

/// One-based display index into a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    /// Builds an index from the one-based value shown to the user; zero is
    /// not a valid display position.
    pub fn from_one_based(value: usize) -> Option<Self> {
        value.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.one_based().fmt(f)
    }
}

/// Outcome of a successful command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
}

impl CommandResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// A fully parsed operation against the contact book. Execution is
/// synchronous and runs to completion before returning.
pub trait Command {
    fn execute(&self, book: &mut ContactBook) -> Result<CommandResult>;
}

/// Resolves a one-based display index against the filtered person list,
/// returning the person's id.
pub(crate) fn resolve_person(book: &ContactBook, index: Index) -> Result<PersonId, CommandError> {
    book.filtered_persons()
        .get(index.zero_based())
        .map(|person| person.id())
        .ok_or(CommandError::InvalidPersonIndex(index.one_based()))
}
