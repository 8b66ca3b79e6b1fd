use anyhow::Result;
use log::info;

use crate::commands::{resolve_person, Command, CommandResult, Index};
use crate::state::ContactBook;

/// Deletes the person at the given display index. Every schedule they took
/// part in loses them as a participant in the same operation.
#[derive(Debug)]
pub struct DeletePersonCommand {
    target: Index,
}

impl DeletePersonCommand {
    pub fn new(target: Index) -> Self {
        Self { target }
    }
}

impl Command for DeletePersonCommand {
    fn execute(&self, book: &mut ContactBook) -> Result<CommandResult> {
        let id = resolve_person(book, self.target)?;
        let removed = book.remove_person(id)?;
        info!("Deleted person '{}'", removed.name());
        Ok(CommandResult::new(format!("Deleted person: {}", removed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use crate::person::Person;
    use crate::schedule::Schedule;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_book() -> ContactBook {
        let mut book = ContactBook::new();
        let alice = book
            .add_person(Person::new("Alice Pauline", "94351253", "alice@example.com").unwrap())
            .unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(11, 0, 0).unwrap();
        let meeting = book.add_schedule(Schedule::new("Meeting", start, end).unwrap()).unwrap();
        book.link(meeting, alice).unwrap();
        book
    }

    #[test]
    fn deletes_person_and_their_participant_links() -> Result<()> {
        let mut book = sample_book();
        let meeting = book.schedules()[0].id();

        let result =
            DeletePersonCommand::new(Index::from_one_based(1).unwrap()).execute(&mut book)?;
        assert!(result.message.starts_with("Deleted person: Alice Pauline"));
        assert!(book.persons().is_empty());
        assert!(book.participants_of(meeting).is_empty());
        Ok(())
    }

    #[test]
    fn rejects_an_out_of_bounds_index() {
        let mut book = sample_book();
        let err =
            DeletePersonCommand::new(Index::from_one_based(2).unwrap()).execute(&mut book).unwrap_err();
        assert_eq!(err.downcast_ref::<CommandError>(), Some(&CommandError::InvalidPersonIndex(2)));
        assert_eq!(book.persons().len(), 1);
    }

    #[test]
    fn resolves_the_index_against_the_filtered_view() -> Result<()> {
        let mut book = sample_book();
        book.add_person(Person::new("Bob Choo", "98765432", "bob@example.com").unwrap()).unwrap();
        book.set_person_filter(Some("bob".to_string()));

        DeletePersonCommand::new(Index::from_one_based(1).unwrap()).execute(&mut book)?;
        let names: Vec<&str> = book.persons().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alice Pauline"]);
        Ok(())
    }
}
