use anyhow::Result;
use chrono::NaiveDateTime;
use log::{debug, info};

use crate::commands::{resolve_person, Command, CommandError, CommandResult, Index};
use crate::person::PersonId;
use crate::schedule::Schedule;
use crate::state::ContactBook;

/// The fields of a schedule edit; every field is optional, absent fields
/// keep their current value. Participant edits are expressed either as
/// add/remove deltas or as a full replacement list, never both.
#[derive(Debug, Clone, Default)]
pub struct EditScheduleDescriptor {
    pub name: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub add_participants: Vec<Index>,
    pub remove_participants: Vec<Index>,
    pub set_participants: Option<Vec<Index>>,
}

impl EditScheduleDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.start.is_some()
            || self.end.is_some()
            || !self.add_participants.is_empty()
            || !self.remove_participants.is_empty()
            || self.set_participants.is_some()
    }

    fn has_conflicting_participant_edits(&self) -> bool {
        self.set_participants.is_some()
            && (!self.add_participants.is_empty() || !self.remove_participants.is_empty())
    }
}

/// Edits one schedule of one person: the first index picks the person from
/// the filtered person list, the second picks the entry from that person's
/// own schedule list.
///
/// The edit is visible to every other participant of the schedule, since
/// all of them share the one entry.
#[derive(Debug)]
pub struct EditScheduleCommand {
    person: Index,
    schedule: Index,
    descriptor: EditScheduleDescriptor,
}

impl EditScheduleCommand {
    pub fn new(person: Index, schedule: Index, descriptor: EditScheduleDescriptor) -> Self {
        Self { person, schedule, descriptor }
    }
}

impl Command for EditScheduleCommand {
    fn execute(&self, book: &mut ContactBook) -> Result<CommandResult> {
        let d = &self.descriptor;
        // Both descriptor checks come before any index resolution or
        // mutation, so a bad request leaves the book untouched.
        if !d.is_any_field_edited() {
            return Err(CommandError::NothingToEdit.into());
        }
        if d.has_conflicting_participant_edits() {
            return Err(CommandError::ConflictingParticipantEdits.into());
        }
        debug!("Editing schedule {} of person {} with {:?}", self.schedule, self.person, d);

        let owner = resolve_person(book, self.person)?;
        let (id, current_name, current_start, current_end) = book
            .schedules_of(owner)
            .get(self.schedule.zero_based())
            .map(|schedule| (schedule.id(), schedule.name().to_string(), schedule.start(), schedule.end()))
            .ok_or(CommandError::InvalidScheduleIndex(self.schedule.one_based()))?;

        // Resolve every participant index up front; the names drive the
        // removals, the ids drive the links.
        let to_add = resolve_all(book, &d.add_participants)?;
        let to_remove = resolve_all(book, &d.remove_participants)?;
        let replacement = match &d.set_participants {
            Some(indexes) => Some(resolve_all(book, indexes)?),
            None => None,
        };

        let edited = Schedule::new(
            d.name.clone().unwrap_or(current_name),
            d.start.unwrap_or(current_start),
            d.end.unwrap_or(current_end),
        )?;
        let message = format!("Edited schedule: {}", edited);
        book.set_schedule(id, edited)?;

        if let Some(replacement) = replacement {
            let ids: Vec<_> = replacement.iter().map(|(id, _)| *id).collect();
            book.set_participants(id, &ids)?;
        }
        for (person, _) in to_add {
            book.link(id, person)?;
        }
        for (_, name) in to_remove {
            book.unlink_by_name(id, &name);
        }

        info!("Edited schedule {}", id);
        Ok(CommandResult::new(message))
    }
}

fn resolve_all(
    book: &ContactBook,
    indexes: &[Index],
) -> Result<Vec<(PersonId, String)>, CommandError> {
    let filtered = book.filtered_persons();
    indexes
        .iter()
        .map(|&index| {
            filtered
                .get(index.zero_based())
                .map(|person| (person.id(), person.name().to_string()))
                .ok_or(CommandError::InvalidPersonIndex(index.one_based()))
        })
        .collect()
}
