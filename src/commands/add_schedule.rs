use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use log::info;

use crate::commands::{resolve_person, Command, CommandResult, Index};
use crate::config::Config;
use crate::schedule::Schedule;
use crate::state::ContactBook;

/// Adds a schedule to the contact book and links the given participants.
///
/// When no end time is given, the entry runs for the configured default
/// duration. Participant indexes resolve against the filtered person list.
#[derive(Debug)]
pub struct AddScheduleCommand {
    name: String,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    participants: Vec<Index>,
}

impl AddScheduleCommand {
    pub fn new(
        name: impl Into<String>,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        participants: Vec<Index>,
    ) -> Self {
        Self { name: name.into(), start, end, participants }
    }
}

impl Command for AddScheduleCommand {
    fn execute(&self, book: &mut ContactBook) -> Result<CommandResult> {
        let end = match self.end {
            Some(end) => end,
            None => {
                let config = Config::load()?;
                let minutes = config.schedule.default_duration_minutes.unwrap_or(60);
                self.start + Duration::minutes(minutes)
            }
        };

        // Resolve every participant before mutating anything.
        let participants = self
            .participants
            .iter()
            .map(|&index| resolve_person(book, index))
            .collect::<Result<Vec<_>, _>>()?;

        let schedule = Schedule::new(self.name.clone(), self.start, end)?;
        let message = format!("New schedule added: {}", schedule);
        let id = book.add_schedule(schedule)?;
        for person in participants {
            book.link(id, person)?;
        }
        info!("Added schedule '{}' with {} participant(s)", self.name, self.participants.len());
        Ok(CommandResult::new(message))
    }
}
