use anyhow::Result;
use log::info;

use crate::commands::{Command, CommandError, CommandResult, Index};
use crate::state::ContactBook;

/// Deletes the schedule at the given display index.
///
/// Removing the entry from the book also removes it from every
/// participant's own schedule list; the two sides of the relation cannot
/// drift apart.
#[derive(Debug)]
pub struct DeleteScheduleCommand {
    target: Index,
}

impl DeleteScheduleCommand {
    pub fn new(target: Index) -> Self {
        Self { target }
    }
}

impl Command for DeleteScheduleCommand {
    fn execute(&self, book: &mut ContactBook) -> Result<CommandResult> {
        let id = book
            .filtered_schedules()
            .get(self.target.zero_based())
            .map(|schedule| schedule.id())
            .ok_or(CommandError::InvalidScheduleIndex(self.target.one_based()))?;
        let removed = book.remove_schedule(id)?;
        info!("Deleted schedule '{}'", removed.name());
        Ok(CommandResult::new(format!("The schedule deleted: {}", removed)))
    }
}
