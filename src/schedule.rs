use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::validation::{validate_schedule_name, DATETIME_FORMAT};

/// Stable surrogate key for a schedule, assigned once at creation and kept
/// across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScheduleId(Uuid);

impl ScheduleId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule names must be non-empty and alphanumeric, got '{0}'")]
    InvalidName(String),
    #[error("schedule start time {start} must precede end time {end}")]
    InvalidTiming { start: NaiveDateTime, end: NaiveDateTime },
}

/// A named, time-bounded entry in the book.
///
/// The name is non-empty alphanumeric and the start time strictly precedes
/// the end time; construction rejects anything else. Participants are not
/// stored here — the book owns the person↔schedule relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub(crate) id: ScheduleId,
    name: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Schedule {
    pub fn new(
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, ScheduleError> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(ScheduleError::InvalidName(name));
        }
        if !Self::is_valid_timing(start, end) {
            return Err(ScheduleError::InvalidTiming { start, end });
        }
        Ok(Self { id: ScheduleId::generate(), name, start, end })
    }

    /// Returns true if the given string is a valid schedule name.
    pub fn is_valid_name(name: &str) -> bool {
        validate_schedule_name(name)
    }

    /// Returns true if the start time strictly precedes the end time.
    pub fn is_valid_timing(start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < end
    }

    pub fn id(&self) -> ScheduleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Identity comparison over name and timings only, ignoring the
    /// surrogate id. Two separately created entries for the same meeting
    /// count as the same schedule.
    pub fn is_same_schedule(&self, other: &Schedule) -> bool {
        self.name == other.name && self.start == other.start && self.end == other.end
    }
}

/// Structural equality over name and timings; the surrogate id does not
/// participate.
impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_schedule(other)
    }
}

impl Eq for Schedule {}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} start {} end {}",
            self.name,
            self.start.format(DATETIME_FORMAT),
            self.end.format(DATETIME_FORMAT)
        )
    }
}
