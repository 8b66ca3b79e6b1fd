use log::{debug, warn};

use crate::person::{Person, PersonId};
use crate::schedule::{Schedule, ScheduleId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookError {
    #[error("This person already exists in the contact book")]
    DuplicatePerson,
    #[error("This schedule already exists in the contact book")]
    DuplicateSchedule,
    #[error("No person with id {0} in the contact book")]
    UnknownPerson(PersonId),
    #[error("No schedule with id {0} in the contact book")]
    UnknownSchedule(ScheduleId),
}

/// One participant edge: the person takes part in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    schedule: ScheduleId,
    person: PersonId,
}

/// The in-memory contact book: the person list, the schedule list, and the
/// participant relation between them.
///
/// The many-to-many person↔schedule relation is a single ordered edge list
/// owned here, so removing a person or a schedule updates both sides of the
/// relation in one mutation. Access is sequential and externally
/// synchronized: callers hold `&mut` and run one operation to completion
/// before the next.
///
/// Commands resolve one-based display indexes against the filtered views,
/// which narrow each list by an optional case-insensitive name keyword.
#[derive(Debug, Default)]
pub struct ContactBook {
    persons: Vec<Person>,
    schedules: Vec<Schedule>,
    links: Vec<Link>,
    person_filter: Option<String>,
    schedule_filter: Option<String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- persons ----

    /// Adds a person, rejecting anyone the book already considers the same
    /// person (same name plus a matching contact channel).
    pub fn add_person(&mut self, person: Person) -> Result<PersonId, BookError> {
        if self.persons.iter().any(|existing| existing.is_same_person(&person)) {
            return Err(BookError::DuplicatePerson);
        }
        let id = person.id();
        debug!("Adding person '{}' ({})", person.name(), id);
        self.persons.push(person);
        Ok(id)
    }

    /// Removes a person together with every participant edge referencing
    /// them, so no schedule keeps a dangling participant.
    pub fn remove_person(&mut self, id: PersonId) -> Result<Person, BookError> {
        let position = self
            .persons
            .iter()
            .position(|person| person.id() == id)
            .ok_or(BookError::UnknownPerson(id))?;
        self.links.retain(|link| link.person != id);
        Ok(self.persons.remove(position))
    }

    /// Replaces a person's fields while preserving their id, so existing
    /// participant edges keep pointing at them.
    pub fn set_person(&mut self, id: PersonId, mut person: Person) -> Result<(), BookError> {
        let slot = self
            .persons
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(BookError::UnknownPerson(id))?;
        person.id = id;
        *slot = person;
        Ok(())
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| person.id() == id)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// The currently displayed view of the person list, narrowed by the
    /// person filter when one is set.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        match &self.person_filter {
            None => self.persons.iter().collect(),
            Some(keyword) => {
                let keyword = keyword.to_lowercase();
                self.persons
                    .iter()
                    .filter(|person| person.name().to_lowercase().contains(&keyword))
                    .collect()
            }
        }
    }

    pub fn set_person_filter(&mut self, keyword: Option<String>) {
        self.person_filter = keyword;
    }

    // ---- schedules ----

    /// Adds a schedule, rejecting an entry for the same meeting (same name
    /// and timings).
    pub fn add_schedule(&mut self, schedule: Schedule) -> Result<ScheduleId, BookError> {
        if self.schedules.iter().any(|existing| existing.is_same_schedule(&schedule)) {
            return Err(BookError::DuplicateSchedule);
        }
        let id = schedule.id();
        debug!("Adding schedule '{}' ({})", schedule.name(), id);
        self.schedules.push(schedule);
        Ok(id)
    }

    /// Removes a schedule together with every participant edge referencing
    /// it, so it also disappears from each participant's schedule view.
    pub fn remove_schedule(&mut self, id: ScheduleId) -> Result<Schedule, BookError> {
        let position = self
            .schedules
            .iter()
            .position(|schedule| schedule.id() == id)
            .ok_or(BookError::UnknownSchedule(id))?;
        self.links.retain(|link| link.schedule != id);
        Ok(self.schedules.remove(position))
    }

    /// Replaces a schedule's fields while preserving its id, so existing
    /// participant edges keep pointing at it.
    pub fn set_schedule(&mut self, id: ScheduleId, mut schedule: Schedule) -> Result<(), BookError> {
        let slot = self
            .schedules
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(BookError::UnknownSchedule(id))?;
        schedule.id = id;
        *slot = schedule;
        Ok(())
    }

    pub fn schedule(&self, id: ScheduleId) -> Option<&Schedule> {
        self.schedules.iter().find(|schedule| schedule.id() == id)
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// The currently displayed view of the schedule list, narrowed by the
    /// schedule filter when one is set.
    pub fn filtered_schedules(&self) -> Vec<&Schedule> {
        match &self.schedule_filter {
            None => self.schedules.iter().collect(),
            Some(keyword) => {
                let keyword = keyword.to_lowercase();
                self.schedules
                    .iter()
                    .filter(|schedule| schedule.name().to_lowercase().contains(&keyword))
                    .collect()
            }
        }
    }

    pub fn set_schedule_filter(&mut self, keyword: Option<String>) {
        self.schedule_filter = keyword;
    }

    // ---- participant relation ----

    /// Records that the person takes part in the schedule. Re-linking an
    /// existing participant is a no-op.
    pub fn link(&mut self, schedule: ScheduleId, person: PersonId) -> Result<(), BookError> {
        if self.schedule(schedule).is_none() {
            return Err(BookError::UnknownSchedule(schedule));
        }
        if self.person(person).is_none() {
            return Err(BookError::UnknownPerson(person));
        }
        let edge = Link { schedule, person };
        if !self.links.contains(&edge) {
            self.links.push(edge);
        }
        Ok(())
    }

    /// Drops the participant edge if present; returns whether one was
    /// removed.
    pub fn unlink(&mut self, schedule: ScheduleId, person: PersonId) -> bool {
        let before = self.links.len();
        self.links.retain(|link| !(link.schedule == schedule && link.person == person));
        self.links.len() != before
    }

    /// Removes the first participant of the schedule whose display name
    /// matches `name`. A missing match is absorbed, but never silently.
    pub fn unlink_by_name(&mut self, schedule: ScheduleId, name: &str) {
        let found = self
            .participants_of(schedule)
            .into_iter()
            .find(|person| person.name() == name)
            .map(Person::id);
        match found {
            Some(person) => {
                self.unlink(schedule, person);
            }
            None => {
                warn!("No participant named '{}' in schedule {}", name, schedule);
            }
        }
    }

    /// Replaces the schedule's participant list wholesale, in the given
    /// order.
    pub fn set_participants(
        &mut self,
        schedule: ScheduleId,
        persons: &[PersonId],
    ) -> Result<(), BookError> {
        self.links.retain(|link| link.schedule != schedule);
        for &person in persons {
            self.link(schedule, person)?;
        }
        Ok(())
    }

    /// The schedule's participants, in the order they were linked.
    pub fn participants_of(&self, schedule: ScheduleId) -> Vec<&Person> {
        self.links
            .iter()
            .filter(|link| link.schedule == schedule)
            .filter_map(|link| self.person(link.person))
            .collect()
    }

    /// The person's own schedule list, in the order they were linked.
    pub fn schedules_of(&self, person: PersonId) -> Vec<&Schedule> {
        self.links
            .iter()
            .filter(|link| link.person == person)
            .filter_map(|link| self.schedule(link.schedule))
            .collect()
    }
}
