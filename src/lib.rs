pub mod commands;
pub mod config;
pub mod person;
pub mod schedule;
pub mod state;
pub mod tag;
pub mod validation;

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use commands::{Command, CommandError, CommandResult, Index};
pub use config::Config;
pub use person::{Person, PersonId};
pub use schedule::{Schedule, ScheduleId};
pub use state::{BookError, ContactBook};
pub use tag::{Interest, Tag};
