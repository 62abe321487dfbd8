//! Journaling of readings, interpretations and notes within a session.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
