//! Journal entry types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use mh_core::HexagramResult;

use crate::interpret::InterpretationSource;

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A completed casting.
    Reading {
        /// 1-based reading number within the session.
        number: usize,
        /// The derived result.
        result: Box<HexagramResult>,
        /// When the reading was cast.
        timestamp: NaiveDateTime,
    },
    /// An interpretation attached to a reading.
    Interpretation {
        /// Reading the interpretation belongs to.
        reading: usize,
        /// The interpretation text.
        text: String,
        /// Generated or fallback.
        source: InterpretationSource,
        /// When it was attached.
        timestamp: NaiveDateTime,
    },
    /// A user note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: NaiveDateTime,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> NaiveDateTime {
        match self {
            Self::Reading { timestamp, .. }
            | Self::Interpretation { timestamp, .. }
            | Self::Note { timestamp, .. } => *timestamp,
        }
    }
}
