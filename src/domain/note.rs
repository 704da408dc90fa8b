// src/domain/note.rs
use crate::domain::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored annotation on a run.
///
/// The author is not embedded: `author_id` is the key into the author list
/// that accompanies notes in a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub author_id: String,
    pub note: String,
    pub root_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A note as submitted for creation, before the server assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub author_id: String,
    pub note: String,
    pub root_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl NoteDraft {
    pub fn into_note(self, id: String, created_at: DateTime<Utc>) -> Note {
        Note {
            id,
            author_id: self.author_id,
            note: self.note,
            root_id: self.root_id,
            run_id: self.run_id,
            created_at,
            updated_at: None,
        }
    }
}
