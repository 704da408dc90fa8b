// src/ports/note_view.rs
use crate::domain::{Note, Run, User};
use crate::util::text::{initials, short_id};
use crate::util::time::TimeAgo;
use serde::Serialize;

/// Run identifier shown under a note, highlighted when the note belongs to
/// the root run being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunBadge {
    pub text: String,
    pub emphasized: bool,
}

impl RunBadge {
    pub fn new(note: &Note, root_run: &Run) -> Self {
        Self {
            text: short_id(&note.root_id).to_string(),
            emphasized: note.root_id == root_run.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Avatar {
    Image(String),
    Initials(String),
}

impl Avatar {
    pub fn for_user(user: &User) -> Self {
        if let Some(url) = user.avatar_url.as_deref().filter(|url| !url.trim().is_empty()) {
            return Avatar::Image(url.to_string());
        }
        let from_name = initials(&user.first_name, user.last_name.as_deref());
        if !from_name.is_empty() {
            return Avatar::Initials(from_name);
        }
        Avatar::Initials(initials(&user.email, None))
    }
}

/// Read-only visual record of one note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub key: String,
    pub avatar: Avatar,
    pub author_name: String,
    pub body: String,
    pub time_ago: String,
    pub badge: RunBadge,
}

impl NoteView {
    pub fn new(note: &Note, author: &User, root_run: &Run, clock: &dyn TimeAgo) -> Self {
        Self {
            key: note.id.clone(),
            avatar: Avatar::for_user(author),
            author_name: author.display_name().to_string(),
            body: note.note.clone(),
            time_ago: clock.time_ago(note.created_at),
            badge: RunBadge::new(note, root_run),
        }
    }
}
