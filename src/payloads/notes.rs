// src/payloads/notes.rs
use crate::domain::{DomainError, Note, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Notes with their authors as a sibling list. Every `Note::author_id` is
/// expected to match the `id` of one entry in `authors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteListPayload {
    pub content: Vec<Note>,
    pub authors: Vec<User>,
}

impl NoteListPayload {
    pub fn author_index(&self) -> AuthorIndex<'_> {
        AuthorIndex::new(&self.authors)
    }

    /// Pair each note with its author, failing on the first unresolvable one
    pub fn resolve(&self) -> Result<Vec<(&Note, &User)>, DomainError> {
        let index = self.author_index();
        self.content
            .iter()
            .map(|note| index.author_of(note).map(|author| (note, author)))
            .collect()
    }

    /// Insert a freshly created note, adding its author if not yet listed
    pub fn push(&mut self, created: NoteCreatePayload, author: User) -> Result<(), DomainError> {
        if created.content.author_id != author.id {
            return Err(DomainError::UnknownAuthor(created.content.author_id));
        }
        if !self.authors.iter().any(|known| known.id == author.id) {
            self.authors.push(author);
        }
        self.content.push(created.content);
        Ok(())
    }

    /// Notes attached to a given root run, with the authors they reference
    pub fn for_root(&self, root_id: &str) -> NoteListPayload {
        let content: Vec<Note> = self
            .content
            .iter()
            .filter(|note| note.root_id == root_id)
            .cloned()
            .collect();
        let authors = self
            .authors
            .iter()
            .filter(|author| content.iter().any(|note| note.author_id == author.id))
            .cloned()
            .collect();
        NoteListPayload { content, authors }
    }
}

/// Author lookup built once per listing
#[derive(Debug, Clone)]
pub struct AuthorIndex<'a> {
    by_id: HashMap<&'a str, &'a User>,
}

impl<'a> AuthorIndex<'a> {
    pub fn new(authors: &'a [User]) -> Self {
        Self {
            by_id: authors.iter().map(|user| (user.id.as_str(), user)).collect(),
        }
    }

    pub fn get(&self, author_id: &str) -> Option<&'a User> {
        self.by_id.get(author_id).copied()
    }

    pub fn author_of(&self, note: &Note) -> Result<&'a User, DomainError> {
        self.get(&note.author_id)
            .ok_or_else(|| DomainError::UnknownAuthor(note.author_id.clone()))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteCreatePayload {
    pub content: Note,
}
