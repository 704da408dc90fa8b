// src/application/note_creator.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft};
use tracing::info;

pub struct NoteCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a note and return it with its server-assigned `id` and `created_at`
    pub fn create_note(&mut self, mut draft: NoteDraft) -> Result<Note, DomainError> {
        draft.note = draft.note.trim().to_string();
        if draft.note.is_empty() {
            return Err(DomainError::InvalidPayload("note body is empty".to_string()));
        }

        let created = self.repository.create_note(draft)?.content;
        info!(note_id = %created.id, root_id = %created.root_id, "Created note");
        Ok(created)
    }
}
