// src/application/note_feed.rs
use crate::domain::{DomainError, NoteDraft, Run};
use crate::payloads::{NoteCreatePayload, NoteListPayload};
use crate::ports::NoteView;
use crate::util::time::TimeAgo;
use tracing::debug;

pub trait NoteRepository {
    /// Notes attached to `root_id` together with their authors, or every note when `None`
    fn list_notes(&mut self, root_id: Option<&str>) -> Result<NoteListPayload, DomainError>;

    /// Store a new note; the repository assigns `id` and `created_at`
    fn create_note(&mut self, draft: NoteDraft) -> Result<NoteCreatePayload, DomainError>;
}

pub struct NoteFeed<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteFeed<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Build the note views shown next to `root_run`, oldest first.
    ///
    /// # Arguments
    /// * `root_run` - Run being viewed, anchors badge emphasis
    /// * `only_root` - Restrict to notes attached to `root_run`
    /// * `clock` - Relative time formatter
    pub fn feed(
        &mut self,
        root_run: &Run,
        only_root: bool,
        clock: &dyn TimeAgo,
    ) -> Result<Vec<NoteView>, DomainError> {
        let filter = only_root.then_some(root_run.id.as_str());
        let mut listing = self.repository.list_notes(filter)?;
        listing
            .content
            .sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        debug!(notes = listing.content.len(), authors = listing.authors.len(), "Loaded notes");

        let authors = listing.author_index();
        listing
            .content
            .iter()
            .map(|note| -> Result<NoteView, DomainError> {
                let author = authors.author_of(note)?;
                Ok(NoteView::new(note, author, root_run, clock))
            })
            .collect()
    }
}
