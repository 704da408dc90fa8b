// src/util/testing.rs

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteRepository, RunRepository};
use crate::domain::{DomainError, Note, NoteDraft, Run, User};
use crate::payloads::{NoteCreatePayload, NoteListPayload, RunGraphPayload, RunViewPayload};

/// In-memory repository for testing use cases that depend on the repository ports
///
/// # Examples
///
/// ```
/// use runboard::domain::{Run, User};
/// use runboard::util::testing::MockNoteRepository;
///
/// let mock = MockNoteRepository::builder()
///     .with_author(User::new("u1", "Ada"))
///     .with_run(Run::new("abcdef1234"))
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    authors: Vec<User>,
    runs: HashMap<String, Run>,
    graphs: HashMap<String, RunGraphPayload>,
    created_at: DateTime<Utc>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(&mut self, root_id: Option<&str>) -> Result<NoteListPayload, DomainError> {
        let listing = NoteListPayload {
            content: self.notes.clone(),
            authors: self.authors.clone(),
        };
        Ok(match root_id {
            Some(root_id) => listing.for_root(root_id),
            None => listing,
        })
    }

    fn create_note(&mut self, draft: NoteDraft) -> Result<NoteCreatePayload, DomainError> {
        if !self.authors.iter().any(|author| author.id == draft.author_id) {
            return Err(DomainError::UnknownAuthor(draft.author_id));
        }
        let note = draft.into_note(format!("note-{}", self.notes.len() + 1), self.created_at);
        self.notes.push(note.clone());
        Ok(NoteCreatePayload { content: note })
    }
}

impl RunRepository for MockNoteRepository {
    fn get_run(&mut self, id: &str) -> Result<RunViewPayload, DomainError> {
        self.runs
            .get(id)
            .cloned()
            .map(|content| RunViewPayload { content })
            .ok_or_else(|| DomainError::RunNotFound(id.to_string()))
    }

    fn get_graph(&mut self, root_id: &str) -> Result<RunGraphPayload, DomainError> {
        self.graphs
            .get(root_id)
            .cloned()
            .ok_or_else(|| DomainError::RunNotFound(root_id.to_string()))
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock contents.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    authors: Vec<User>,
    runs: HashMap<String, Run>,
    graphs: HashMap<String, RunGraphPayload>,
    created_at: DateTime<Utc>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            authors: vec![],
            runs: HashMap::new(),
            graphs: HashMap::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_author(mut self, author: User) -> Self {
        self.authors.push(author);
        self
    }

    /// Add a run that can be retrieved by get_run
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.insert(run.id.clone(), run);
        self
    }

    /// Add a graph; its runs become retrievable by get_run as well
    pub fn with_graph(mut self, graph: RunGraphPayload) -> Self {
        for run in &graph.runs {
            self.runs.insert(run.id.clone(), run.clone());
        }
        self.graphs.insert(graph.root_id.clone(), graph);
        self
    }

    /// Timestamp assigned to notes created through the mock
    pub fn with_creation_time(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            authors: self.authors,
            runs: self.runs,
            graphs: self.graphs,
            created_at: self.created_at,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
