// src/application/mod.rs
pub mod note_creator;
pub mod note_feed;
pub mod payload_checker;
pub mod run_viewer;

pub use note_creator::NoteCreator;
pub use note_feed::{NoteFeed, NoteRepository};
pub use payload_checker::check_payload;
pub use run_viewer::{RunRepository, RunViewer};
