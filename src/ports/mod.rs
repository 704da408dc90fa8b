// src/ports/mod.rs
pub mod html;
pub mod note_view;

pub use html::{HtmlPresenter, Theme};
pub use note_view::{Avatar, NoteView, RunBadge};
