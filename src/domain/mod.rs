// src/domain/mod.rs
pub mod artifact;
pub mod error;
pub mod note;
pub mod resolution;
pub mod run;
pub mod timestamp;
pub mod user;

pub use artifact::{Artifact, Edge, PortRole};
pub use error::DomainError;
pub use note::{Note, NoteDraft};
pub use resolution::{Resolution, ResolutionKind, ResolutionStatus};
pub use run::Run;
pub use user::User;
