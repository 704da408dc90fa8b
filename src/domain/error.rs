// src/domain/error.rs
use crate::domain::PortRole;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Run not found: {0}")]
    RunNotFound(String),
    #[error("Author not found: {0}")]
    UnknownAuthor(String),
    #[error("Duplicate {role} port '{port}' on run {run_id}")]
    DuplicatePort {
        run_id: String,
        role: PortRole,
        port: String,
    },
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}
