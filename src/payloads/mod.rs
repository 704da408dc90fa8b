// src/payloads/mod.rs
//
// Shapes exchanged with the run-tracking service. Field names match the wire format.
pub mod artifacts;
pub mod auth;
pub mod env;
pub mod graph;
pub mod notes;
pub mod runs;

pub use artifacts::{
    build_run_artifact_map, ArtifactListPayload, ArtifactMap, EdgeListPayload, RunArtifactMap,
};
pub use auth::{AuthProvider, AuthenticatePayload, GoogleLoginPayload, Providers};
pub use env::EnvPayload;
pub use graph::{RunGraph, RunGraphPayload};
pub use notes::{AuthorIndex, NoteCreatePayload, NoteListPayload};
pub use runs::{ResolutionViewPayload, RunListPayload, RunViewPayload};

/// Payload shapes that can be checked from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PayloadKind {
    Runs,
    Run,
    Artifacts,
    Edges,
    Graph,
    Notes,
    NoteCreate,
    Authenticate,
    GoogleLogin,
    Env,
    Resolution,
}
