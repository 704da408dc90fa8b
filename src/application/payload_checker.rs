// src/application/payload_checker.rs
use crate::payloads::*;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

fn decode<T: DeserializeOwned>(kind: PayloadKind, raw: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("Failed to decode {:?} payload", kind))
}

/// Decode `raw` as a payload of `kind`, check its invariants, and summarize it
/// in one line.
#[instrument(level = "debug", skip(raw))]
pub fn check_payload(kind: PayloadKind, raw: &str) -> Result<String> {
    let summary = match kind {
        PayloadKind::Runs => {
            let listing: RunListPayload = decode(kind, raw)?;
            listing.validate()?;
            format!(
                "{} runs (limit {}, {} before cursor){}",
                listing.content.len(),
                listing.limit,
                listing.after_cursor_count,
                if listing.has_next_page() { ", more pages" } else { "" }
            )
        }
        PayloadKind::Run => {
            let view: RunViewPayload = decode(kind, raw)?;
            format!("run {}", view.content.label())
        }
        PayloadKind::Artifacts => {
            let listing: ArtifactListPayload = decode(kind, raw)?;
            format!("{} artifacts", listing.content.len())
        }
        PayloadKind::Edges => {
            let listing: EdgeListPayload = decode(kind, raw)?;
            format!(
                "{} edges ({} distinct)",
                listing.content.len(),
                listing.unique_edges().len()
            )
        }
        PayloadKind::Graph => {
            let graph = RunGraph::from_payload(decode(kind, raw)?)?;
            format!(
                "graph {} with {} runs and {} edges",
                graph.root().label(),
                graph.len(),
                graph.edges().len()
            )
        }
        PayloadKind::Notes => {
            let listing: NoteListPayload = decode(kind, raw)?;
            listing.resolve()?;
            format!(
                "{} notes by {} authors",
                listing.content.len(),
                listing.authors.len()
            )
        }
        PayloadKind::NoteCreate => {
            let created: NoteCreatePayload = decode(kind, raw)?;
            format!("note {} on run {}", created.content.id, created.content.root_id)
        }
        PayloadKind::Authenticate => {
            let auth: AuthenticatePayload = decode(kind, raw)?;
            let providers: Vec<String> = auth
                .providers
                .enabled()
                .iter()
                .map(ToString::to_string)
                .collect();
            format!(
                "authentication {}, providers: {}",
                if auth.authenticate { "required" } else { "disabled" },
                if providers.is_empty() { "none".to_string() } else { providers.join(", ") }
            )
        }
        PayloadKind::GoogleLogin => {
            let login: GoogleLoginPayload = decode(kind, raw)?;
            format!("logged in as {}", login.user.display_name())
        }
        PayloadKind::Env => {
            let env: EnvPayload = decode(kind, raw)?;
            format!("{} environment variables", env.env.len())
        }
        PayloadKind::Resolution => {
            let view: ResolutionViewPayload = decode(kind, raw)?;
            format!(
                "resolution {} is {} ({})",
                view.content.root_id, view.content.status, view.content.kind
            )
        }
    };
    debug!(%summary, "Payload is valid");
    Ok(summary)
}
