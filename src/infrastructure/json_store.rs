// src/infrastructure/json_store.rs
use crate::application::{NoteRepository, RunRepository};
use crate::constants::{GRAPHS_DIR, NOTES_FILE};
use crate::domain::{DomainError, NoteDraft};
use crate::payloads::{NoteCreatePayload, NoteListPayload, RunGraphPayload, RunViewPayload};
use anyhow::Result;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Repository over payload snapshots saved on disk:
///
/// ```text
/// <root>/notes.json              NoteListPayload
/// <root>/graphs/<root_id>.json   RunGraphPayload
/// ```
#[derive(Debug)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = PathBuf::from(root.as_ref());
        debug!(?root, "Creating new JsonStore");

        if !root.is_dir() {
            return Err(DomainError::RepositoryError(format!(
                "Payload directory not found: {}",
                root.display()
            ))
            .into());
        }

        info!(?root, "Opened payload directory");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn notes_path(&self) -> PathBuf {
        self.root.join(NOTES_FILE)
    }

    /// Graph file of `root_id`. Ids that could leave `graphs/` are rejected.
    fn graph_path(&self, root_id: &str) -> Result<PathBuf, DomainError> {
        if root_id.is_empty() || root_id.contains(['/', '\\']) || root_id.contains("..") {
            return Err(DomainError::InvalidPayload(format!(
                "invalid run id: {:?}",
                root_id
            )));
        }
        Ok(self.root.join(GRAPHS_DIR).join(format!("{}.json", root_id)))
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            DomainError::RepositoryError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::InvalidPayload(format!("{}: {}", path.display(), e))
        })
    }

    fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), DomainError> {
        let raw = serde_json::to_string_pretty(value).map_err(|e| {
            DomainError::RepositoryError(format!("Failed to encode {}: {}", path.display(), e))
        })?;
        fs::write(path, raw).map_err(|e| {
            DomainError::RepositoryError(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn load_notes(&self) -> Result<NoteListPayload, DomainError> {
        let path = self.notes_path();
        if !path.exists() {
            debug!(?path, "No notes file, starting empty");
            return Ok(NoteListPayload::default());
        }
        Self::read(&path)
    }

    /// Every decodable saved graph, in file name order. Unreadable snapshots are
    /// skipped so one bad file does not hide the others.
    fn load_graphs(&self) -> Result<Vec<RunGraphPayload>, DomainError> {
        let dir = self.root.join(GRAPHS_DIR);
        if !dir.is_dir() {
            return Ok(vec![]);
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| {
            DomainError::RepositoryError(format!("Failed to list {}: {}", dir.display(), e))
        })? {
            let path = entry
                .map_err(|e| DomainError::RepositoryError(e.to_string()))?
                .path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let graphs = paths
            .iter()
            .filter_map(|path| match Self::read(path) {
                Ok(graph) => Some(graph),
                Err(e) => {
                    warn!(?path, error = %e, "Skipping unreadable graph");
                    None
                }
            })
            .collect();
        Ok(graphs)
    }
}

impl NoteRepository for JsonStore {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self, root_id: Option<&str>) -> Result<NoteListPayload, DomainError> {
        let listing = self.load_notes()?;
        Ok(match root_id {
            Some(root_id) => listing.for_root(root_id),
            None => listing,
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn create_note(&mut self, draft: NoteDraft) -> Result<NoteCreatePayload, DomainError> {
        let mut listing = self.load_notes()?;
        let author = listing
            .author_index()
            .get(&draft.author_id)
            .cloned()
            .ok_or_else(|| DomainError::UnknownAuthor(draft.author_id.clone()))?;

        let note = draft.into_note(Uuid::new_v4().simple().to_string(), Utc::now());
        let created = NoteCreatePayload { content: note };
        listing.push(created.clone(), author)?;
        Self::write(&self.notes_path(), &listing)?;

        info!(note_id = %created.content.id, "Stored note");
        Ok(created)
    }
}

impl RunRepository for JsonStore {
    #[instrument(level = "debug", skip(self))]
    fn get_run(&mut self, id: &str) -> Result<RunViewPayload, DomainError> {
        let direct = self.graph_path(id)?;
        if direct.exists() {
            let graph: RunGraphPayload = Self::read(&direct)?;
            if let Some(run) = graph.runs.into_iter().find(|run| run.id == id) {
                return Ok(RunViewPayload { content: run });
            }
        }

        // nested runs only live inside their root's graph
        for graph in self.load_graphs()? {
            if let Some(run) = graph.runs.into_iter().find(|run| run.id == id) {
                return Ok(RunViewPayload { content: run });
            }
        }

        debug!(run_id = id, "Run not found in any graph");
        Err(DomainError::RunNotFound(id.to_string()))
    }

    #[instrument(level = "debug", skip(self))]
    fn get_graph(&mut self, root_id: &str) -> Result<RunGraphPayload, DomainError> {
        let path = self.graph_path(root_id)?;
        if !path.exists() {
            return Err(DomainError::RunNotFound(root_id.to_string()));
        }
        Self::read(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Run, User};
    use tempfile::TempDir;

    fn store_with_author() -> (TempDir, JsonStore) {
        let temp_dir = TempDir::new().unwrap();
        let listing = NoteListPayload {
            content: vec![],
            authors: vec![User::new("u1", "Ada")],
        };
        fs::write(
            temp_dir.path().join(NOTES_FILE),
            serde_json::to_string(&listing).unwrap(),
        )
        .unwrap();
        let store = JsonStore::new(temp_dir.path()).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn given_missing_directory_when_opening_then_returns_error() {
        assert!(JsonStore::new("/nonexistent/payloads").is_err());
    }

    #[test]
    fn given_empty_directory_when_listing_notes_then_returns_empty_listing() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonStore::new(temp_dir.path()).unwrap();

        let listing = store.list_notes(None).unwrap();

        assert!(listing.content.is_empty());
        assert!(listing.authors.is_empty());
    }

    #[test]
    fn given_draft_when_creating_then_persists_note() {
        let (_temp_dir, mut store) = store_with_author();

        let created = store
            .create_note(NoteDraft {
                author_id: "u1".to_string(),
                note: "first".to_string(),
                root_id: "abcdef1234".to_string(),
                run_id: None,
            })
            .unwrap();

        assert_eq!(created.content.id.len(), 32);
        let listing = store.list_notes(Some("abcdef1234")).unwrap();
        assert_eq!(listing.content, vec![created.content]);
        assert!(listing.resolve().is_ok());
    }

    #[test]
    fn given_unknown_author_when_creating_then_leaves_file_untouched() {
        let (temp_dir, mut store) = store_with_author();
        let before = fs::read_to_string(temp_dir.path().join(NOTES_FILE)).unwrap();

        let result = store.create_note(NoteDraft {
            author_id: "ghost".to_string(),
            note: "boo".to_string(),
            root_id: "r".to_string(),
            run_id: None,
        });

        assert!(matches!(result, Err(DomainError::UnknownAuthor(_))));
        let after = fs::read_to_string(temp_dir.path().join(NOTES_FILE)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn given_nested_run_when_getting_run_then_searches_all_graphs() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(GRAPHS_DIR)).unwrap();
        let graph = RunGraphPayload {
            root_id: "root".to_string(),
            runs: vec![Run::new("root"), Run::new("child").with_parent("root")],
            edges: vec![],
            artifacts: vec![],
        };
        fs::write(
            temp_dir.path().join(GRAPHS_DIR).join("root.json"),
            serde_json::to_string(&graph).unwrap(),
        )
        .unwrap();
        let mut store = JsonStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.get_run("child").unwrap().content.id, "child");
        assert_eq!(store.get_graph("root").unwrap(), graph);
        assert!(matches!(store.get_run("other"), Err(DomainError::RunNotFound(_))));
        assert!(matches!(store.get_graph("child"), Err(DomainError::RunNotFound(_))));
    }

    #[test]
    fn given_corrupt_graph_next_to_valid_one_when_getting_run_then_skips_it() {
        let temp_dir = TempDir::new().unwrap();
        let graphs = temp_dir.path().join(GRAPHS_DIR);
        fs::create_dir(&graphs).unwrap();
        let graph = RunGraphPayload {
            root_id: "root".to_string(),
            runs: vec![Run::new("root"), Run::new("child").with_parent("root")],
            edges: vec![],
            artifacts: vec![],
        };
        fs::write(graphs.join("other.json"), "{ not json").unwrap();
        fs::write(graphs.join("root.json"), serde_json::to_string(&graph).unwrap()).unwrap();
        let mut store = JsonStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.get_run("child").unwrap().content.id, "child");
        assert!(matches!(
            store.get_run("unknown_root"),
            Err(DomainError::RunNotFound(_))
        ));
        assert!(matches!(
            store.get_run("other"),
            Err(DomainError::InvalidPayload(_))
        ));
    }

    #[test]
    fn given_id_leaving_graphs_dir_when_getting_graph_then_rejects() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(GRAPHS_DIR)).unwrap();
        let graph = RunGraphPayload {
            root_id: "outside".to_string(),
            runs: vec![Run::new("outside")],
            edges: vec![],
            artifacts: vec![],
        };
        fs::write(
            temp_dir.path().join("outside.json"),
            serde_json::to_string(&graph).unwrap(),
        )
        .unwrap();
        let mut store = JsonStore::new(temp_dir.path()).unwrap();

        for id in ["../outside", "a/b", "a\\b", ".."] {
            assert!(
                matches!(store.get_graph(id), Err(DomainError::InvalidPayload(_))),
                "{id} should be rejected"
            );
        }
        assert!(matches!(
            store.get_run("../outside"),
            Err(DomainError::InvalidPayload(_))
        ));
    }
}
