// src/payloads/graph.rs
use crate::domain::{Artifact, DomainError, Edge, Run};
use crate::payloads::artifacts::{build_run_artifact_map, ArtifactMap, RunArtifactMap};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Every run, edge and artifact reachable from `root_id`, as flat pools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunGraphPayload {
    pub root_id: String,
    pub runs: Vec<Run>,
    pub edges: Vec<Edge>,
    pub artifacts: Vec<Artifact>,
}

/// Structure reconstructed from a [`RunGraphPayload`]: id lookups, nesting
/// from `parent_id`, and per-run artifact maps.
#[derive(Debug, Clone)]
pub struct RunGraph {
    root_id: String,
    runs: Vec<Run>,
    index: HashMap<String, usize>,
    children: HashMap<String, Vec<usize>>,
    edges: Vec<Edge>,
    artifacts: RunArtifactMap,
}

impl RunGraph {
    #[instrument(level = "debug", skip(payload), fields(root_id = %payload.root_id))]
    pub fn from_payload(payload: RunGraphPayload) -> Result<Self, DomainError> {
        let RunGraphPayload {
            root_id,
            runs,
            edges,
            artifacts,
        } = payload;

        let mut index = HashMap::with_capacity(runs.len());
        for (position, run) in runs.iter().enumerate() {
            if index.insert(run.id.clone(), position).is_some() {
                return Err(DomainError::InvalidPayload(format!(
                    "run {} appears twice in graph {}",
                    run.id, root_id
                )));
            }
        }
        if !index.contains_key(&root_id) {
            return Err(DomainError::RunNotFound(root_id));
        }

        let mut children: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, run) in runs.iter().enumerate() {
            if let Some(parent_id) = run.parent_id.as_deref() {
                if run.id != root_id {
                    children.entry(parent_id.to_string()).or_default().push(position);
                }
            }
        }

        let artifacts = build_run_artifact_map(&edges, &artifacts)?;
        debug!(runs = runs.len(), edges = edges.len(), "Reconstructed run graph");

        Ok(Self {
            root_id,
            runs,
            index,
            children,
            edges,
            artifacts,
        })
    }

    pub fn root(&self) -> &Run {
        // from_payload guarantees the root is indexed
        &self.runs[self.index[&self.root_id]]
    }

    pub fn run(&self, id: &str) -> Option<&Run> {
        self.index.get(id).map(|&position| &self.runs[position])
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Direct children in payload order
    pub fn children(&self, id: &str) -> Vec<&Run> {
        self.children
            .get(id)
            .map(|positions| positions.iter().map(|&p| &self.runs[p]).collect())
            .unwrap_or_default()
    }

    pub fn artifacts_for(&self, run_id: &str) -> Option<&ArtifactMap> {
        self.artifacts.get(run_id)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Pre-order walk from the root with nesting depth. Runs not reachable
    /// through `parent_id` are left out; cycles are cut at the first revisit.
    pub fn depth_first(&self) -> Vec<(usize, &Run)> {
        let mut visited = HashSet::new();
        let mut ordered = Vec::with_capacity(self.runs.len());
        let mut stack = vec![(0, self.root())];

        while let Some((depth, run)) = stack.pop() {
            if !visited.insert(run.id.as_str()) {
                continue;
            }
            ordered.push((depth, run));
            for child in self.children(&run.id).into_iter().rev() {
                stack.push((depth + 1, child));
            }
        }

        ordered
    }
}
