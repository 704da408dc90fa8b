// src/payloads/artifacts.rs
use crate::domain::{Artifact, DomainError, Edge, PortRole};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Artifacts of a single run, partitioned by role and keyed by port name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMap {
    pub input: BTreeMap<String, Artifact>,
    pub output: BTreeMap<String, Artifact>,
}

impl ArtifactMap {
    pub fn role(&self, role: PortRole) -> &BTreeMap<String, Artifact> {
        match role {
            PortRole::Input => &self.input,
            PortRole::Output => &self.output,
        }
    }

    /// Attach `artifact` to `port`. Re-attaching the same artifact is a no-op,
    /// which happens when one output fans out to several edges.
    fn attach(
        &mut self,
        run_id: &str,
        role: PortRole,
        port: &str,
        artifact: &Artifact,
    ) -> Result<(), DomainError> {
        let ports = match role {
            PortRole::Input => &mut self.input,
            PortRole::Output => &mut self.output,
        };
        match ports.get(port) {
            Some(existing) if existing.id == artifact.id => Ok(()),
            Some(_) => Err(DomainError::DuplicatePort {
                run_id: run_id.to_string(),
                role,
                port: port.to_string(),
            }),
            None => {
                ports.insert(port.to_string(), artifact.clone());
                Ok(())
            }
        }
    }
}

/// Artifact maps keyed by run identifier
pub type RunArtifactMap = BTreeMap<String, ArtifactMap>;

/// Derive per-run artifact maps from a flat edge list and artifact pool.
///
/// An edge into a run fills that run's `input`, an edge out of a run fills its
/// `output`. Edges that carry no artifact yet are skipped.
pub fn build_run_artifact_map(
    edges: &[Edge],
    artifacts: &[Artifact],
) -> Result<RunArtifactMap, DomainError> {
    let pool: HashMap<&str, &Artifact> = artifacts.iter().map(|a| (a.id.as_str(), a)).collect();
    let mut map = RunArtifactMap::new();

    for edge in edges {
        let Some(artifact_id) = edge.artifact_id.as_deref() else {
            debug!(edge_id = %edge.id, "Skipping edge without artifact");
            continue;
        };
        let artifact = pool.get(artifact_id).copied().ok_or_else(|| {
            DomainError::InvalidPayload(format!(
                "edge {} references unknown artifact {}",
                edge.id, artifact_id
            ))
        })?;

        let ends = [
            (PortRole::Input, &edge.destination_run_id, &edge.destination_name),
            (PortRole::Output, &edge.source_run_id, &edge.source_name),
        ];
        for (role, run_id, port) in ends {
            let Some(run_id) = run_id.as_deref() else {
                continue;
            };
            let port = port.as_deref().ok_or_else(|| {
                DomainError::InvalidPayload(format!(
                    "edge {} has a {} run but no port name",
                    edge.id, role
                ))
            })?;
            map.entry(run_id.to_string())
                .or_default()
                .attach(run_id, role, port, artifact)?;
        }
    }

    Ok(map)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactListPayload {
    pub content: Vec<Artifact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeListPayload {
    pub content: Vec<Edge>,
}

impl EdgeListPayload {
    /// Edges with set semantics: first occurrence of each id wins, order kept
    pub fn unique_edges(&self) -> Vec<&Edge> {
        let mut seen = HashSet::new();
        self.content
            .iter()
            .filter(|edge| seen.insert(edge.id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Artifact> {
        vec![Artifact::new("art-x"), Artifact::new("art-y")]
    }

    #[test]
    fn given_edges_between_runs_when_building_map_then_fills_both_roles() {
        let edges = vec![
            Edge::new("e1").with_destination("train", "data").with_artifact("art-x"),
            Edge::new("e2")
                .with_source("train", "output")
                .with_destination("eval", "model")
                .with_artifact("art-y"),
        ];

        let map = build_run_artifact_map(&edges, &pool()).unwrap();

        assert_eq!(map["train"].input["data"].id, "art-x");
        assert_eq!(map["train"].output["output"].id, "art-y");
        assert_eq!(map["eval"].input["model"].id, "art-y");
        assert!(map["eval"].output.is_empty());
    }

    #[test]
    fn given_fan_out_of_one_output_when_building_map_then_keeps_single_port() {
        let edges = vec![
            Edge::new("e1").with_source("a", "out").with_destination("b", "x").with_artifact("art-x"),
            Edge::new("e2").with_source("a", "out").with_destination("c", "x").with_artifact("art-x"),
        ];

        let map = build_run_artifact_map(&edges, &pool()).unwrap();

        assert_eq!(map["a"].role(PortRole::Output).len(), 1);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn given_two_artifacts_on_one_port_when_building_map_then_reports_duplicate() {
        let edges = vec![
            Edge::new("e1").with_destination("b", "x").with_artifact("art-x"),
            Edge::new("e2").with_destination("b", "x").with_artifact("art-y"),
        ];

        let err = build_run_artifact_map(&edges, &pool()).expect_err("should reject");

        match err {
            DomainError::DuplicatePort { run_id, role, port } => {
                assert_eq!(run_id, "b");
                assert_eq!(role, PortRole::Input);
                assert_eq!(port, "x");
            }
            other => panic!("Expected DuplicatePort, got {other:?}"),
        }
    }

    #[test]
    fn given_edge_without_artifact_when_building_map_then_skips_it() {
        let edges = vec![Edge::new("e1").with_destination("b", "x")];
        assert!(build_run_artifact_map(&edges, &pool()).unwrap().is_empty());
    }

    #[test]
    fn given_unknown_artifact_when_building_map_then_rejects() {
        let edges = vec![Edge::new("e1").with_destination("b", "x").with_artifact("missing")];
        assert!(matches!(
            build_run_artifact_map(&edges, &pool()),
            Err(DomainError::InvalidPayload(_))
        ));
    }

    #[test]
    fn given_repeated_edge_ids_when_deduplicating_then_keeps_first() {
        let listing = EdgeListPayload {
            content: vec![
                Edge::new("e1").with_artifact("art-x"),
                Edge::new("e2"),
                Edge::new("e1"),
            ],
        };

        let unique = listing.unique_edges();

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].artifact_id.as_deref(), Some("art-x"));
    }
}
