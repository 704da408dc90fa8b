// src/domain/artifact.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A named input or output value attached to a run. Contents are opaque here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artifact {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}

/// Data flow between run ports. A missing source means the value was passed
/// in from outside the graph; a missing destination means it leaves the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Edge {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_run_id: None,
            source_name: None,
            destination_run_id: None,
            destination_name: None,
            artifact_id: None,
            parent_id: None,
            extra: Map::new(),
        }
    }

    pub fn with_source(mut self, run_id: impl Into<String>, port: impl Into<String>) -> Self {
        self.source_run_id = Some(run_id.into());
        self.source_name = Some(port.into());
        self
    }

    pub fn with_destination(mut self, run_id: impl Into<String>, port: impl Into<String>) -> Self {
        self.destination_run_id = Some(run_id.into());
        self.destination_name = Some(port.into());
        self
    }

    pub fn with_artifact(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortRole {
    Input,
    Output,
}

impl fmt::Display for PortRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortRole::Input => write!(f, "input"),
            PortRole::Output => write!(f, "output"),
        }
    }
}
