// src/domain/resolution.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// State of a resolver session, distinct from the state of its root run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionStatus {
    Created,
    Scheduled,
    Running,
    Failed,
    Complete,
}

impl ResolutionStatus {
    /// Whether a resolution may move from `from` to `to`.
    /// `from == None` asks whether `to` is a valid initial status.
    pub fn is_allowed_transition(from: Option<Self>, to: Self) -> bool {
        use ResolutionStatus::*;
        match from {
            // local resolutions skip scheduling
            None => matches!(to, Created | Running | Failed),
            Some(Created) => matches!(to, Scheduled | Failed),
            Some(Scheduled) => matches!(to, Running | Failed),
            Some(Running) => matches!(to, Complete | Failed),
            Some(Complete) | Some(Failed) => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ResolutionStatus::Complete | ResolutionStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionStatus::Created => "CREATED",
            ResolutionStatus::Scheduled => "SCHEDULED",
            ResolutionStatus::Running => "RUNNING",
            ResolutionStatus::Failed => "FAILED",
            ResolutionStatus::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionKind {
    Local,
    Kubernetes,
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionKind::Local => write!(f, "LOCAL"),
            ResolutionKind::Kubernetes => write!(f, "KUBERNETES"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub root_id: String,
    pub status: ResolutionStatus,
    pub kind: ResolutionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image_uri: Option<String>,
    #[serde(default)]
    pub settings_env_vars: BTreeMap<String, String>,
}

impl Resolution {
    /// Check that `update` may replace this resolution. Only `status` is mutable,
    /// and only along an allowed transition.
    pub fn check_update(&self, update: &Resolution) -> Result<(), DomainError> {
        if let Some((field, original, new)) = self.immutable_change(update) {
            return Err(DomainError::InvalidResolution(format!(
                "Cannot update {} of resolution {} after it has been created. \
                 Original value: '{}', new value: '{}' (will not be used)",
                field, self.root_id, original, new
            )));
        }

        if update.status == self.status {
            return Ok(());
        }
        if !ResolutionStatus::is_allowed_transition(Some(self.status), update.status) {
            return Err(DomainError::InvalidResolution(format!(
                "Resolution {} cannot be moved from the {} state to the {} state.",
                self.root_id, self.status, update.status
            )));
        }
        Ok(())
    }

    /// First field other than `status` that differs, with both values rendered
    fn immutable_change(&self, update: &Resolution) -> Option<(&'static str, String, String)> {
        if self.root_id != update.root_id {
            return Some(("root_id", self.root_id.clone(), update.root_id.clone()));
        }
        if self.kind != update.kind {
            return Some(("kind", self.kind.to_string(), update.kind.to_string()));
        }
        if self.docker_image_uri != update.docker_image_uri {
            return Some((
                "docker_image_uri",
                self.docker_image_uri.clone().unwrap_or_default(),
                update.docker_image_uri.clone().unwrap_or_default(),
            ));
        }
        if self.settings_env_vars != update.settings_env_vars {
            return Some((
                "settings_env_vars",
                format!("{:?}", self.settings_env_vars),
                format!("{:?}", update.settings_env_vars),
            ));
        }
        None
    }

    /// Check that this resolution is acceptable as a freshly created one
    pub fn check_new(&self) -> Result<(), DomainError> {
        if self.kind != ResolutionKind::Local && self.docker_image_uri.is_none() {
            return Err(DomainError::InvalidResolution(
                "Remote resolutions require docker image URIs".to_string(),
            ));
        }
        if !ResolutionStatus::is_allowed_transition(None, self.status) {
            return Err(DomainError::InvalidResolution(format!(
                "Resolution {} can't start in state: {}",
                self.root_id, self.status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use ResolutionStatus::*;

    fn scheduled() -> Resolution {
        Resolution {
            root_id: "abc123".to_string(),
            status: Scheduled,
            kind: ResolutionKind::Kubernetes,
            docker_image_uri: Some("my.docker.registry.io/image/tag".to_string()),
            settings_env_vars: BTreeMap::new(),
        }
    }

    #[rstest]
    #[case(None, Created, true)]
    #[case(None, Running, true)]
    #[case(None, Scheduled, false)]
    #[case(Some(Scheduled), Running, true)]
    #[case(Some(Running), Complete, true)]
    #[case(Some(Created), Running, false)]
    #[case(Some(Complete), Failed, false)]
    #[case(Some(Failed), Running, false)]
    fn given_status_pair_when_checking_transition_then_matches_table(
        #[case] from: Option<ResolutionStatus>,
        #[case] to: ResolutionStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(ResolutionStatus::is_allowed_transition(from, to), allowed);
    }

    #[test]
    fn given_status_change_along_allowed_edge_when_updating_then_accepts() {
        let update = Resolution {
            status: Running,
            ..scheduled()
        };
        assert!(scheduled().check_update(&update).is_ok());
        assert!(scheduled().check_update(&scheduled()).is_ok());
    }

    #[test]
    fn given_skipped_status_when_updating_then_rejects() {
        let update = Resolution {
            status: Complete,
            ..scheduled()
        };

        let err = scheduled().check_update(&update).expect_err("should reject");
        assert_eq!(
            err.to_string(),
            "Invalid resolution: Resolution abc123 cannot be moved from the SCHEDULED state to the COMPLETE state."
        );
    }

    #[rstest]
    #[case(Resolution { root_id: "zzz".to_string(), ..scheduled() }, "root_id")]
    #[case(Resolution { kind: ResolutionKind::Local, ..scheduled() }, "kind")]
    #[case(Resolution { docker_image_uri: Some("my.docker.registry.io/changed/tag".to_string()), ..scheduled() }, "docker_image_uri")]
    fn given_immutable_field_change_when_updating_then_names_field(
        #[case] update: Resolution,
        #[case] field: &str,
    ) {
        let err = scheduled().check_update(&update).expect_err("should reject");
        assert!(err
            .to_string()
            .contains(&format!("Cannot update {} of resolution abc123", field)));
    }

    #[test]
    fn given_remote_resolution_without_image_when_creating_then_rejects() {
        let new = Resolution {
            status: Created,
            docker_image_uri: None,
            ..scheduled()
        };
        assert!(new.check_new().is_err());

        let local = Resolution {
            kind: ResolutionKind::Local,
            ..new
        };
        assert!(local.check_new().is_ok());
    }

    #[test]
    fn given_json_status_when_decoding_then_uses_upper_case_names() {
        let status: ResolutionStatus = serde_json::from_str(r#""RUNNING""#).unwrap();
        assert_eq!(status, Running);
        assert!(Complete.is_terminal());
    }
}
