// src/payloads/auth.rs
use crate::domain::User;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatePayload {
    pub authenticate: bool,
    #[serde(default)]
    pub providers: Providers,
}

/// OAuth client identifiers. A provider without a client id is disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Providers {
    #[serde(
        rename = "GOOGLE_OAUTH_CLIENT_ID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub google_oauth_client_id: Option<String>,
    #[serde(
        rename = "GITHUB_OAUTH_CLIENT_ID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub github_oauth_client_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    Google,
    Github,
}

impl AuthProvider {
    pub const ALL: [AuthProvider; 2] = [AuthProvider::Google, AuthProvider::Github];
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthProvider::Google => write!(f, "Google"),
            AuthProvider::Github => write!(f, "GitHub"),
        }
    }
}

impl Providers {
    pub fn client_id(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Google => self.google_oauth_client_id.as_deref(),
            AuthProvider::Github => self.github_oauth_client_id.as_deref(),
        }
    }

    pub fn is_enabled(&self, provider: AuthProvider) -> bool {
        self.client_id(provider).is_some()
    }

    pub fn enabled(&self) -> Vec<AuthProvider> {
        AuthProvider::ALL
            .into_iter()
            .filter(|provider| self.is_enabled(*provider))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleLoginPayload {
    pub user: User,
}
