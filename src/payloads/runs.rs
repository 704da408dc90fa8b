// src/payloads/runs.rs
use crate::domain::{DomainError, Resolution, Run};
use serde::{Deserialize, Serialize};

/// One page of a run listing.
///
/// `next_page_url` and `next_cursor` are only present when another page exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunListPayload {
    pub current_page_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub after_cursor_count: u64,
    pub content: Vec<Run>,
}

impl RunListPayload {
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.limit == 0 {
            return Err(DomainError::InvalidPayload(
                "run listing limit must be positive".to_string(),
            ));
        }
        if self.next_page_url.is_some() != self.next_cursor.is_some() {
            return Err(DomainError::InvalidPayload(
                "next_page_url and next_cursor must be present together".to_string(),
            ));
        }
        if self.content.len() as u64 > u64::from(self.limit) {
            return Err(DomainError::InvalidPayload(format!(
                "run listing holds {} runs, more than its limit of {}",
                self.content.len(),
                self.limit
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunViewPayload {
    pub content: Run,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionViewPayload {
    pub content: Resolution,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(limit: u32, next: Option<&str>) -> RunListPayload {
        RunListPayload {
            current_page_url: "/api/v1/runs?limit=2".to_string(),
            next_page_url: next.map(|c| format!("/api/v1/runs?limit=2&cursor={}", c)),
            limit,
            next_cursor: next.map(str::to_string),
            after_cursor_count: 0,
            content: vec![Run::new("a"), Run::new("b")],
        }
    }

    #[test]
    fn given_last_page_when_serializing_then_omits_pagination_fields() {
        let json = serde_json::to_string(&page(2, None)).unwrap();

        assert!(!json.contains("next_page_url"));
        assert!(!json.contains("next_cursor"));
        assert!(!page(2, None).has_next_page());
    }

    #[test]
    fn given_cursor_when_checking_then_reports_next_page() {
        let listing = page(2, Some("c2"));
        assert!(listing.has_next_page());
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn given_zero_limit_when_validating_then_rejects() {
        assert!(matches!(
            page(0, None).validate(),
            Err(DomainError::InvalidPayload(_))
        ));
    }

    #[test]
    fn given_more_runs_than_limit_when_validating_then_rejects() {
        assert!(page(1, None).validate().is_err());
    }

    #[test]
    fn given_cursor_without_url_when_validating_then_rejects() {
        let mut listing = page(2, Some("c2"));
        listing.next_page_url = None;
        assert!(listing.validate().is_err());
    }
}
