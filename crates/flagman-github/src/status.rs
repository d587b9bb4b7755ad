//! Commit status types and validation.
//!
//! Raw caller input arrives as [`StatusOptions`] with the state as a free
//! string; [`StatusOptions::validate`] is the single boundary where it is
//! parsed into the closed [`StatusState`] enum and the context defaulted.
//! Everything downstream works with the normalized [`StatusRequest`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// State of a commit status, as understood by the GitHub statuses API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// The stage hit an internal error.
    Error,
    /// The stage ran and failed.
    Failure,
    /// The stage is still running.
    Pending,
    /// The stage ran and passed.
    Success,
}

impl StatusState {
    /// The wire representation of this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Failure => "failure",
            Self::Pending => "pending",
            Self::Success => "success",
        }
    }
}

impl std::str::FromStr for StatusState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "error" => Ok(Self::Error),
            "failure" => Ok(Self::Failure),
            "pending" => Ok(Self::Pending),
            "success" => Ok(Self::Success),
            other => Err(Error::InvalidState(other.to_string())),
        }
    }
}

impl std::fmt::Display for StatusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw options for posting a commit status, as supplied by the caller.
///
/// One value is built per pipeline stage invocation and consumed by
/// [`validate`](Self::validate); nothing is kept across calls.
#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Commit SHA the status attaches to.
    pub sha: String,

    /// Requested state. Must be one of `error`, `failure`, `pending`,
    /// `success`.
    pub state: String,

    /// URL linked from the status in the checks UI.
    pub target_url: Option<String>,

    /// Short human-readable description of the outcome.
    pub description: Option<String>,

    /// Status context shown in the checks UI. Empty means `default`.
    pub context: String,
}

impl StatusOptions {
    /// Validate and normalize into a [`StatusRequest`].
    ///
    /// Runs before any credential or network work, so malformed input
    /// never triggers either.
    ///
    /// # Errors
    /// Returns [`Error::InvalidState`] if `state` is not one of the four
    /// allowed values.
    pub fn validate(self) -> Result<StatusRequest> {
        let state = self.state.parse()?;

        let context = if self.context.is_empty() {
            "default".to_string()
        } else {
            self.context
        };

        Ok(StatusRequest {
            owner: self.owner,
            repo: self.repo,
            sha: self.sha,
            status: CommitStatus {
                state,
                target_url: self.target_url,
                description: self.description,
                context,
            },
        })
    }
}

/// A validated status update: target coordinates plus the request body.
#[derive(Debug, Clone)]
pub struct StatusRequest {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Commit SHA the status attaches to.
    pub sha: String,

    /// The serializable status body.
    pub status: CommitStatus,
}

/// Request body for the statuses endpoint.
///
/// `target_url` and `description` are omitted from the JSON when unset;
/// `context` is always present (validation defaults it).
#[derive(Debug, Clone, Serialize)]
pub struct CommitStatus {
    /// Reported state.
    pub state: StatusState,

    /// URL linked from the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,

    /// Short description of the outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Status context, never empty.
    pub context: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn options(state: &str, context: &str) -> StatusOptions {
        StatusOptions {
            owner: "o".into(),
            repo: "r".into(),
            sha: "abc123".into(),
            state: state.into(),
            target_url: None,
            description: None,
            context: context.into(),
        }
    }

    #[test]
    fn test_parse_all_valid_states() {
        assert_eq!("error".parse::<StatusState>().unwrap(), StatusState::Error);
        assert_eq!(
            "failure".parse::<StatusState>().unwrap(),
            StatusState::Failure
        );
        assert_eq!(
            "pending".parse::<StatusState>().unwrap(),
            StatusState::Pending
        );
        assert_eq!(
            "success".parse::<StatusState>().unwrap(),
            StatusState::Success
        );
    }

    #[test]
    fn test_parse_invalid_state_names_value() {
        let err = "bogus".parse::<StatusState>().unwrap_err();
        assert!(matches!(&err, Error::InvalidState(s) if s == "bogus"));
        assert!(err.to_string().contains("'bogus'"));
    }

    #[test]
    fn test_parse_rejects_wrong_case() {
        assert!("Success".parse::<StatusState>().is_err());
        assert!("SUCCESS".parse::<StatusState>().is_err());
    }

    #[test]
    fn test_validate_defaults_empty_context() {
        let request = options("success", "").validate().unwrap();
        assert_eq!(request.status.context, "default");
    }

    #[test]
    fn test_validate_keeps_explicit_context() {
        let request = options("pending", "ci/lint").validate().unwrap();
        assert_eq!(request.status.context, "ci/lint");
    }

    #[test]
    fn test_validate_rejects_bad_state() {
        let err = options("done", "").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_body_omits_unset_optional_fields() {
        let request = options("success", "").validate().unwrap();
        let json = serde_json::to_string(&request.status).unwrap();
        assert_eq!(json, r#"{"state":"success","context":"default"}"#);
    }

    #[test]
    fn test_body_includes_optional_fields_when_set() {
        let mut opts = options("failure", "ci/test");
        opts.target_url = Some("https://ci.example.com/run/7".into());
        opts.description = Some("2 tests failed".into());

        let request = opts.validate().unwrap();
        let value = serde_json::to_value(&request.status).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "state": "failure",
                "target_url": "https://ci.example.com/run/7",
                "description": "2 tests failed",
                "context": "ci/test"
            })
        );
    }

    #[test]
    fn test_state_display_matches_wire_form() {
        assert_eq!(StatusState::Error.to_string(), "error");
        assert_eq!(StatusState::Success.to_string(), "success");
    }
}
