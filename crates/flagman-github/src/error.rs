//! Error types for flagman-github.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reporting a commit status.
///
/// Each variant corresponds to one stage of the reporting pipeline, so
/// callers can match on the discriminant instead of inspecting message
/// strings. Variants that wrap a lower-level failure expose it through
/// [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller supplied a state outside the allowed set.
    #[error("invalid status state '{0}' - must be error, failure, pending or success")]
    InvalidState(String),

    /// Status payload could not be encoded as JSON.
    #[error("failed to encode status payload")]
    Serialize(#[source] serde_json::Error),

    /// The HTTP request could not be constructed from the URL and body.
    #[error("failed to build status request")]
    BuildRequest(#[source] reqwest::Error),

    /// No token available from the configured credential source.
    #[error("no GitHub token found - run `gh auth login` or set GITHUB_TOKEN")]
    NoToken,

    /// The credential source failed while producing a token.
    #[error("failed to resolve GitHub credential")]
    Credential(#[source] std::io::Error),

    /// The resolved token is not usable as an Authorization header value.
    #[error("resolved GitHub token is not a valid header value")]
    MalformedToken,

    /// Network-level failure sending the request (DNS, refused, timeout).
    #[error("network error sending status request")]
    Network(#[source] reqwest::Error),

    /// GitHub answered with something other than 201 Created.
    ///
    /// The response body is intentionally not carried here: it is never
    /// read, so error text stays free of anything the server echoes back.
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
}
