//! Trait abstractions for the status-reporting pipeline.
//!
//! [`StatusApi`] is the caller-facing seam, [`Transport`] the seam between
//! request construction and the single HTTP send. Both exist for
//! dependency injection: callers pass implementations in rather than the
//! pipeline reading anything process-wide, and tests substitute stubs to
//! assert which stages ran.

use crate::Result;
use crate::status::StatusOptions;

/// Trait for posting commit statuses.
pub trait StatusApi: Send + Sync {
    /// Post one commit status for a revision.
    ///
    /// Returns `Ok(())` only when GitHub acknowledges the status with
    /// 201 Created.
    fn post_status(
        &self,
        options: StatusOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Trait for the single HTTP send at the bottom of the pipeline.
///
/// Implementations perform exactly one attempt and report only the
/// response status code; the response body is never read, and the
/// response is released before the call returns.
pub trait Transport: Send + Sync {
    /// Execute the request, returning the HTTP status code.
    fn execute(
        &self,
        request: reqwest::Request,
    ) -> impl std::future::Future<Output = Result<u16>> + Send;
}
