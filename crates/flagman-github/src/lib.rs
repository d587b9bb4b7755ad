//! # flagman-github
//!
//! GitHub commit status reporting for Flagman, posting one status per
//! CI pipeline stage outcome.
//!
//! # Security
//!
//! Tokens are handled as `SecretString`, which zeroizes memory when
//! dropped. Credentials are resolved through the [`CredentialSource`]
//! capability at the last point before sending, never cached, and never
//! included in error text.

mod auth;
mod client;
mod error;
mod status;
mod traits;

pub use auth::{Auth, CredentialSource};
pub use client::{GitHubClient, HttpTransport};
pub use error::{Error, Result};
// Re-export SecretString for constructing Auth::Token
pub use secrecy::SecretString;
pub use status::{CommitStatus, StatusOptions, StatusRequest, StatusState};
pub use traits::{StatusApi, Transport};
