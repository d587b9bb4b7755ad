//! GitHub commit status client.
//!
//! One call to [`GitHubClient::post_status`] walks a linear, fail-fast
//! pipeline: validate the caller options, build the request, resolve the
//! credential, send once, interpret the status code. A stage failure
//! short-circuits everything after it, so invalid input never resolves a
//! token and a failed resolution never touches the network.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use crate::auth::{Auth, CredentialSource};
use crate::error::{Error, Result};
use crate::status::{StatusOptions, StatusRequest};
use crate::traits::{StatusApi, Transport};

/// HTTP transport backed by a shared [`reqwest::Client`].
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with its own connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: reqwest::Request) -> Result<u16> {
        let response = self.client.execute(request).await.map_err(Error::Network)?;

        // The body is never read; dropping the response here releases the
        // stream on the success and error interpretation paths alike.
        Ok(response.status().as_u16())
    }
}

/// GitHub commit status client.
///
/// Generic over the [`Transport`] so tests can count sends; production
/// code uses the [`HttpTransport`] default.
pub struct GitHubClient<T = HttpTransport> {
    /// Used only to assemble requests, never to send them.
    http: Client,
    transport: T,
    base_url: String,
    credentials: Box<dyn CredentialSource>,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new client for the public GitHub API.
    #[must_use]
    pub fn new(auth: Auth) -> Self {
        Self::with_base_url(auth, Self::DEFAULT_API_URL)
    }

    /// Create a new client with a custom API URL (for GitHub Enterprise).
    #[must_use]
    pub fn with_base_url(auth: Auth, base_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(), auth, base_url)
    }
}

impl<T: Transport> GitHubClient<T> {
    /// Create a client with explicit transport and credential source.
    #[must_use]
    pub fn with_transport(
        transport: T,
        credentials: impl CredentialSource + 'static,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            transport,
            base_url: base_url.into(),
            credentials: Box::new(credentials),
        }
    }

    /// Post one commit status for a revision.
    ///
    /// Exactly one POST attempt is made; there is no retry. Success means
    /// GitHub answered 201 Created, any other code is reported as
    /// [`Error::UnexpectedStatus`] without reading the response body.
    ///
    /// # Errors
    /// Returns the first pipeline stage failure: validation, request
    /// construction, credential resolution, network, or an unexpected
    /// status code.
    pub async fn post_status(&self, options: StatusOptions) -> Result<()> {
        let status = options.validate()?;
        let mut request = self.build_status_request(&status)?;

        // Resolved at the last point before sending; the plaintext lives
        // only on this stack frame.
        let token = self.credentials.resolve()?;
        attach_bearer(&mut request, &token)?;

        let code = self.transport.execute(request).await?;
        if code == StatusCode::CREATED.as_u16() {
            Ok(())
        } else {
            Err(Error::UnexpectedStatus(code))
        }
    }

    /// Build the statuses request: URL, fixed headers, serialized body.
    ///
    /// The Authorization header is attached separately, after credential
    /// resolution, so a construction failure surfaces before any token is
    /// produced.
    fn build_status_request(&self, status: &StatusRequest) -> Result<reqwest::Request> {
        let url = format!(
            "{}/repos/{}/{}/statuses/{}",
            self.base_url, status.owner, status.repo, status.sha
        );
        let body = serde_json::to_vec(&status.status).map_err(Error::Serialize)?;

        self.http
            .post(&url)
            .header(ACCEPT, HeaderValue::from_static("application/vnd.github+json"))
            .header(USER_AGENT, HeaderValue::from_static("flagman"))
            .header(
                "X-GitHub-Api-Version",
                HeaderValue::from_static("2022-11-28"),
            )
            .body(body)
            .build()
            .map_err(Error::BuildRequest)
    }
}

/// Insert the bearer token, marked sensitive so it is skipped by header
/// debug output.
fn attach_bearer(request: &mut reqwest::Request, token: &SecretString) -> Result<()> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|_| Error::MalformedToken)?;
    value.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}

impl<T: Transport> StatusApi for GitHubClient<T> {
    async fn post_status(&self, options: StatusOptions) -> Result<()> {
        self.post_status(options).await
    }
}

impl<T> std::fmt::Debug for GitHubClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("credentials", &"[redacted]")
            .finish_non_exhaustive()
    }
}
