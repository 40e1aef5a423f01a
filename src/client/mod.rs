//! Generic API client for the remote REST service
//!
//! Every resource service goes through [`ApiClient`]. It joins endpoint
//! paths onto the configured base URL, serializes JSON bodies and query
//! strings, attaches the bearer credential from the [`Session`], and unwraps
//! the uniform [`ResponseEnvelope`].
//!
//! There is no retry and no credential refresh here: a failed attempt is
//! returned to the caller as an [`ApiError`].

pub mod envelope;
pub mod session;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;

pub use envelope::{EnvelopeStatus, ResponseEnvelope};
pub use session::Session;

// ============================================================================
// API Client
// ============================================================================

/// Client bound to one API host
///
/// Cloning is cheap: the connection pool and the session are shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::Init(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Create a client with default settings against the given host
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        Self::new(&config, Session::new())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build the absolute URL for a list of path segments
    ///
    /// Segments are percent-encoded individually, so ids containing `/` or
    /// spaces cannot escape their position in the path.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and unwrap the response envelope
    pub async fn request<B, Q, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let mut builder = self.http.request(method.clone(), url.clone());

        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(token) = self.session.access_token().await {
            builder = builder.bearer_auth(token);
        }

        tracing::debug!(method = %method, url = %url, "Dispatching API request");

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "API request returned an error status"
            );
            return Err(ApiError::http(status, envelope::error_message(&bytes)));
        }

        envelope::decode_success(&bytes).inspect_err(|e| {
            if let ApiError::Decode(reason) = e {
                tracing::error!(url = %url, reason = %reason, "Response violated envelope contract");
            }
        })
    }

    /// GET without query parameters
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.request::<(), (), T>(Method::GET, segments, None, None)
            .await
    }

    /// GET with a serializable query object
    pub async fn get_query<Q, T>(&self, segments: &[&str], query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request::<(), Q, T>(Method::GET, segments, None, Some(query))
            .await
    }

    /// POST with a JSON body
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request::<B, (), T>(Method::POST, segments, Some(body), None)
            .await
    }

    /// POST without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.request::<(), (), T>(Method::POST, segments, None, None)
            .await
    }

    /// PUT with a JSON body
    pub async fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request::<B, (), T>(Method::PUT, segments, Some(body), None)
            .await
    }

    /// DELETE
    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.request::<(), (), T>(Method::DELETE, segments, None, None)
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================
