//! Resource services bound to the generic API client
//!
//! Each service maps one REST resource onto [`ApiClient`] calls. There is no
//! caching or validation here; errors from the client are returned as-is.

pub mod accounts;
pub mod auth;
pub mod players;
pub mod teams;

use crate::client::{ApiClient, Session};
use crate::config::ApiConfig;
use crate::error::ApiError;

pub use accounts::AccountsService;
pub use auth::AuthService;
pub use players::{CommentsService, PlayersService};
pub use teams::TeamsService;

/// Entry point bundling every resource service over one client
#[derive(Debug, Clone)]
pub struct Api {
    client: ApiClient,
}

impl Api {
    /// Build the API facade from configuration with a fresh session
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_session(config, Session::new())
    }

    /// Build the API facade sharing an existing session
    pub fn with_session(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        Ok(Self::from_client(ApiClient::new(config, session)?))
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    pub fn players(&self) -> PlayersService {
        PlayersService::new(self.client.clone())
    }

    pub fn teams(&self) -> TeamsService {
        TeamsService::new(self.client.clone())
    }

    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.client.clone())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }
}
