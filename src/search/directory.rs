//! Data source seam between the coordinator and the resource services

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{PlayerPage, PlayerQuery, Team, TeamQuery};
use crate::services::Api;

/// Listing operations the search view depends on
///
/// Implemented by [`Api`] for the real server; tests provide in-memory
/// directories with controllable latency.
#[async_trait]
pub trait PlayerDirectory: Send + Sync + 'static {
    async fn list_players(&self, query: &PlayerQuery) -> Result<PlayerPage, ApiError>;

    async fn list_teams(&self) -> Result<Vec<Team>, ApiError>;
}

#[async_trait]
impl PlayerDirectory for Api {
    async fn list_players(&self, query: &PlayerQuery) -> Result<PlayerPage, ApiError> {
        self.players().list(query).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.teams().list(&TeamQuery::all()).await
    }
}
