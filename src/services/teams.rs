//! Team endpoints

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{NewTeam, Team, TeamList, TeamQuery, TeamUpdate};

const TEAMS: &str = "teams";

/// `/teams` resource
#[derive(Debug, Clone)]
pub struct TeamsService {
    client: ApiClient,
}

impl TeamsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /teams?search=`
    pub async fn list(&self, query: &TeamQuery) -> Result<Vec<Team>> {
        let list: TeamList = self.client.get_query(&[TEAMS], query).await?;
        Ok(list.items)
    }

    pub async fn get(&self, id: &str) -> Result<Team> {
        self.client.get(&[TEAMS, id]).await
    }

    pub async fn create(&self, team: &NewTeam) -> Result<Team> {
        self.client.post(&[TEAMS], team).await
    }

    pub async fn update(&self, id: &str, changes: &TeamUpdate) -> Result<Team> {
        self.client.put(&[TEAMS, id], changes).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&[TEAMS, id]).await
    }
}
