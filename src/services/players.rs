//! Player and player-comment endpoints

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Comment, NewComment, NewPlayer, Player, PlayerPage, PlayerQuery, PlayerUpdate};

const PLAYERS: &str = "players";
const COMMENTS: &str = "comments";

/// `/players` resource
#[derive(Debug, Clone)]
pub struct PlayersService {
    client: ApiClient,
}

impl PlayersService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /players?search=&team=&page=&limit=`
    pub async fn list(&self, query: &PlayerQuery) -> Result<PlayerPage> {
        self.client.get_query(&[PLAYERS], query).await
    }

    /// `GET /players/:id`
    pub async fn get(&self, id: &str) -> Result<Player> {
        self.client.get(&[PLAYERS, id]).await
    }

    /// `POST /players`
    pub async fn create(&self, player: &NewPlayer) -> Result<Player> {
        self.client.post(&[PLAYERS], player).await
    }

    /// `PUT /players/:id`
    pub async fn update(&self, id: &str, changes: &PlayerUpdate) -> Result<Player> {
        self.client.put(&[PLAYERS, id], changes).await
    }

    /// `DELETE /players/:id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&[PLAYERS, id]).await
    }

    /// Comment operations scoped to one player
    pub fn comments(&self, player_id: impl Into<String>) -> CommentsService {
        CommentsService {
            client: self.client.clone(),
            player_id: player_id.into(),
        }
    }
}

/// `/players/:id/comments` resource
#[derive(Debug, Clone)]
pub struct CommentsService {
    client: ApiClient,
    player_id: String,
}

impl CommentsService {
    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub async fn list(&self) -> Result<Vec<Comment>> {
        self.client
            .get(&[PLAYERS, self.player_id.as_str(), COMMENTS])
            .await
    }

    pub async fn add(&self, comment: &NewComment) -> Result<Comment> {
        self.client
            .post(&[PLAYERS, self.player_id.as_str(), COMMENTS], comment)
            .await
    }

    pub async fn update(&self, comment_id: &str, comment: &NewComment) -> Result<Comment> {
        self.client
            .put(&[PLAYERS, self.player_id.as_str(), COMMENTS, comment_id], comment)
            .await
    }

    pub async fn delete(&self, comment_id: &str) -> Result<()> {
        self.client
            .delete(&[PLAYERS, self.player_id.as_str(), COMMENTS, comment_id])
            .await
    }
}
