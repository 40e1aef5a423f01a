//! Member account endpoints

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Account, AccountUpdate, Comment, PasswordChange};

const ACCOUNTS: &str = "accounts";

/// `/accounts` resource plus the caller's own comment listing
#[derive(Debug, Clone)]
pub struct AccountsService {
    client: ApiClient,
}

impl AccountsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /accounts` (member directory)
    pub async fn list(&self) -> Result<Vec<Account>> {
        self.client.get(&[ACCOUNTS]).await
    }

    pub async fn get(&self, id: &str) -> Result<Account> {
        self.client.get(&[ACCOUNTS, id]).await
    }

    pub async fn update(&self, id: &str, changes: &AccountUpdate) -> Result<Account> {
        self.client.put(&[ACCOUNTS, id], changes).await
    }

    /// `PUT /accounts/:id/password`
    pub async fn change_password(&self, id: &str, change: &PasswordChange) -> Result<()> {
        self.client.put(&[ACCOUNTS, id, "password"], change).await
    }

    /// `GET /auth/my-comments`
    pub async fn my_comments(&self) -> Result<Vec<Comment>> {
        self.client.get(&["auth", "my-comments"]).await
    }
}
