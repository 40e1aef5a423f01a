//! Process-wide session state holding the bearer credential
//!
//! Token storage is in-memory only. The client reads the access token for
//! every request; the auth service is the only writer.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::AuthTokens;

/// Shared handle to the current credentials
#[derive(Debug, Clone, Default)]
pub struct Session {
    tokens: Arc<RwLock<Option<AuthTokens>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-populated with tokens
    pub fn with_tokens(tokens: AuthTokens) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(Some(tokens))),
        }
    }

    pub async fn set(&self, tokens: AuthTokens) {
        *self.tokens.write().await = Some(tokens);
    }

    pub async fn clear(&self) {
        *self.tokens.write().await = None;
    }

    pub async fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .await
            .as_ref()
            .and_then(|t| t.refresh_token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.tokens.read().await.is_some()
    }
}
