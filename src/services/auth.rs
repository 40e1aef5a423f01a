//! Session lifecycle endpoints
//!
//! Sign-in and sign-up store the issued tokens in the shared [`Session`];
//! every later request picks them up as a bearer header.

use crate::client::{ApiClient, Session};
use crate::error::{ApiError, Result};
use crate::models::{Account, AuthSession, AuthTokens, Credentials, RefreshRequest, SignupRequest};

const AUTH: &str = "auth";

/// `/auth` resource
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn session(&self) -> &Session {
        self.client.session()
    }

    /// `POST /auth/signin`
    pub async fn signin(&self, credentials: &Credentials) -> Result<AuthSession> {
        let issued: AuthSession = self.client.post(&[AUTH, "signin"], credentials).await?;
        self.session().set(issued.tokens.clone()).await;
        tracing::info!("Signed in");
        Ok(issued)
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthSession> {
        let issued: AuthSession = self.client.post(&[AUTH, "signup"], request).await?;
        self.session().set(issued.tokens.clone()).await;
        Ok(issued)
    }

    /// `GET /auth/profile`
    pub async fn profile(&self) -> Result<Account> {
        self.client.get(&[AUTH, "profile"]).await
    }

    /// `POST /auth/logout`
    ///
    /// Local credentials are dropped even when the server call fails.
    pub async fn logout(&self) -> Result<()> {
        let result = self.client.post_empty::<()>(&[AUTH, "logout"]).await;
        self.session().clear().await;
        if let Err(e) = &result {
            tracing::warn!("Logout request failed, local session cleared anyway: {}", e);
        }
        result
    }

    /// `POST /auth/refresh`
    pub async fn refresh(&self) -> Result<AuthTokens> {
        let refresh_token = self
            .session()
            .refresh_token()
            .await
            .ok_or_else(|| ApiError::Rejected("No refresh token in session".to_string()))?;

        let mut tokens: AuthTokens = self
            .client
            .post(
                &[AUTH, "refresh"],
                &RefreshRequest {
                    refresh_token: refresh_token.clone(),
                },
            )
            .await?;
        // Servers that do not rotate refresh tokens omit it from the response
        if tokens.refresh_token.is_none() {
            tokens.refresh_token = Some(refresh_token);
        }
        self.session().set(tokens.clone()).await;
        Ok(tokens)
    }
}
