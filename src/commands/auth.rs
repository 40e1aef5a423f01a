use anyhow::{Context, Result};

use kickoff::config::Config;
use kickoff::models::Credentials;
use kickoff::services::Api;

pub async fn signin(config: &Config, email: String, password: String) -> Result<()> {
    let api = Api::new(&config.api).context("Failed to create API client")?;
    let auth = api.auth();

    auth.signin(&Credentials { email, password })
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Sign-in failed")?;

    let profile = auth
        .profile()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to load profile")?;

    println!("Signed in as {} <{}>", profile.name, profile.email);
    println!("  Role: {:?}", profile.role);

    let comments = api
        .accounts()
        .my_comments()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to load your comments")?;
    println!("  Comments written: {}", comments.len());

    if let Err(e) = auth.logout().await {
        tracing::warn!("Logout failed: {}", e);
    }

    Ok(())
}
