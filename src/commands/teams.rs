use anyhow::{Context, Result};

use kickoff::config::Config;
use kickoff::models::TeamQuery;
use kickoff::services::Api;

pub async fn list(config: &Config, search: &str) -> Result<()> {
    let api = Api::new(&config.api).context("Failed to create API client")?;

    let teams = api
        .teams()
        .list(&TeamQuery::matching(search))
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to list teams")?;

    if teams.is_empty() {
        println!("No teams found.");
        return Ok(());
    }

    for team in teams {
        let mut line = format!("{}  {}", team.id, team.name);
        if let Some(league) = &team.league {
            line.push_str(&format!(" | {league}"));
        }
        if let Some(country) = &team.country {
            line.push_str(&format!(" | {country}"));
        }
        println!("{line}");
    }

    Ok(())
}
