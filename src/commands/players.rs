use anyhow::{Context, Result};
use chrono::Local;

use kickoff::config::Config;
use kickoff::models::PlayerQuery;
use kickoff::services::Api;
use kickoff::view::{PaginationView, PlayerCard};

use super::render::card_line;

pub async fn list(config: &Config, search: &str, team: &str, page: u32, limit: u32) -> Result<()> {
    let api = Api::new(&config.api).context("Failed to create API client")?;
    let query = PlayerQuery::new(search, team, page, limit);

    let result = api
        .players()
        .list(&query)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to list players")?;

    if result.items.is_empty() {
        println!("No players found.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    for (i, player) in result.items.iter().enumerate() {
        println!("{}", card_line(i, &PlayerCard::from_player(player, today)));
    }
    let pagination = PaginationView::from(&result.pagination);
    println!();
    println!("{} ({} players)", pagination.label, pagination.total_items);

    Ok(())
}

pub async fn show(config: &Config, id: &str) -> Result<()> {
    let api = Api::new(&config.api).context("Failed to create API client")?;
    let players = api.players();

    let player = players
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .with_context(|| format!("Failed to load player {id}"))?;

    let card = PlayerCard::from_player(&player, Local::now().date_naive());
    println!("{}", card.name);
    println!("================================");
    println!("  Position: {}", card.position);
    println!("  Team: {}", card.team);
    if let Some(jersey) = &card.jersey {
        println!("  Number: {jersey}");
    }
    if let Some(nationality) = &card.nationality {
        println!("  Nationality: {nationality}");
    }
    if let Some(age) = card.age {
        println!("  Age: {age}");
    }
    println!(
        "  Apps {} | Goals {} | Assists {}",
        player.stats.appearances, player.stats.goals, player.stats.assists
    );

    // Comments are optional decoration; a failure here should not hide the player
    match players.comments(id).list().await {
        Ok(comments) if comments.is_empty() => println!("\nNo comments yet."),
        Ok(comments) => {
            println!("\nComments:");
            for comment in comments {
                let author = comment
                    .author
                    .as_ref()
                    .map(|a| a.name.as_str())
                    .unwrap_or("anonymous");
                println!("  - {author}: {}", comment.content);
            }
        }
        Err(e) => tracing::warn!("Failed to load comments: {}", e),
    }

    Ok(())
}
