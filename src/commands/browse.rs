//! Interactive search loop driven by stdin
//!
//! Every line is one user intent. Plain text replaces the search box
//! contents; lines starting with `:` are commands.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};

use kickoff::config::Config;
use kickoff::search::SearchCoordinator;
use kickoff::services::Api;

use super::render;

#[derive(Debug, PartialEq, Eq)]
enum Intent {
    Type(String),
    Team(String),
    Page(u32),
    Clear,
    Retry,
    Quit,
    Unknown(String),
}

fn parse_intent(line: &str) -> Intent {
    let Some(command) = line.strip_prefix(':') else {
        return Intent::Type(line.to_string());
    };
    let mut parts = command.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match name {
        "team" => Intent::Team(arg.to_string()),
        "page" => match arg.parse::<u32>() {
            Ok(page) if page > 0 => Intent::Page(page),
            _ => Intent::Unknown(line.to_string()),
        },
        "clear" => Intent::Clear,
        "retry" => Intent::Retry,
        "quit" | "q" => Intent::Quit,
        _ => Intent::Unknown(line.to_string()),
    }
}

pub async fn browse(config: &Config) -> Result<()> {
    let api = Arc::new(Api::new(&config.api).context("Failed to create API client")?);
    let mut search = SearchCoordinator::mount(api, &config.search);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Type to search. Commands: :team <id>, :page <n>, :clear, :retry, :quit");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                match parse_intent(&line) {
                    Intent::Type(text) => search.input_changed(text),
                    Intent::Team(id) => search.select_team(id),
                    Intent::Page(page) => search.select_page(page),
                    Intent::Clear => search.clear_filters(),
                    Intent::Retry => search.retry(),
                    Intent::Quit => break,
                    Intent::Unknown(raw) => {
                        println!("Unknown command: {raw}");
                        continue;
                    }
                }
            }
            applied = search.next_event(), if search.has_pending_work() => {
                if !applied {
                    continue;
                }
            }
        }
        print!("{}", render::search_view(&search.view(Local::now().date_naive())));
    }

    search.unmount();
    Ok(())
}
