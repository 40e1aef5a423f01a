//! Common test utilities

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use kickoff::error::ApiError;
use kickoff::models::{PaginationInfo, Player, PlayerPage, PlayerQuery, Team, TeamRef};
use kickoff::search::PlayerDirectory;

pub type DelayFn = Box<dyn Fn(&PlayerQuery) -> Duration + Send + Sync>;

/// In-memory directory with per-query latency and one-shot failures
pub struct FakeDirectory {
    players: Vec<Player>,
    teams: Result<Vec<Team>, ApiError>,
    delay: DelayFn,
    fail_next: Mutex<Option<ApiError>>,
    panic_next: Mutex<bool>,
    calls: Mutex<Vec<PlayerQuery>>,
    team_calls: Mutex<usize>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self {
            players: roster(),
            teams: Ok(teams()),
            delay: Box::new(|_| Duration::ZERO),
            fail_next: Mutex::new(None),
            panic_next: Mutex::new(false),
            calls: Mutex::new(Vec::new()),
            team_calls: Mutex::new(0),
        }
    }

    pub fn with_delay(mut self, delay: impl Fn(&PlayerQuery) -> Duration + Send + Sync + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn with_team_error(mut self, err: ApiError) -> Self {
        self.teams = Err(err);
        self
    }

    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// Make the next player listing panic inside the directory task
    pub fn panic_next(&self) {
        *self.panic_next.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<PlayerQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<PlayerQuery> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn team_calls(&self) -> usize {
        *self.team_calls.lock().unwrap()
    }

    fn page_for(&self, query: &PlayerQuery) -> PlayerPage {
        let matching: Vec<Player> = self
            .players
            .iter()
            .filter(|p| match &query.search {
                Some(term) => p.name.to_lowercase().contains(&term.to_lowercase()),
                None => true,
            })
            .filter(|p| match &query.team {
                Some(team) => p.team.as_ref().is_some_and(|t| &t.id == team),
                None => true,
            })
            .cloned()
            .collect();

        let limit = query.limit.max(1) as usize;
        let total_items = matching.len();
        let total_pages = total_items.div_ceil(limit);
        let start = (query.page.saturating_sub(1) as usize) * limit;
        let items = matching.into_iter().skip(start).take(limit).collect();

        PlayerPage {
            items,
            pagination: PaginationInfo {
                current_page: query.page,
                total_pages: total_pages as u32,
                total_items: total_items as u64,
                page_size: query.limit,
            },
        }
    }
}

#[async_trait]
impl PlayerDirectory for FakeDirectory {
    async fn list_players(&self, query: &PlayerQuery) -> Result<PlayerPage, ApiError> {
        self.calls.lock().unwrap().push(query.clone());
        let failure = self.fail_next.lock().unwrap().take();
        let crash = std::mem::take(&mut *self.panic_next.lock().unwrap());
        if crash {
            panic!("directory crashed while listing players");
        }

        let delay = (self.delay)(query);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(self.page_for(query)),
        }
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        *self.team_calls.lock().unwrap() += 1;
        self.teams.clone()
    }
}

pub fn teams() -> Vec<Team> {
    vec![
        Team {
            id: "barca".to_string(),
            name: "Barcelona".to_string(),
            country: Some("Spain".to_string()),
            ..Default::default()
        },
        Team {
            id: "miami".to_string(),
            name: "Inter Miami".to_string(),
            country: Some("USA".to_string()),
            ..Default::default()
        },
    ]
}

fn player(id: &str, name: &str, team: Option<(&str, &str)>) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        position: Some("Midfielder".to_string()),
        team: team.map(|(id, name)| TeamRef {
            id: id.to_string(),
            name: name.to_string(),
        }),
        ..Default::default()
    }
}

/// 30 Barcelona squad players, Messi at Miami and Ronaldo without a club
pub fn roster() -> Vec<Player> {
    let mut players: Vec<Player> = (1..=30)
        .map(|n| player(&format!("b{n}"), &format!("Barca Player {n}"), Some(("barca", "Barcelona"))))
        .collect();
    players.push(player("m10", "Lionel Messi", Some(("miami", "Inter Miami"))));
    players.push(player("r7", "Cristiano Ronaldo", None));
    players
}
