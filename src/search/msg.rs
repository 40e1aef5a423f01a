use crate::error::ApiError;
use crate::models::{PlayerPage, Team};

use super::state::RequestTicket;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// View attached; kicks off the team fetch and the first listing.
    Mounted,
    /// User typed in the search box (raw, not yet debounced).
    InputChanged(String),
    /// Debounce timer for the given generation fired.
    DebounceElapsed { generation: u64 },
    /// User picked a team filter; empty string means all teams.
    TeamSelected(String),
    /// User clicked a page number.
    PageSelected(u32),
    /// User reset every filter.
    FiltersCleared,
    /// User asked to retry the current listing.
    RetryRequested,
    /// A player-list request finished.
    PlayersLoaded {
        ticket: RequestTicket,
        outcome: Result<PlayerPage, ApiError>,
    },
    /// The team-list request finished.
    TeamsLoaded(Result<Vec<Team>, ApiError>),
    /// View detached.
    Unmounted,
}
