use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::{ApiError, ErrorCategory};
use crate::models::{PlayerPage, PlayerQuery, Team};

/// Filter inputs owned by the search view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Text as typed, updated on every keystroke
    pub raw_input: String,
    /// Text actually used for fetching; lags `raw_input` by the debounce window
    pub committed_term: String,
    /// Empty means all teams
    pub selected_team_id: String,
    /// 1-indexed
    pub current_page: u32,
    pub is_debouncing: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            raw_input: String::new(),
            committed_term: String::new(),
            selected_team_id: String::new(),
            current_page: 1,
            is_debouncing: false,
        }
    }
}

/// Lifecycle of one asynchronous fetch
///
/// Each new request replaces the previous state wholesale; a failure does not
/// keep the data of an earlier success.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(FetchFailure),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        match self {
            Self::Error(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Display-ready description of a failed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
    pub category: ErrorCategory,
    pub retryable: bool,
}

impl From<&ApiError> for FetchFailure {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.user_message(),
            category: err.category(),
            retryable: err.is_retryable(),
        }
    }
}

/// Identity of a dispatched player-list request
///
/// Carries the filter snapshot it was built from so a late result can be
/// checked against the filters that are current when it lands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub seq: u64,
    pub query: PlayerQuery,
}

/// Availability of the team filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamsStatus {
    #[default]
    Pending,
    Ready,
    /// Fetch failed; the filter offers no team options for this mount
    Unavailable,
}

/// Complete state of one mounted search view
#[derive(Debug, Clone, PartialEq)]
pub struct SearchModel {
    pub(crate) search: SearchState,
    pub(crate) players: FetchState<PlayerPage>,
    pub(crate) teams: Vec<Team>,
    pub(crate) teams_status: TeamsStatus,
    pub(crate) page_size: u32,
    pub(crate) debounce: Duration,
    pub(crate) debounce_generation: u64,
    pub(crate) next_seq: u64,
    pub(crate) last_applied_seq: u64,
    pub(crate) mounted: bool,
}

impl Default for SearchModel {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl SearchModel {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            search: SearchState::default(),
            players: FetchState::Idle,
            teams: Vec::new(),
            teams_status: TeamsStatus::Pending,
            page_size: config.page_size,
            debounce: Duration::from_millis(config.debounce_ms),
            debounce_generation: 0,
            next_seq: 1,
            last_applied_seq: 0,
            mounted: false,
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn players(&self) -> &FetchState<PlayerPage> {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_status(&self) -> TeamsStatus {
        self.teams_status
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn debounce_generation(&self) -> u64 {
        self.debounce_generation
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Snapshot of the committed filters as sent to the server
    pub fn query(&self) -> PlayerQuery {
        PlayerQuery::new(
            &self.search.committed_term,
            &self.search.selected_team_id,
            self.search.current_page,
            self.page_size,
        )
    }

    pub(crate) fn issue_ticket(&mut self) -> RequestTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        RequestTicket {
            seq,
            query: self.query(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = SearchModel::default();
        assert_eq!(model.search().current_page, 1);
        assert!(model.search().raw_input.is_empty());
        assert_eq!(model.players(), &FetchState::Idle);
        assert_eq!(model.teams_status(), TeamsStatus::Pending);
        assert!(!model.is_mounted());
    }

    #[test]
    fn test_query_reflects_committed_not_raw() {
        let mut model = SearchModel::default();
        model.search.raw_input = "Mes".to_string();
        model.search.committed_term = "Messi".to_string();
        model.search.selected_team_id = "t9".to_string();
        model.search.current_page = 3;

        let query = model.query();
        assert_eq!(query.search.as_deref(), Some("Messi"));
        assert_eq!(query.team.as_deref(), Some("t9"));
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 12);
    }

    #[test]
    fn test_tickets_are_monotonic() {
        let mut model = SearchModel::default();
        let first = model.issue_ticket();
        let second = model.issue_ticket();
        assert!(second.seq > first.seq);
        assert_eq!(first.query, second.query);
    }

    #[test]
    fn test_fetch_failure_from_error() {
        let failure = FetchFailure::from(&ApiError::Network("refused".into()));
        assert!(failure.retryable);
        assert_eq!(failure.category, ErrorCategory::Network);

        let state: FetchState<()> = FetchState::Error(failure.clone());
        assert_eq!(state.error(), Some(&failure));
        assert!(state.data().is_none());
    }
}
