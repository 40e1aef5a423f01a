//! Search coordinator behaviour on a paused tokio clock
//!
//! These tests drive `SearchCoordinator` against an in-memory directory so
//! debounce windows and response latency are deterministic.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::FakeDirectory;
use kickoff::config::SearchConfig;
use kickoff::error::{ApiError, ErrorCategory};
use kickoff::search::{FetchState, SearchCoordinator, TeamsStatus};

fn config() -> SearchConfig {
    SearchConfig {
        debounce_ms: 500,
        page_size: 12,
    }
}

async fn mounted(directory: Arc<FakeDirectory>) -> SearchCoordinator<FakeDirectory> {
    let mut search = SearchCoordinator::mount(directory, &config());
    search.settle().await;
    search
}

fn names(search: &SearchCoordinator<FakeDirectory>) -> Vec<String> {
    search
        .model()
        .players()
        .data()
        .map(|page| page.items.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test(start_paused = true)]
async fn test_mount_loads_teams_and_first_page() {
    let directory = Arc::new(FakeDirectory::new());
    let search = mounted(directory.clone()).await;

    assert_eq!(directory.team_calls(), 1);
    assert_eq!(directory.calls().len(), 1);
    assert_eq!(search.model().teams_status(), TeamsStatus::Ready);
    assert_eq!(search.model().teams().len(), 2);

    let page = search.model().players().data().expect("first page loaded");
    assert_eq!(page.items.len(), 12);
    assert_eq!(page.pagination.total_pages, 3);
    assert!(!search.has_pending_work());
}

#[tokio::test(start_paused = true)]
async fn test_typing_within_window_commits_once_after_pause() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    for prefix in ["M", "Me", "Mes", "Mess", "Messi"] {
        search.input_changed(prefix);
        tokio::time::advance(Duration::from_millis(60)).await;
    }

    // 300ms of typing: nothing committed, nothing fetched
    assert!(search.model().search().is_debouncing);
    assert!(search.model().search().committed_term.is_empty());
    assert_eq!(directory.calls().len(), 1);

    assert!(search.next_event().await);
    assert_eq!(search.model().search().committed_term, "Messi");
    assert_eq!(search.model().search().current_page, 1);
    assert!(!search.model().search().is_debouncing);

    search.settle().await;
    let calls = directory.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].search.as_deref(), Some("Messi"));
    assert_eq!(calls[1].page, 1);
    assert_eq!(names(&search), vec!["Lionel Messi".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_never_overwrites_newer_filters() {
    let directory = Arc::new(FakeDirectory::new().with_delay(|query| {
        match query.search.as_deref() {
            Some("Messi") => Duration::from_secs(2),
            _ => Duration::from_millis(10),
        }
    }));
    let mut search = mounted(directory.clone()).await;

    search.input_changed("Messi");
    assert!(search.next_event().await); // commit, slow request in flight
    assert!(search.model().players().is_loading());

    search.input_changed("Ronaldo");
    search.settle().await;

    let searched: Vec<_> = directory
        .calls()
        .iter()
        .map(|q| q.search.clone())
        .collect();
    assert_eq!(
        searched,
        vec![None, Some("Messi".to_string()), Some("Ronaldo".to_string())]
    );
    assert_eq!(search.model().search().committed_term, "Ronaldo");
    assert_eq!(names(&search), vec!["Cristiano Ronaldo".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_team_selection_resets_page() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    search.select_page(3);
    search.settle().await;
    assert_eq!(directory.last_call().unwrap().page, 3);

    search.select_team("barca");
    assert_eq!(search.model().search().current_page, 1);
    search.settle().await;

    let last = directory.last_call().unwrap();
    assert_eq!(last.team.as_deref(), Some("barca"));
    assert_eq!(last.page, 1);
}

#[tokio::test(start_paused = true)]
async fn test_page_click_keeps_filters() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    search.select_team("barca");
    search.input_changed("Barca");
    search.settle().await;
    let before = search.model().search().clone();

    search.select_page(2);
    search.settle().await;

    let last = directory.last_call().unwrap();
    assert_eq!(last.search.as_deref(), Some("Barca"));
    assert_eq!(last.team.as_deref(), Some("barca"));
    assert_eq!(last.page, 2);
    assert_eq!(search.model().search().committed_term, before.committed_term);
    assert_eq!(search.model().search().selected_team_id, before.selected_team_id);
    assert_eq!(
        search.model().players().data().unwrap().pagination.current_page,
        2
    );
}

#[tokio::test(start_paused = true)]
async fn test_network_failure_clears_data_and_retry_recovers() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;
    assert!(search.model().players().data().is_some());

    directory.fail_next(ApiError::Network("connection refused".into()));
    search.select_page(2);
    search.settle().await;

    let FetchState::Error(failure) = search.model().players() else {
        panic!("expected error state, got {:?}", search.model().players());
    };
    assert!(failure.retryable);
    assert_eq!(
        failure.message,
        "Unable to reach the server. Check your connection and retry."
    );
    assert!(search.model().players().data().is_none());

    search.retry();
    search.settle().await;
    assert_eq!(directory.calls().len(), 3);
    assert_eq!(
        search.model().players().data().unwrap().pagination.current_page,
        2
    );
}

#[tokio::test(start_paused = true)]
async fn test_team_failure_does_not_block_search() {
    let directory = Arc::new(
        FakeDirectory::new().with_team_error(ApiError::Http {
            status: 503,
            message: "Service Unavailable".into(),
        }),
    );
    let search = mounted(directory.clone()).await;

    assert_eq!(search.model().teams_status(), TeamsStatus::Unavailable);
    assert!(search.model().teams().is_empty());
    assert!(search.model().players().data().is_some());
    assert_eq!(directory.team_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unmount_cancels_pending_debounce() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    search.input_changed("Kane");
    search.unmount();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(!search.has_pending_work());
    assert!(!search.next_event().await);
    assert!(search.model().search().committed_term.is_empty());
    assert_eq!(directory.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clear_filters_returns_to_unfiltered_first_page() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    search.select_team("miami");
    search.input_changed("Lionel");
    search.settle().await;
    search.input_changed("Lio");
    search.clear_filters();
    search.settle().await;

    let state = search.model().search();
    assert!(state.raw_input.is_empty());
    assert!(state.committed_term.is_empty());
    assert!(state.selected_team_id.is_empty());
    assert_eq!(state.current_page, 1);

    let last = directory.last_call().unwrap();
    assert_eq!(last.search, None);
    assert_eq!(last.team, None);
}

#[tokio::test(start_paused = true)]
async fn test_same_filters_twice_yield_same_results() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    search.select_team("barca");
    search.settle().await;
    let first = search.model().players().clone();

    search.retry();
    search.settle().await;

    assert_eq!(search.model().players(), &first);
    assert_eq!(directory.calls().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_reselecting_current_team_does_not_refetch() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    search.select_team("barca");
    search.settle().await;
    search.select_team("barca");

    assert!(!search.has_pending_work());
    assert_eq!(directory.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_panicking_directory_still_settles() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    directory.panic_next();
    search.select_page(2);
    let settled = tokio::time::timeout(Duration::from_secs(5), search.settle()).await;
    assert!(settled.is_ok(), "settle must return after a crashed fetch");
    assert!(!search.has_pending_work());

    let failure = search.model().players().error().expect("crash surfaces as an error");
    assert_eq!(failure.category, ErrorCategory::Internal);
    assert_eq!(failure.message, "Something went wrong.");

    search.retry();
    search.settle().await;
    assert_eq!(
        search.model().players().data().unwrap().pagination.current_page,
        2
    );
}

#[tokio::test(start_paused = true)]
async fn test_remount_resets_filters() {
    let directory = Arc::new(FakeDirectory::new());
    let mut search = mounted(directory.clone()).await;

    search.select_team("barca");
    search.select_page(2);
    search.settle().await;
    search.input_changed("Kane");
    search.unmount();

    search.dispatch(kickoff::search::Msg::Mounted);
    search.settle().await;

    assert_eq!(directory.team_calls(), 2);
    let last = directory.last_call().unwrap();
    assert_eq!(last.team, None);
    assert_eq!(last.search, None);
    assert_eq!(last.page, 1);
    assert!(search.model().search().raw_input.is_empty());
    assert_eq!(search.model().teams_status(), TeamsStatus::Ready);
}
