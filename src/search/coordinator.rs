//! Runtime driving the search model
//!
//! The model is owned by the coordinator and only touched from the task that
//! calls into it. Timers and fetches run as spawned tasks that report back
//! through an unbounded channel; `next_event` applies those reports one at a
//! time.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::SearchConfig;
use crate::error::ApiError;
use crate::view::SearchViewModel;

use super::directory::PlayerDirectory;
use super::effect::Effect;
use super::msg::Msg;
use super::state::SearchModel;
use super::update::update;

/// Mounted search view bound to a [`PlayerDirectory`]
///
/// Must be created inside a tokio runtime. Dropping the coordinator aborts
/// the debounce timer; fetches already in flight finish but their results
/// go nowhere.
pub struct SearchCoordinator<D: PlayerDirectory> {
    model: SearchModel,
    directory: Arc<D>,
    events_tx: mpsc::UnboundedSender<Msg>,
    events_rx: mpsc::UnboundedReceiver<Msg>,
    debounce_timer: Option<JoinHandle<()>>,
    pending_fetches: usize,
}

impl<D: PlayerDirectory> SearchCoordinator<D> {
    /// Create the model and mount it, dispatching the initial fetches
    pub fn mount(directory: Arc<D>, config: &SearchConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut coordinator = Self {
            model: SearchModel::new(config),
            directory,
            events_tx,
            events_rx,
            debounce_timer: None,
            pending_fetches: 0,
        };
        coordinator.dispatch(Msg::Mounted);
        coordinator
    }

    pub fn model(&self) -> &SearchModel {
        &self.model
    }

    /// Presentation view of the current model
    pub fn view(&self, today: NaiveDate) -> SearchViewModel {
        SearchViewModel::from_model(&self.model, today)
    }

    /// Whether a timer or fetch is still expected to report back
    pub fn has_pending_work(&self) -> bool {
        self.model.is_mounted() && (self.pending_fetches > 0 || self.model.search().is_debouncing)
    }

    /// Apply a message and perform the resulting effects
    pub fn dispatch(&mut self, msg: Msg) {
        let model = std::mem::take(&mut self.model);
        let (model, effects) = update(model, msg);
        self.model = model;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    pub fn input_changed(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::InputChanged(text.into()));
    }

    pub fn select_team(&mut self, team_id: impl Into<String>) {
        self.dispatch(Msg::TeamSelected(team_id.into()));
    }

    pub fn select_page(&mut self, page: u32) {
        self.dispatch(Msg::PageSelected(page));
    }

    pub fn clear_filters(&mut self) {
        self.dispatch(Msg::FiltersCleared);
    }

    pub fn retry(&mut self) {
        self.dispatch(Msg::RetryRequested);
    }

    pub fn unmount(&mut self) {
        self.dispatch(Msg::Unmounted);
        self.cancel_timer();
    }

    /// Wait for the next timer or fetch report and apply it
    ///
    /// Returns `false` without waiting when nothing is pending.
    pub async fn next_event(&mut self) -> bool {
        if !self.has_pending_work() {
            return false;
        }
        let Some(msg) = self.events_rx.recv().await else {
            return false;
        };
        if matches!(msg, Msg::PlayersLoaded { .. } | Msg::TeamsLoaded(_)) {
            self.pending_fetches = self.pending_fetches.saturating_sub(1);
        }
        if let Msg::DebounceElapsed { generation } = msg {
            if generation == self.model.debounce_generation() {
                self.debounce_timer = None;
            }
        }
        self.dispatch(msg);
        true
    }

    /// Process reports until no timer or fetch is outstanding
    pub async fn settle(&mut self) {
        while self.next_event().await {}
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartDebounce { generation, delay } => {
                self.cancel_timer();
                let tx = self.events_tx.clone();
                self.debounce_timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Msg::DebounceElapsed { generation });
                }));
            }
            Effect::CancelDebounce => self.cancel_timer(),
            Effect::FetchPlayers(ticket) => {
                tracing::debug!(
                    seq = ticket.seq,
                    search = ?ticket.query.search,
                    team = ?ticket.query.team,
                    page = ticket.query.page,
                    "Fetching players"
                );
                self.pending_fetches += 1;
                let tx = self.events_tx.clone();
                let directory = Arc::clone(&self.directory);
                let query = ticket.query.clone();
                tokio::spawn(async move {
                    let outcome =
                        run_fetch(async move { directory.list_players(&query).await }).await;
                    let _ = tx.send(Msg::PlayersLoaded { ticket, outcome });
                });
            }
            Effect::FetchTeams => {
                self.pending_fetches += 1;
                let tx = self.events_tx.clone();
                let directory = Arc::clone(&self.directory);
                tokio::spawn(async move {
                    let outcome = run_fetch(async move { directory.list_teams().await }).await;
                    let _ = tx.send(Msg::TeamsLoaded(outcome));
                });
            }
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.debounce_timer.take() {
            timer.abort();
        }
    }
}

/// Run a directory call on its own task so a panic still yields a result
///
/// Every dispatched fetch must report back, otherwise `pending_fetches`
/// never drains and `settle` waits forever.
async fn run_fetch<T, F>(fetch: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    match tokio::spawn(fetch).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Directory task ended without a result");
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

impl<D: PlayerDirectory> Drop for SearchCoordinator<D> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
