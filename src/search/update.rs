use crate::models::PlayerQuery;

use super::effect::Effect;
use super::msg::Msg;
use super::state::{
    FetchFailure, FetchState, RequestTicket, SearchModel, SearchState, TeamsStatus,
};

/// Pure update function: applies a message to the model and returns the
/// effects the runtime must perform.
///
/// Every message except `Mounted` is ignored while the view is not mounted.
pub fn update(mut model: SearchModel, msg: Msg) -> (SearchModel, Vec<Effect>) {
    if !model.mounted && !matches!(msg, Msg::Mounted) {
        if let Msg::PlayersLoaded { ticket, .. } = &msg {
            tracing::debug!(seq = ticket.seq, "Dropping player results for unmounted view");
        }
        return (model, Vec::new());
    }

    let effects = match msg {
        Msg::Mounted => {
            if model.mounted {
                return (model, Vec::new());
            }
            // A fresh mount starts from defaults. Tickets issued before it are stale.
            model.search = SearchState::default();
            model.last_applied_seq = model.next_seq - 1;
            model.players = FetchState::Idle;
            model.teams.clear();
            model.teams_status = TeamsStatus::Pending;
            model.mounted = true;
            let mut effects = vec![Effect::FetchTeams];
            effects.push(dispatch(&mut model));
            effects
        }
        Msg::InputChanged(text) => {
            model.search.raw_input = text;
            model.search.is_debouncing = true;
            model.debounce_generation += 1;
            vec![Effect::StartDebounce {
                generation: model.debounce_generation,
                delay: model.debounce,
            }]
        }
        Msg::DebounceElapsed { generation } => {
            if !model.search.is_debouncing || generation != model.debounce_generation {
                return (model, Vec::new());
            }
            let before = model.query();
            model.search.committed_term = model.search.raw_input.clone();
            model.search.current_page = 1;
            model.search.is_debouncing = false;
            refresh_if_changed(&mut model, &before)
        }
        Msg::TeamSelected(team_id) => {
            let before = model.query();
            model.search.selected_team_id = team_id;
            model.search.current_page = 1;
            refresh_if_changed(&mut model, &before)
        }
        Msg::PageSelected(page) => {
            if page == 0 {
                return (model, Vec::new());
            }
            let before = model.query();
            model.search.current_page = page;
            refresh_if_changed(&mut model, &before)
        }
        Msg::FiltersCleared => {
            let before = model.query();
            let mut effects = Vec::new();
            if model.search.is_debouncing {
                // Invalidate the running timer in case its message is already queued
                model.debounce_generation += 1;
                effects.push(Effect::CancelDebounce);
            }
            model.search.raw_input.clear();
            model.search.committed_term.clear();
            model.search.selected_team_id.clear();
            model.search.current_page = 1;
            model.search.is_debouncing = false;
            effects.extend(refresh_if_changed(&mut model, &before));
            effects
        }
        Msg::RetryRequested => vec![dispatch(&mut model)],
        Msg::PlayersLoaded { ticket, outcome } => {
            if !is_current(&model, &ticket) {
                tracing::debug!(
                    seq = ticket.seq,
                    last_applied = model.last_applied_seq,
                    "Discarding stale player results"
                );
                return (model, Vec::new());
            }
            model.last_applied_seq = ticket.seq;
            model.players = match outcome {
                Ok(page) => FetchState::Success(page),
                Err(err) => {
                    tracing::warn!(seq = ticket.seq, error = %err, "Player listing failed");
                    FetchState::Error(FetchFailure::from(&err))
                }
            };
            Vec::new()
        }
        Msg::TeamsLoaded(outcome) => {
            match outcome {
                Ok(teams) => {
                    model.teams = teams;
                    model.teams_status = TeamsStatus::Ready;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Team list unavailable, filter disabled");
                    model.teams.clear();
                    model.teams_status = TeamsStatus::Unavailable;
                }
            }
            Vec::new()
        }
        Msg::Unmounted => {
            model.mounted = false;
            model.search.is_debouncing = false;
            model.debounce_generation += 1;
            vec![Effect::CancelDebounce]
        }
    };

    (model, effects)
}

/// Issue a new ticket for the committed filters and mark the listing loading
fn dispatch(model: &mut SearchModel) -> Effect {
    let ticket = model.issue_ticket();
    model.players = FetchState::Loading;
    Effect::FetchPlayers(ticket)
}

fn refresh_if_changed(model: &mut SearchModel, before: &PlayerQuery) -> Vec<Effect> {
    if model.query() == *before {
        Vec::new()
    } else {
        vec![dispatch(model)]
    }
}

/// A result applies only to the filters committed right now, and never
/// overwrites a result from a later request.
fn is_current(model: &SearchModel, ticket: &RequestTicket) -> bool {
    ticket.query == model.query() && ticket.seq > model.last_applied_seq
}
