//! Search, team filter and pagination coordination for the player listing
//!
//! The view state lives in a [`SearchModel`] that only changes through the
//! pure [`update`] function. `update` returns [`Effect`]s (start a debounce
//! timer, fetch a page, fetch teams) which [`SearchCoordinator`] performs on
//! tokio and feeds back as [`Msg`]s.
//!
//! # Flow
//!
//! ```text
//! keystroke ──► InputChanged ──► StartDebounce ──(delay)──► DebounceElapsed
//!                                                                │
//! team / page / clear ───────────────────────────────────────────┤
//!                                                                ▼
//!                                          committed filters changed?
//!                                                                │ yes
//!                                                                ▼
//!                              FetchPlayers(ticket{seq, snapshot}) ──► PlayerDirectory
//!                                                                │
//!                  PlayersLoaded(ticket, outcome) ◄──────────────┘
//!                          │
//!                          ▼
//!        applied only if snapshot == committed filters and seq is newest
//! ```

mod coordinator;
mod directory;
mod effect;
mod msg;
mod state;
mod update;

pub use coordinator::SearchCoordinator;
pub use directory::PlayerDirectory;
pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    FetchFailure, FetchState, RequestTicket, SearchModel, SearchState, TeamsStatus,
};
pub use update::update;
