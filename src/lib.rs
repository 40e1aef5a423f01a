//! kickoff - Football player management client
//!
//! Typed client for the player management REST API together with the
//! search/filter/pagination coordinator behind the player listing page.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`error`] - Error taxonomy shared by every API call
//! - [`models`] - Players, teams, comments, accounts and request payloads
//! - [`client`] - Generic API client, response envelope and session
//! - [`services`] - Per-resource services (players, teams, accounts, auth)
//! - [`search`] - Debounced search, team filter and pagination coordinator
//! - [`view`] - Presentation-agnostic view model for the listing page
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use kickoff::config::Config;
//! use kickoff::search::SearchCoordinator;
//! use kickoff::services::Api;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let api = Arc::new(Api::new(&config.api)?);
//!     let mut search = SearchCoordinator::mount(api, &config.search);
//!     search.input_changed("Messi");
//!     search.settle().await;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod services;
pub mod view;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{ApiClient, ResponseEnvelope, Session};
    pub use crate::config::Config;
    pub use crate::error::{ApiError, ErrorCategory, Result};
    pub use crate::models::{PaginationInfo, Player, PlayerPage, PlayerQuery, Team};
    pub use crate::search::{FetchState, PlayerDirectory, SearchCoordinator, SearchModel};
    pub use crate::services::Api;
    pub use crate::view::SearchViewModel;
}

// Direct re-exports for convenience
pub use models::{PaginationInfo, Player, PlayerPage, Team};
