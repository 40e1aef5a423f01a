use std::time::Duration;

use super::state::RequestTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// (Re)start the debounce timer, replacing any running one.
    StartDebounce { generation: u64, delay: Duration },
    CancelDebounce,
    FetchPlayers(RequestTicket),
    FetchTeams,
}
