//! Presentation-agnostic view model for the player search page
//!
//! Converts a [`SearchModel`] into plain display values. Rendering (terminal,
//! web, anything else) only reads these structs.

use chrono::NaiveDate;

use crate::models::{PaginationInfo, Player};
use crate::search::{FetchState, SearchModel, TeamsStatus};

/// Label of the catch-all team option
pub const ALL_TEAMS_LABEL: &str = "All teams";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOption {
    /// Empty for "All teams"
    pub id: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub nationality: Option<String>,
    pub jersey: Option<String>,
    pub age: Option<u32>,
    pub image_url: Option<String>,
}

impl PlayerCard {
    pub fn from_player(player: &Player, today: NaiveDate) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            position: player
                .position
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            team: player
                .team
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Free agent".to_string()),
            nationality: player.nationality.clone(),
            jersey: player.jersey_number.map(|n| format!("#{n}")),
            age: player.age_on(today),
            image_url: player.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub total_items: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl From<&PaginationInfo> for PaginationView {
    fn from(info: &PaginationInfo) -> Self {
        Self {
            label: format!("Page {} of {}", info.current_page, info.total_pages.max(1)),
            total_items: info.total_items,
            has_previous: info.has_previous(),
            has_next: info.has_next(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    /// Network and server failures offer a manual retry
    pub retry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchViewModel {
    pub input: String,
    pub debouncing: bool,
    pub status: ViewStatus,
    pub team_options: Vec<TeamOption>,
    pub team_filter_available: bool,
    pub cards: Vec<PlayerCard>,
    pub pagination: Option<PaginationView>,
    pub error: Option<ErrorBanner>,
    pub empty_message: Option<String>,
}

impl SearchViewModel {
    pub fn from_model(model: &SearchModel, today: NaiveDate) -> Self {
        let search = model.search();

        let mut team_options = vec![TeamOption {
            id: String::new(),
            label: ALL_TEAMS_LABEL.to_string(),
            selected: search.selected_team_id.is_empty(),
        }];
        team_options.extend(model.teams().iter().map(|team| TeamOption {
            id: team.id.clone(),
            label: team.name.clone(),
            selected: team.id == search.selected_team_id,
        }));

        let mut view = Self {
            input: search.raw_input.clone(),
            debouncing: search.is_debouncing,
            team_options,
            team_filter_available: model.teams_status() == TeamsStatus::Ready,
            ..Self::default()
        };

        match model.players() {
            FetchState::Idle => view.status = ViewStatus::Idle,
            FetchState::Loading => view.status = ViewStatus::Loading,
            FetchState::Success(page) => {
                view.status = ViewStatus::Ready;
                view.cards = page
                    .items
                    .iter()
                    .map(|p| PlayerCard::from_player(p, today))
                    .collect();
                view.pagination = Some(PaginationView::from(&page.pagination));
                if page.items.is_empty() {
                    view.empty_message = Some(if search.committed_term.is_empty() {
                        "No players found.".to_string()
                    } else {
                        format!("No players match \"{}\".", search.committed_term)
                    });
                }
            }
            FetchState::Error(failure) => {
                view.status = ViewStatus::Failed;
                view.error = Some(ErrorBanner {
                    message: failure.message.clone(),
                    retry: failure.retryable,
                });
            }
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::error::ApiError;
    use crate::models::{PlayerPage, Team, TeamRef};
    use crate::search::{update, Effect, Msg};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn mounted() -> (SearchModel, crate::search::RequestTicket) {
        let (model, effects) = update(SearchModel::new(&SearchConfig::default()), Msg::Mounted);
        let Some(Effect::FetchPlayers(ticket)) = effects.into_iter().last() else {
            panic!("mount must fetch players");
        };
        (model, ticket)
    }

    #[test]
    fn test_player_card_defaults() {
        let card = PlayerCard::from_player(
            &Player {
                id: "p1".into(),
                name: "Unattached".into(),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(card.position, "Unknown");
        assert_eq!(card.team, "Free agent");
        assert_eq!(card.jersey, None);
        assert_eq!(card.age, None);
    }

    #[test]
    fn test_player_card_fields() {
        let card = PlayerCard::from_player(
            &Player {
                id: "p2".into(),
                name: "Pedri".into(),
                position: Some("Midfielder".into()),
                jersey_number: Some(8),
                date_of_birth: NaiveDate::from_ymd_opt(2002, 11, 25),
                team: Some(TeamRef {
                    id: "t1".into(),
                    name: "Barcelona".into(),
                }),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(card.jersey.as_deref(), Some("#8"));
        assert_eq!(card.team, "Barcelona");
        assert_eq!(card.age, Some(21));
    }

    #[test]
    fn test_team_options_start_with_all_teams() {
        let (model, _) = mounted();
        let (model, _) = update(
            model,
            Msg::TeamsLoaded(Ok(vec![Team {
                id: "t1".into(),
                name: "Barcelona".into(),
                ..Default::default()
            }])),
        );
        let (model, _) = update(model, Msg::TeamSelected("t1".into()));

        let view = SearchViewModel::from_model(&model, today());
        assert!(view.team_filter_available);
        assert_eq!(view.team_options.len(), 2);
        assert_eq!(view.team_options[0].label, ALL_TEAMS_LABEL);
        assert!(!view.team_options[0].selected);
        assert!(view.team_options[1].selected);
        assert_eq!(view.status, ViewStatus::Loading);
    }

    #[test]
    fn test_empty_result_message() {
        let (model, _) = mounted();
        let (model, _) = update(model, Msg::InputChanged("Zzz".into()));
        let generation = model.debounce_generation();
        let (model, effects) = update(model, Msg::DebounceElapsed { generation });
        let Some(Effect::FetchPlayers(ticket)) = effects.into_iter().next() else {
            panic!("commit must fetch players");
        };
        let (model, _) = update(
            model,
            Msg::PlayersLoaded {
                ticket,
                outcome: Ok(PlayerPage::default()),
            },
        );

        let view = SearchViewModel::from_model(&model, today());
        assert_eq!(view.status, ViewStatus::Ready);
        assert_eq!(view.empty_message.as_deref(), Some("No players match \"Zzz\"."));
    }

    #[test]
    fn test_error_banner_offers_retry_for_server_errors() {
        let (model, ticket) = mounted();
        let (model, _) = update(
            model,
            Msg::PlayersLoaded {
                ticket,
                outcome: Err(ApiError::Http {
                    status: 500,
                    message: "boom".into(),
                }),
            },
        );

        let view = SearchViewModel::from_model(&model, today());
        assert_eq!(view.status, ViewStatus::Failed);
        assert_eq!(
            view.error,
            Some(ErrorBanner {
                message: "Server error. Please try again.".to_string(),
                retry: true,
            })
        );
        assert!(view.cards.is_empty());
    }
}
