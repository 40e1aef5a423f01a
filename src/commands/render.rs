//! Plain-text rendering of view models

use kickoff::view::{PlayerCard, SearchViewModel, ViewStatus};

pub fn card_line(index: usize, card: &PlayerCard) -> String {
    let mut line = format!("{}. {}", index + 1, card.name);
    if let Some(jersey) = &card.jersey {
        line.push_str(&format!(" {jersey}"));
    }
    line.push_str(&format!(" | {} | {}", card.position, card.team));
    if let Some(nationality) = &card.nationality {
        line.push_str(&format!(" | {nationality}"));
    }
    if let Some(age) = card.age {
        line.push_str(&format!(" | age {age}"));
    }
    line
}

pub fn search_view(view: &SearchViewModel) -> String {
    let mut out = String::new();

    let selected_team = view
        .team_options
        .iter()
        .find(|o| o.selected)
        .map(|o| o.label.as_str())
        .unwrap_or("All teams");
    out.push_str(&format!(
        "Search: \"{}\"{}  Team: {}\n",
        view.input,
        if view.debouncing { " (typing...)" } else { "" },
        selected_team
    ));
    if !view.team_filter_available {
        out.push_str("  (team filter unavailable)\n");
    }
    out.push_str("--------------------------------\n");

    match view.status {
        ViewStatus::Idle => {}
        ViewStatus::Loading => out.push_str("Loading players...\n"),
        ViewStatus::Failed => {
            if let Some(error) = &view.error {
                out.push_str(&format!("Error: {}\n", error.message));
                if error.retry {
                    out.push_str("Type :retry to try again.\n");
                }
            }
        }
        ViewStatus::Ready => {
            if let Some(message) = &view.empty_message {
                out.push_str(&format!("{message}\n"));
            }
            for (i, card) in view.cards.iter().enumerate() {
                out.push_str(&card_line(i, card));
                out.push('\n');
            }
            if let Some(pagination) = &view.pagination {
                out.push_str(&format!(
                    "{} ({} players){}{}\n",
                    pagination.label,
                    pagination.total_items,
                    if pagination.has_previous { "  [prev]" } else { "" },
                    if pagination.has_next { "  [next]" } else { "" },
                ));
            }
        }
    }

    out
}
