use comfy_table::{Attribute, Cell, Color, Table};
use watchlist_core::{Session, ViewMode};
use watchlist_models::{CatalogEntry, WatchState, WatchlistItem, WatchlistStats};

const REVIEW_PREVIEW_CHARS: usize = 60;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| Cell::new(label).add_attribute(Attribute::Bold))
        .collect()
}

pub fn stats_table(stats: &WatchlistStats) -> Table {
    let mut table = new_table();
    table.set_header(header(&["Total Movies", "To Watch", "Watched", "Avg Rating"]));
    table.add_row(vec![
        Cell::new(stats.total),
        Cell::new(stats.unwatched).fg(Color::Yellow),
        Cell::new(stats.watched).fg(Color::Green),
        Cell::new(stats.average_rating_display()).fg(Color::Blue),
    ]);
    table
}

pub fn poster_label(entry: &CatalogEntry) -> &'static str {
    if entry.has_poster() {
        "yes"
    } else {
        "-"
    }
}

pub fn results_table(results: &[CatalogEntry], in_watchlist: impl Fn(&str) -> bool) -> Table {
    let mut table = new_table();
    table.set_header(header(&["#", "Title", "Year", "Type", "Poster", "Watchlist"]));
    for (index, entry) in results.iter().enumerate() {
        let status = if in_watchlist(&entry.imdb_id) {
            Cell::new("✓ In Watchlist").fg(Color::Green)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&entry.title),
            Cell::new(&entry.year),
            Cell::new(entry.media_type.as_str()),
            Cell::new(poster_label(entry)),
            status,
        ]);
    }
    table
}

/// Rating as stars plus "n/5", only when it is worth showing.
pub fn rating_label(item: &WatchlistItem) -> String {
    item.visible_rating()
        .map(|rating| format!("{} {}", rating.stars(), rating))
        .unwrap_or_default()
}

pub fn review_preview(item: &WatchlistItem) -> String {
    let Some(review) = item.visible_review() else {
        return String::new();
    };
    if review.chars().count() <= REVIEW_PREVIEW_CHARS {
        return format!("\"{}\"", review);
    }
    let truncated: String = review.chars().take(REVIEW_PREVIEW_CHARS).collect();
    format!("\"{}…\"", truncated.trim_end())
}

fn status_cell(state: WatchState) -> Cell {
    match state {
        WatchState::Unwatched => Cell::new("To Watch").fg(Color::Yellow),
        WatchState::WatchedUnrated => Cell::new("✓ Watched (unrated)").fg(Color::Green),
        WatchState::WatchedRated => Cell::new("✓ Watched").fg(Color::Green),
    }
}

pub fn watchlist_table(items: &[&WatchlistItem]) -> Table {
    let mut table = new_table();
    table.set_header(header(&["#", "Title", "Year", "Status", "Rating", "Review", "Added"]));
    for (index, item) in items.iter().enumerate() {
        let status = status_cell(item.state());
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(item.title()),
            Cell::new(item.year()),
            status,
            Cell::new(rating_label(item)).fg(Color::Yellow),
            Cell::new(review_preview(item)),
            Cell::new(item.added_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    table
}

/// Tab bar, active view highlighted with brackets.
pub fn view_tabs(session: &Session) -> String {
    let stats = session.stats();
    ViewMode::ALL
        .iter()
        .map(|view| {
            let label = view.label(&stats);
            if *view == session.view() {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
