use super::prompts;
use super::render;
use super::search::catalog_source;
use super::search_ui::{is_interactive, SearchUI};
use crate::output::Output;
use color_eyre::Result;
use owo_colors::OwoColorize;
use tracing::info;
use watchlist_config::{Config, PathManager};
use watchlist_core::{Session, ViewMode};
use watchlist_models::StarRating;

enum MenuChoice {
    Search,
    View(ViewMode),
    Quit,
}

enum ItemAction {
    ToggleWatched,
    Review,
    Remove,
    Back,
}

pub async fn run_session(config: &Config, path_manager: &PathManager, output: &Output) -> Result<()> {
    if !is_interactive() || !output.is_human() {
        return Err(color_eyre::eyre::eyre!(
            "The interactive session needs a terminal and human output. Use `reelmark search` for scripted use."
        ));
    }

    let mut session = Session::new(catalog_source(config, path_manager)?);
    info!(operation = "session_start", "Interactive session started");

    output.println(format!("\n{}", "🎬 Movie Watchlist".bright_yellow().bold()));
    output.println("Search, track, and review your favorite movies".bright_purple().to_string());

    loop {
        output.println("");
        output.println(render::stats_table(&session.stats()).to_string());
        output.println(render::view_tabs(&session));

        match main_menu(&session)? {
            MenuChoice::Search => search(&mut session, output).await?,
            MenuChoice::View(view) => {
                session.set_view(view);
                match view {
                    ViewMode::Search => browse_results(&mut session, output)?,
                    ViewMode::Unwatched | ViewMode::Watched => browse_watchlist(&mut session, output)?,
                }
            }
            MenuChoice::Quit => break,
        }
    }

    let stats = session.stats();
    info!(
        operation = "session_end",
        total = stats.total,
        watched = stats.watched,
        "Interactive session ended"
    );
    output.info("Your watchlist is kept in memory only and is discarded now. Bye!");
    Ok(())
}

fn main_menu(session: &Session) -> Result<MenuChoice> {
    let stats = session.stats();
    let mut choices = vec![MenuChoice::Search];
    let mut labels = vec!["🔍 Search movies".to_string()];
    for view in ViewMode::ALL {
        labels.push(view.label(&stats));
        choices.push(MenuChoice::View(view));
    }
    labels.push("Quit".to_string());
    choices.push(MenuChoice::Quit);

    let index = prompts::prompt_select("What next?", &labels, 0)?;
    Ok(choices.into_iter().nth(index).unwrap_or(MenuChoice::Quit))
}

async fn search(session: &mut Session, output: &Output) -> Result<()> {
    let query = prompts::prompt_string("Search for movies...", None)?;

    let ui = SearchUI::start(query.trim(), session.loading_flag());
    let outcome = session.submit_search(&query).await.map(|results| results.len());
    ui.finish();

    match outcome {
        Ok(_) => browse_results(session, output),
        Err(err) if err.is_surfaced() => {
            output.error(err.to_string());
            Ok(())
        }
        Err(_) => Ok(()),
    }
}

fn browse_results(session: &mut Session, output: &Output) -> Result<()> {
    loop {
        if let Some(err) = session.error() {
            output.error(err.to_string());
            return Ok(());
        }
        if session.shows_empty_state() {
            output.info(ViewMode::Search.empty_message());
            return Ok(());
        }

        output.println(render::results_table(session.results(), |id| session.in_watchlist(id)).to_string());

        let mut labels: Vec<String> = session
            .results()
            .iter()
            .map(|entry| {
                if session.in_watchlist(&entry.imdb_id) {
                    format!("✓ {} ({}) - In Watchlist", entry.title, entry.year)
                } else {
                    format!("+ Add {} ({})", entry.title, entry.year)
                }
            })
            .collect();
        labels.push("Back".to_string());

        let index = prompts::prompt_select("Add to watchlist", &labels, 0)?;
        let Some(entry) = session.results().get(index) else {
            return Ok(());
        };
        let (imdb_id, title) = (entry.imdb_id.clone(), entry.title.clone());

        if session.add_result(&imdb_id) {
            output.success(format!("Added {} to your watchlist", title));
        } else {
            output.warn(format!("{} is already in your watchlist", title));
        }
    }
}

fn browse_watchlist(session: &mut Session, output: &Output) -> Result<()> {
    loop {
        if session.shows_empty_state() {
            output.info(session.view().empty_message());
            return Ok(());
        }

        let items = session.view_items();
        output.println(render::watchlist_table(&items).to_string());

        let mut labels: Vec<String> = items
            .iter()
            .map(|item| format!("{} ({})", item.title(), item.year()))
            .collect();
        labels.push("Back".to_string());
        let ids: Vec<String> = items.iter().map(|item| item.imdb_id().to_string()).collect();

        let index = prompts::prompt_select("Select a movie", &labels, 0)?;
        let Some(imdb_id) = ids.get(index) else {
            return Ok(());
        };

        item_actions(session, imdb_id, output)?;
    }
}

fn item_actions(session: &mut Session, imdb_id: &str, output: &Output) -> Result<()> {
    let Some(item) = session.store().get(imdb_id) else {
        return Ok(());
    };
    let title = item.title().to_string();

    let labels = [
        item.toggle_action_label().to_string(),
        format!("★ {}", item.rate_action_label()),
        "🗑 Remove".to_string(),
        "Back".to_string(),
    ];
    let actions = [ItemAction::ToggleWatched, ItemAction::Review, ItemAction::Remove, ItemAction::Back];

    let index = prompts::prompt_select(&title, &labels, 0)?;
    match actions.into_iter().nth(index).unwrap_or(ItemAction::Back) {
        ItemAction::ToggleWatched => match session.toggle_watched(imdb_id) {
            Some(true) => output.success(format!("Marked {} as watched", title)),
            Some(false) => output.success(format!("Moved {} back to your watchlist", title)),
            None => {}
        },
        ItemAction::Review => review_dialog(session, imdb_id, output)?,
        ItemAction::Remove => {
            if session.remove(imdb_id) {
                output.success(format!("Removed {}", title));
            }
        }
        ItemAction::Back => {}
    }
    Ok(())
}

/// Rate & review dialog. Saving marks the movie as watched.
fn review_dialog(session: &mut Session, imdb_id: &str, output: &Output) -> Result<()> {
    let Some(draft) = session.open_review(imdb_id) else {
        return Ok(());
    };
    let (title, current_rating, current_review) = (draft.title.clone(), draft.rating, draft.review.clone());

    output.println(format!("\n{}", "Rate & Review".bold()));
    output.println(title.bright_purple().to_string());

    let star_labels: Vec<String> = (1..=StarRating::MAX)
        .filter_map(|value| StarRating::new(value).ok())
        .map(|rating| format!("{} {}", rating.stars(), rating))
        .collect();
    let default_index = usize::from(current_rating.value().saturating_sub(1));
    let stars = prompts::prompt_select("Your Rating", &star_labels, default_index)?;
    let rating = u8::try_from(stars + 1)
        .ok()
        .and_then(|value| StarRating::new(value).ok())
        .unwrap_or(current_rating);
    session.set_draft_rating(rating);

    let review = prompts::prompt_string(
        "Your Review (Optional)",
        (!current_review.is_empty()).then_some(current_review.as_str()),
    )?;
    session.set_draft_review(review.trim());

    if prompts::prompt_yes_no("Save?", Some(true))? {
        session.save_review();
        output.success(format!("Saved your review of {}", title));
    } else {
        session.cancel_review();
        output.info("Review discarded");
    }
    Ok(())
}
