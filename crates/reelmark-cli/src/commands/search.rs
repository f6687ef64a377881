use super::render;
use super::search_ui::SearchUI;
use crate::output::Output;
use color_eyre::Result;
use std::sync::Arc;
use watchlist_config::{Config, CredentialStore, PathManager};
use watchlist_core::{SearchController, SearchError};
use watchlist_models::CatalogEntry;
use watchlist_sources::{create_catalog_source, CatalogSource};

/// Build the configured catalog source, reading the stored API key if any.
pub fn catalog_source(config: &Config, path_manager: &PathManager) -> Result<Arc<dyn CatalogSource>> {
    let credentials_file = path_manager.credentials_file();
    let mut cred_store = CredentialStore::new(credentials_file.clone());
    cred_store.load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load credentials from {}: {}", credentials_file.display(), e))?;

    create_catalog_source(config, &cred_store)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create catalog source: {}", e))
}

pub async fn run_search(query: &str, config: &Config, path_manager: &PathManager, output: &Output) -> Result<()> {
    tracing::debug!("Search command started");

    let mut controller = SearchController::new(catalog_source(config, path_manager)?);

    let ui = output
        .is_human()
        .then(|| SearchUI::start(query.trim(), controller.loading_flag()));
    let outcome = controller.search(query).await.map(|results| results.to_vec());
    if let Some(ui) = ui {
        ui.finish();
    }

    report_outcome(query.trim(), outcome, output)
}

/// Print the search outcome. Failed searches become an error so the exit
/// status reflects them; an empty query is not a failure.
fn report_outcome(query: &str, outcome: Result<Vec<CatalogEntry>, SearchError>, output: &Output) -> Result<()> {
    match outcome {
        Ok(results) => {
            output.println(render::results_table(&results, |_| false).to_string());
            output.search_results(query, &results);
            Ok(())
        }
        Err(SearchError::EmptyQuery) => {
            tracing::debug!("Empty query, nothing to search");
            Ok(())
        }
        Err(err) => {
            // Human mode gets the message from the error report instead.
            if !output.is_human() {
                output.error(err.to_string());
            }
            Err(color_eyre::eyre::eyre!("Search for \"{}\" failed: {}", query, err))
        }
    }
}
