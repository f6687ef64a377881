use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;
use watchlist_core::LoadingFlag;

/// Spinner shown while a catalog search is in flight.
pub struct SearchUI {
    spinner: Option<ProgressBar>,
    loading: LoadingFlag,
}

impl SearchUI {
    pub fn start(query: &str, loading: LoadingFlag) -> Self {
        if !is_interactive() {
            tracing::info!(operation = "search_ui", query = query, "Searching (non-interactive)");
            return Self { spinner: None, loading };
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        );
        spinner.set_message(format!("Searching for \"{}\"...", query));
        spinner.enable_steady_tick(Duration::from_millis(80));

        Self { spinner: Some(spinner), loading }
    }

    pub fn finish(self) {
        if let Some(spinner) = self.spinner {
            spinner.finish_and_clear();
        }
        if self.loading.is_loading() {
            tracing::warn!(operation = "search_ui", "Loading flag still set after search finished");
        }
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}
