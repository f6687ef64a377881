use super::prompts;
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use watchlist_config::{ApiKeySource, Config, CredentialStore, PathManager, OMDB_API_KEY_ENV};

pub fn run_config(cmd: crate::ConfigCommands, config: &Config, path_manager: &PathManager, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show { full } => show_config(full, config, path_manager, output),
        crate::ConfigCommands::ApiKey { key } => configure_api_key(key, config, path_manager, output),
        crate::ConfigCommands::Init { force } => init_config(force, path_manager, output),
    }
}

fn load_credentials(path_manager: &PathManager) -> Result<CredentialStore> {
    let mut credentials = CredentialStore::new(path_manager.credentials_file());
    credentials
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load credentials: {}", e))?;
    Ok(credentials)
}

fn show_config(full: bool, config: &Config, path_manager: &PathManager, output: &Output) -> Result<()> {
    let credentials = load_credentials(path_manager)?;
    let resolved = config.resolve_api_key(&credentials);
    let key_source = resolved
        .as_ref()
        .map(|r| r.source.to_string())
        .unwrap_or_else(|| "not set".to_string());
    let key_display = match &resolved {
        Some(r) if full => r.key.clone(),
        Some(r) => mask_string(&r.key),
        None => "<not set>".to_string(),
    };
    let timeout_display = config
        .catalog
        .timeout_secs
        .map(|secs| format!("{}s", secs))
        .unwrap_or_else(|| "default".to_string());
    let log_file = path_manager.session_log_file();

    match output.format() {
        crate::output::OutputFormat::Human => {
            let mut paths_table = Table::new();
            paths_table.set_header(vec![
                Cell::new("Paths").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold)
            ]);
            paths_table.add_row(vec![Cell::new("Config file"), Cell::new(path_manager.config_file().display())]);
            paths_table.add_row(vec![Cell::new("Credentials file"), Cell::new(path_manager.credentials_file().display())]);
            paths_table.add_row(vec![Cell::new("Session log"), Cell::new(log_file.display())]);
            paths_table.load_preset(comfy_table::presets::UTF8_FULL);
            paths_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", paths_table);
            println!();

            let mut catalog_table = Table::new();
            catalog_table.set_header(vec![
                Cell::new("Catalog Configuration").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold)
            ]);
            catalog_table.add_row(vec![Cell::new("Base URL"), Cell::new(&config.catalog.base_url)]);
            catalog_table.add_row(vec![Cell::new("Timeout"), Cell::new(&timeout_display)]);
            catalog_table.add_row(vec![
                Cell::new("API Key"),
                Cell::new(if resolved.is_some() { key_display.green().to_string() } else { key_display.red().to_string() })
            ]);
            catalog_table.add_row(vec![Cell::new("API Key Source"), Cell::new(&key_source)]);
            catalog_table.load_preset(comfy_table::presets::UTF8_FULL);
            catalog_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", catalog_table);
            println!();

            let mut logging_table = Table::new();
            logging_table.set_header(vec![
                Cell::new("Logging").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold)
            ]);
            logging_table.add_row(vec![Cell::new("Level"), Cell::new(&config.logging.level)]);
            logging_table.add_row(vec![
                Cell::new("Session log file"),
                Cell::new(if config.logging.file { "✓".green().to_string() } else { "✗".red().to_string() })
            ]);
            logging_table.load_preset(comfy_table::presets::UTF8_FULL);
            logging_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", logging_table);

            if resolved.is_none() {
                println!();
                println!("{}", "No API key configured. Run `reelmark config api-key` to set one.".yellow());
            }
        }
        crate::output::OutputFormat::Json | crate::output::OutputFormat::JsonPretty => {
            output.json(&json!({
                "paths": {
                    "config_file": path_manager.config_file(),
                    "credentials_file": path_manager.credentials_file(),
                    "session_log": log_file,
                },
                "catalog": {
                    "base_url": config.catalog.base_url,
                    "timeout_secs": config.catalog.timeout_secs,
                    "api_key": resolved.as_ref().map(|_| key_display.clone()),
                    "api_key_source": key_source,
                },
                "logging": {
                    "level": config.logging.level,
                    "file": config.logging.file,
                },
            }));
        }
    }

    Ok(())
}

fn configure_api_key(key_arg: Option<String>, config: &Config, path_manager: &PathManager, output: &Output) -> Result<()> {
    let key = match key_arg {
        Some(key) => key,
        None => {
            output.println(format!("\n{}", "OMDb API Key".bright_cyan().bold()));
            output.println("Get a free key at https://www.omdbapi.com/apikey.aspx".bright_black().to_string());
            prompts::prompt_password("API key")?
        }
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(color_eyre::eyre::eyre!("API key cannot be empty"));
    }

    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create config directory: {}", e))?;
    let mut credentials = load_credentials(path_manager)?;
    credentials.set_omdb_api_key(key);
    credentials
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save credentials: {}", e))?;

    tracing::info!(operation = "config_api_key", path = %path_manager.credentials_file().display(), "Stored OMDb API key");
    output.success(format!("API key saved to {}", path_manager.credentials_file().display()));
    if config
        .resolve_api_key(&credentials)
        .is_some_and(|resolved| resolved.source == ApiKeySource::Environment)
    {
        output.warn(format!("{} is set and takes precedence over the stored key", OMDB_API_KEY_ENV));
    }
    Ok(())
}

fn init_config(force: bool, path_manager: &PathManager, output: &Output) -> Result<()> {
    let config_file = path_manager.config_file();
    if config_file.exists() && !force {
        output.warn(format!("{} already exists. Use --force to overwrite it.", config_file.display()));
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create config directory: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}

fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string(""), "<not set>");
        assert_eq!(mask_string("abc"), "***");
        assert_eq!(mask_string("abcd1234"), "ab***34");
    }
}
