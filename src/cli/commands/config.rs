use clap::Subcommand;
use std::path::PathBuf;

use crate::cli::i18n::{current_language, set_language, texts, Language};
use crate::cli::ui::{error, highlight, info, success, to_json};
use crate::error::AppError;
use crate::settings::{get_settings, set_default_locale, set_locale_dir, AppSettings};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current settings
    Show {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show settings file path
    Path,
    /// Set the CLI language (en or zh)
    SetLanguage {
        /// Language code
        code: String,
    },
    /// Set the locale used for fallbacks
    SetDefaultLocale {
        /// Locale code, e.g. en
        code: String,
    },
    /// Load tables from a directory instead of the bundled ones
    SetDir {
        /// Directory of json/toml/yaml tables
        #[arg(conflicts_with = "clear")]
        dir: Option<PathBuf>,

        /// Go back to the bundled tables
        #[arg(long)]
        clear: bool,
    },
}

pub fn execute(cmd: ConfigCommand) -> Result<(), AppError> {
    match cmd {
        ConfigCommand::Show { json } => show_config(json),
        ConfigCommand::Path => show_path(),
        ConfigCommand::SetLanguage { code } => change_language(&code),
        ConfigCommand::SetDefaultLocale { code } => change_default_locale(&code),
        ConfigCommand::SetDir { dir, clear } => change_dir(dir, clear),
    }
}

fn show_config(json: bool) -> Result<(), AppError> {
    let settings = get_settings();
    if json {
        let json = to_json(&settings).map_err(|e| AppError::JsonSerialize { source: e })?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", highlight(texts::config_title()));
    println!("{}", "=".repeat(50));
    println!("{}:  {}", texts::config_language(), current_language());
    println!("{}:  {}", texts::config_default_locale(), settings.default_locale);
    let dir = settings
        .locale_dir_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| texts::bundled().to_string());
    println!("{}:  {}", texts::config_locale_dir(), dir);
    Ok(())
}

fn show_path() -> Result<(), AppError> {
    let path = AppSettings::settings_path();
    println!("{}:  {}", texts::config_file(), path.display());
    if path.exists() {
        println!("{}", success("✓"));
    } else {
        println!("{}", error("✗"));
    }
    Ok(())
}

fn change_language(code: &str) -> Result<(), AppError> {
    let normalized = crate::locale::normalize_code(code);
    if !matches!(normalized.as_str(), "en" | "zh" | "zh-cn" | "zh-tw") {
        return Err(AppError::InvalidInput(format!("en | zh: {code}")));
    }
    let lang = Language::from_code(&normalized);
    set_language(lang)?;
    println!("{}", success(&texts::language_changed(lang.display_name())));
    Ok(())
}

fn change_default_locale(code: &str) -> Result<(), AppError> {
    let normalized = crate::locale::normalize_code(code);
    if normalized.is_empty() {
        return Err(AppError::InvalidInput(code.to_string()));
    }
    set_default_locale(&normalized)?;
    println!("{}", success(&texts::default_locale_changed(&normalized)));
    Ok(())
}

fn change_dir(dir: Option<PathBuf>, clear: bool) -> Result<(), AppError> {
    if clear || dir.is_none() {
        set_locale_dir(None)?;
        println!("{}", success(texts::locale_dir_cleared()));
        return Ok(());
    }

    if let Some(dir) = dir {
        if !dir.is_dir() {
            return Err(AppError::Message(texts::dir_not_found(
                &dir.display().to_string(),
            )));
        }
        let display = dir.display().to_string();
        set_locale_dir(Some(&display))?;
        println!("{}", success(&texts::locale_dir_changed(&display)));
        println!("{}", info(&format!("pingap-locale locales --dir {display}")));
    }
    Ok(())
}
