use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

pub mod commands;
pub mod i18n;
pub mod ui;

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::settings::get_settings;
use crate::storage::load_dir;

#[derive(Parser)]
#[command(
    name = "pingap-locale",
    version,
    about = "Localization tables of the Pingap admin console",
    long_about = "Look up, list, audit and export the label tables (Chinese and English) used by the Pingap admin console.\n\nTables are bundled in the binary unless --dir or the localeDir setting points to a directory of json/toml/yaml files."
)]
pub struct Cli {
    /// Load locale tables from this directory instead of the bundled ones
    #[arg(long, global = true, env = "PINGAP_LOCALE_DIR")]
    pub dir: Option<PathBuf>,

    /// Locale used when a key or locale is missing
    #[arg(long, global = true)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a key to its label
    Get(commands::lookup::GetArgs),

    /// List the keys of a locale table
    List(commands::list::ListArgs),

    /// Show namespaces with key counts per locale
    Namespaces,

    /// Show available locales
    Locales,

    /// Audit key-set parity between locales
    Check(commands::check::CheckArgs),

    /// Write a locale table to a file (json, toml or yaml)
    Export(commands::export::ExportArgs),

    /// Manage settings (language, default locale, locale dir)
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where tables come from and which locale backs fallbacks.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    pub dir: Option<PathBuf>,
    pub default_locale: Option<String>,
}

impl CatalogSource {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            dir: cli.dir.clone(),
            default_locale: cli.default_locale.clone(),
        }
    }

    /// Flags win over settings; without a directory the bundled tables are used.
    pub fn load(&self) -> Result<Catalog, AppError> {
        let settings = get_settings();
        let default_locale = self
            .default_locale
            .clone()
            .unwrap_or_else(|| settings.default_locale.clone());
        let dir = self.dir.clone().or_else(|| settings.locale_dir_path());
        load_catalog(dir.as_deref(), &default_locale)
    }
}

pub fn load_catalog(dir: Option<&Path>, default_locale: &str) -> Result<Catalog, AppError> {
    match dir {
        Some(dir) => load_dir(dir, default_locale),
        None => Ok(Catalog::bundled().clone().with_default_locale(default_locale)),
    }
}

/// Generate shell completions
pub fn generate_completions(shell: Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pingap-locale",
            "get",
            "basic.threads",
            "--default-locale",
            "zh",
            "-v",
        ])
        .expect("parse");
        assert!(cli.verbose);
        assert_eq!(cli.default_locale.as_deref(), Some("zh"));
        assert!(matches!(cli.command, Commands::Get(_)));
    }

    #[test]
    fn load_catalog_without_dir_uses_bundled_tables() {
        let catalog = load_catalog(None, "zh").expect("bundled");
        assert_eq!(catalog.default_locale(), "zh");
        assert_eq!(catalog.t("fr", "nav.plugin"), "插件配置");
    }
}
