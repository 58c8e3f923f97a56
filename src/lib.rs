// Core modules
mod bundled;
mod catalog;
mod error;
mod interpolate;
mod locale;
mod parity;
mod settings;
mod storage;
mod table;

// CLI module
pub mod cli;

// Public exports
pub use catalog::{Catalog, Resolution, Source};
pub use error::AppError;
pub use interpolate::{interpolate, placeholders};
pub use locale::{negotiate, normalize_code, Language, DEFAULT_LOCALE};
pub use parity::{audit, Baseline, BaselineDiff, Divergence, NamespaceSummary, ParityReport};
pub use settings::{get_settings, update_settings, AppSettings, HOME_ENV};
pub use storage::{
    load_dir, load_table, parse_table, render_table, save_table, save_table_as, Format,
};
pub use table::{LocaleKey, LocaleTable};

/// The shipped Pingap console tables.
pub mod tables {
    pub use crate::bundled::{catalog, chinese, english, known_divergences};
}
