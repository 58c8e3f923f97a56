pub mod check;
pub mod config;
pub mod export;
pub mod list;
pub mod lookup;

use crate::cli::i18n::current_language;

/// Locale used when a command gets no `--locale`: the CLI language.
pub(crate) fn locale_or_current(locale: Option<&str>) -> String {
    locale
        .map(str::to_string)
        .unwrap_or_else(|| current_language().code().to_string())
}
