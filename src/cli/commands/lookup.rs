use clap::Args;
use std::collections::HashMap;

use super::locale_or_current;
use crate::catalog::{Resolution, Source};
use crate::cli::i18n::texts;
use crate::cli::ui::{info, muted};
use crate::cli::CatalogSource;
use crate::error::AppError;
use crate::interpolate::interpolate;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Key to resolve, e.g. upstream.healthCheck
    pub key: String,

    /// Locale to resolve in (defaults to the CLI language)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Placeholder value as name=value, may be repeated
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,

    /// Also print where the text came from
    #[arg(long)]
    pub explain: bool,
}

pub fn execute(args: GetArgs, source: &CatalogSource) -> Result<(), AppError> {
    let catalog = source.load()?;
    let values = parse_args(&args.args)?;
    let locale = locale_or_current(args.locale.as_deref());

    let resolution = catalog.resolve(&locale, &args.key);
    let text = interpolate(resolution.text, &values);
    if resolution.source == Source::RawKey {
        println!("{}", muted(&text));
    } else {
        println!("{}", text);
    }
    if args.explain {
        println!("{}", info(&explain(&resolution)));
    }
    Ok(())
}

pub(crate) fn explain(resolution: &Resolution<'_>) -> String {
    match resolution.source {
        Source::Requested { locale } => texts::source_requested(locale),
        Source::DefaultLocale { locale } => texts::source_default_locale(locale),
        Source::RawKey => texts::source_raw_key().to_string(),
    }
}

/// `["max=10", "min=1"]` into a placeholder map.
pub(crate) fn parse_args(raw: &[String]) -> Result<HashMap<String, String>, AppError> {
    raw.iter()
        .map(|item| {
            item.split_once('=')
                .filter(|(name, _)| !name.trim().is_empty())
                .map(|(name, value)| (name.trim().to_string(), value.to_string()))
                .ok_or_else(|| AppError::InvalidInput(texts::invalid_arg(item)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn parse_args_splits_on_first_equals() {
        let args = parse_args(&["max=10".to_string(), "expr=a=b".to_string()]).expect("args");
        assert_eq!(args["max"], "10");
        assert_eq!(args["expr"], "a=b");
    }

    #[test]
    fn parse_args_rejects_missing_name() {
        for raw in ["novalue", "=10"] {
            assert!(matches!(
                parse_args(&[raw.to_string()]),
                Err(AppError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn explain_names_the_source() {
        let catalog = Catalog::bundled();
        assert_eq!(
            explain(&catalog.resolve("zh", "nav.proxyPlugin")),
            "fell back to default locale 'en'"
        );
        assert_eq!(
            explain(&catalog.resolve("zh", "does.not.exist")),
            "no translation found, showing the raw key"
        );
    }
}
