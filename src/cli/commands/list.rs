use clap::Args;
use indexmap::IndexMap;

use super::locale_or_current;
use crate::cli::i18n::texts;
use crate::cli::ui::{create_table, highlight, info, to_json};
use crate::cli::CatalogSource;
use crate::error::AppError;
use crate::parity::namespace_summary;
use crate::table::LocaleTable;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Locale table to list (defaults to the CLI language)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Only keys of this namespace, e.g. upstream
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ListArgs, source: &CatalogSource) -> Result<(), AppError> {
    let catalog = source.load()?;
    let locale = locale_or_current(args.locale.as_deref());
    let table = catalog.require_table(&locale)?;

    let entries = select(table, args.namespace.as_deref());

    if args.json {
        let json = to_json(&entries).map_err(|e| AppError::JsonSerialize { source: e })?;
        println!("{}", json);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", info(texts::no_keys_found()));
        return Ok(());
    }

    let mut output = create_table();
    output.set_header(vec![texts::header_key(), texts::header_value()]);
    for (key, value) in &entries {
        output.add_row(vec![*key, *value]);
    }
    println!("{}", highlight(table.locale()));
    println!("{}", output);
    println!("{}", info(&texts::keys_total(entries.len())));
    Ok(())
}

pub(crate) fn select<'a>(table: &'a LocaleTable, namespace: Option<&'a str>) -> IndexMap<&'a str, &'a str> {
    match namespace {
        Some(ns) => table.namespace(ns).collect(),
        None => table.iter().collect(),
    }
}

pub fn namespaces(source: &CatalogSource) -> Result<(), AppError> {
    let catalog = source.load()?;
    let tables: Vec<&LocaleTable> = catalog
        .locales()
        .filter_map(|locale| catalog.table(locale))
        .collect();
    let summary = namespace_summary(&tables);

    let mut output = create_table();
    let mut header = vec![texts::header_namespace().to_string()];
    header.extend(tables.iter().map(|t| t.locale().to_string()));
    output.set_header(header);
    for item in &summary {
        let mut row = vec![item.namespace.clone()];
        row.extend(item.counts.values().map(|count| count.to_string()));
        output.add_row(row);
    }
    println!("{}", output);
    Ok(())
}

pub fn locales(source: &CatalogSource) -> Result<(), AppError> {
    let catalog = source.load()?;
    let default = catalog.default_table().map(|t| t.locale().to_string());

    let mut output = create_table();
    output.set_header(vec![
        texts::header_locale(),
        texts::header_keys(),
        texts::header_default(),
    ]);
    for locale in catalog.locales() {
        let count = catalog.table(locale).map(LocaleTable::len).unwrap_or_default();
        let marker = if default.as_deref() == Some(locale) { "✓" } else { "" };
        output.add_row(vec![locale.to_string(), count.to_string(), marker.to_string()]);
    }
    println!("{}", output);
    Ok(())
}
