//! Label tables of the Pingap admin console, shipped as they are maintained
//! upstream. The Chinese and English tables do not share the same key set;
//! [`known_divergences`] lists the differences.

mod en;
mod zh;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::locale::DEFAULT_LOCALE;
use crate::parity::{Baseline, Divergence};
use crate::table::LocaleTable;

pub fn english() -> Result<LocaleTable> {
    LocaleTable::from_pairs("en", en::ENTRIES)
}

pub fn chinese() -> Result<LocaleTable> {
    LocaleTable::from_pairs("zh", zh::ENTRIES)
}

pub fn catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new(DEFAULT_LOCALE);
    catalog.add_table(english()?)?;
    catalog.add_table(chinese()?)?;
    Ok(catalog)
}

/// `plugin` was renamed to `proxyPlugin` in the English table only, and a few
/// fields exist only in Chinese.
pub fn known_divergences() -> Baseline {
    let missing = |key: &str, present_in: &str, missing_from: &str| Divergence::MissingKey {
        key: key.to_string(),
        present_in: present_in.to_string(),
        missing_from: missing_from.to_string(),
    };
    Baseline::new(vec![
        missing("nav.plugin", "zh", "en"),
        missing("nav.proxyPlugin", "en", "zh"),
        missing("basic.cacheMaxSize", "zh", "en"),
        missing("location.proxySetHeaders", "zh", "en"),
        missing("location.proxyAddHeaders", "zh", "en"),
        missing("location.plugins", "zh", "en"),
        missing("location.proxyPlugins", "en", "zh"),
    ])
}
