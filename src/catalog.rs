use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::{AppError, Result};
use crate::interpolate::interpolate;
use crate::locale::{negotiate, normalize_code};
use crate::table::LocaleTable;

static BUNDLED: Lazy<Catalog> = Lazy::new(|| {
    crate::bundled::catalog()
        .unwrap_or_else(|e| panic!("bundled locale tables are invalid: {e}"))
});

/// Where a resolved label came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    Requested { locale: &'a str },
    DefaultLocale { locale: &'a str },
    /// Neither locale had the key; the key itself is shown.
    RawKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub text: &'a str,
    pub source: Source<'a>,
}

impl Resolution<'_> {
    pub fn is_fallback(&self) -> bool {
        !matches!(self.source, Source::Requested { .. })
    }
}

/// All locale tables of one application plus the locale every lookup falls
/// back to. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_locale: String,
    tables: IndexMap<String, LocaleTable>,
}

impl Catalog {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            tables: IndexMap::new(),
        }
    }

    /// The Pingap console tables compiled into the crate.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    pub fn add_table(&mut self, table: LocaleTable) -> Result<()> {
        let code = normalize_code(table.locale());
        if self.tables.keys().any(|existing| normalize_code(existing) == code) {
            return Err(AppError::DuplicateLocale(table.locale().to_string()));
        }
        self.tables.insert(table.locale().to_string(), table);
        Ok(())
    }

    pub fn with_default_locale(mut self, default_locale: impl Into<String>) -> Self {
        self.default_locale = default_locale.into();
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Table for `locale`, negotiated (`zh-CN` finds `zh`).
    pub fn table(&self, locale: &str) -> Option<&LocaleTable> {
        let code = negotiate(locale, self.locales())?;
        self.tables.get(code)
    }

    pub fn default_table(&self) -> Option<&LocaleTable> {
        self.table(&self.default_locale)
    }

    /// Like [`Catalog::table`] but an unknown locale is an error.
    pub fn require_table(&self, locale: &str) -> Result<&LocaleTable> {
        self.table(locale)
            .ok_or_else(|| AppError::UnknownLocale(locale.to_string()))
    }

    pub fn resolve<'a>(&'a self, locale: &str, key: &'a str) -> Resolution<'a> {
        let requested = self.table(locale);
        if let Some(table) = requested {
            if let Some(text) = non_empty(table.get(key)) {
                return Resolution {
                    text,
                    source: Source::Requested {
                        locale: table.locale(),
                    },
                };
            }
        } else {
            log::debug!("locale '{locale}' not available, using '{}'", self.default_locale);
        }

        if let Some(table) = self.default_table() {
            let already_tried = requested.is_some_and(|r| r.locale() == table.locale());
            if !already_tried {
                if let Some(text) = non_empty(table.get(key)) {
                    log::debug!("'{key}' missing in '{locale}', using '{}'", table.locale());
                    return Resolution {
                        text,
                        source: Source::DefaultLocale {
                            locale: table.locale(),
                        },
                    };
                }
            }
        }

        log::debug!("'{key}' has no translation, showing the raw key");
        Resolution {
            text: key,
            source: Source::RawKey,
        }
    }

    pub fn t<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        self.resolve(locale, key).text
    }

    /// Resolve and substitute `{name}` placeholders.
    pub fn format(&self, locale: &str, key: &str, args: &HashMap<String, String>) -> String {
        interpolate(self.t(locale, key), args)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
