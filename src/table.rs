use std::collections::{BTreeSet, HashSet};
use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, Result};

static SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").unwrap_or_else(|e| panic!("invalid segment regex: {e}"))
});

/// A validated `namespace.field` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleKey(String);

impl LocaleKey {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(AppError::invalid_key(raw, "key is empty"));
        }
        let mut count = 0;
        for segment in raw.split('.') {
            if segment.is_empty() {
                return Err(AppError::invalid_key(raw, "empty segment"));
            }
            if !SEGMENT_RE.is_match(segment) {
                return Err(AppError::invalid_key(
                    raw,
                    format!("segment '{segment}' contains unsupported characters"),
                ));
            }
            count += 1;
        }
        if count < 2 {
            return Err(AppError::invalid_key(
                raw,
                "expected at least `namespace.field`",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UI section the key belongs to (first segment).
    pub fn namespace(&self) -> &str {
        namespace_of(&self.0)
    }

    pub fn field(&self) -> &str {
        self.0
            .split_once('.')
            .map(|(_, field)| field)
            .unwrap_or_default()
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn namespace_of(key: &str) -> &str {
    key.split_once('.').map(|(ns, _)| ns).unwrap_or(key)
}

/// Proper dotted prefixes of a key: `a.b.c` yields `a`, `a.b`.
fn proper_prefixes(key: &str) -> impl Iterator<Item = &str> {
    key.match_indices('.').map(move |(idx, _)| &key[..idx])
}

/// Key-to-text table for a single locale, kept in source order.
///
/// Two tables are equal when they hold the same entries in the same order.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    locale: String,
    entries: IndexMap<String, String>,
    prefixes: HashSet<String>,
}

impl PartialEq for LocaleTable {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for LocaleTable {}

impl LocaleTable {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: IndexMap::new(),
            prefixes: HashSet::new(),
        }
    }

    pub fn from_pairs(locale: impl Into<String>, pairs: &[(&str, &str)]) -> Result<Self> {
        let mut table = Self::new(locale);
        for (key, value) in pairs {
            table.insert(key, *value)?;
        }
        Ok(table)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let key = LocaleKey::parse(key)?;
        let key = key.as_str();
        if self.entries.contains_key(key) {
            return Err(AppError::DuplicateKey {
                locale: self.locale.clone(),
                key: key.to_string(),
            });
        }
        if self.prefixes.contains(key) {
            let nested = format!("{key}.");
            let other = self
                .entries
                .keys()
                .find(|existing| existing.starts_with(&nested))
                .cloned()
                .unwrap_or_default();
            return Err(AppError::KeyConflict {
                locale: self.locale.clone(),
                key: key.to_string(),
                other,
            });
        }
        if let Some(prefix) = proper_prefixes(key).find(|p| self.entries.contains_key(*p)) {
            return Err(AppError::KeyConflict {
                locale: self.locale.clone(),
                key: key.to_string(),
                other: prefix.to_string(),
            });
        }

        self.prefixes
            .extend(proper_prefixes(key).map(str::to_string));
        self.entries.insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn key_set(&self) -> BTreeSet<&str> {
        self.keys().collect()
    }

    /// Namespaces in the order they first appear.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for key in self.keys() {
            let ns = namespace_of(key);
            if !seen.contains(&ns) {
                seen.push(ns);
            }
        }
        seen
    }

    pub fn namespace<'a>(&'a self, ns: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.iter().filter(move |(key, _)| namespace_of(key) == ns)
    }
}
