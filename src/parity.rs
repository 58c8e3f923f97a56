//! Key-set parity between locale tables.
//!
//! Every table is compared against the catalog's default locale. The shipped
//! tables are known to diverge, so a [`Baseline`] records the accepted
//! divergences and only new ones count as regressions.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::interpolate::placeholders;
use crate::table::{namespace_of, LocaleTable};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Divergence {
    MissingKey {
        key: String,
        present_in: String,
        missing_from: String,
    },
    EmptyValue {
        locale: String,
        key: String,
    },
    PlaceholderMismatch {
        key: String,
        locale: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl Divergence {
    pub fn key(&self) -> &str {
        match self {
            Divergence::MissingKey { key, .. }
            | Divergence::EmptyValue { key, .. }
            | Divergence::PlaceholderMismatch { key, .. } => key,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Divergence::MissingKey {
                key,
                present_in,
                missing_from,
            } => format!("'{key}' exists in '{present_in}' but not in '{missing_from}'"),
            Divergence::EmptyValue { locale, key } => format!("'{key}' is empty in '{locale}'"),
            Divergence::PlaceholderMismatch {
                key,
                locale,
                expected,
                found,
            } => format!(
                "'{key}' in '{locale}' uses {{{}}}, expected {{{}}}",
                found.join(", "),
                expected.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceSummary {
    pub namespace: String,
    /// Key count per locale, in catalog order.
    pub counts: IndexMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityReport {
    pub default_locale: String,
    pub locales: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub divergences: Vec<Divergence>,
    pub namespaces: Vec<NamespaceSummary>,
}

impl ParityReport {
    pub fn is_symmetric(&self) -> bool {
        self.divergences.is_empty()
    }

    pub fn against(&self, baseline: &Baseline) -> BaselineDiff {
        let found: BTreeSet<&Divergence> = self.divergences.iter().collect();
        let known: BTreeSet<&Divergence> = baseline.entries.iter().collect();
        BaselineDiff {
            regressions: found.difference(&known).map(|d| (*d).clone()).collect(),
            stale: known.difference(&found).map(|d| (*d).clone()).collect(),
        }
    }
}

/// Result of comparing a report with the recorded baseline.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineDiff {
    /// Found now, not recorded.
    pub regressions: Vec<Divergence>,
    /// Recorded, no longer found.
    pub stale: Vec<Divergence>,
}

impl BaselineDiff {
    pub fn passed(&self, strict: bool) -> bool {
        self.regressions.is_empty() && (!strict || self.stale.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    pub entries: Vec<Divergence>,
}

impl Baseline {
    pub fn new(mut entries: Vec<Divergence>) -> Self {
        entries.sort();
        entries.dedup();
        Self { entries }
    }

    /// Divergences already present in the shipped console tables.
    pub fn bundled() -> Self {
        crate::bundled::known_divergences()
    }

    pub fn from_report(report: &ParityReport) -> Self {
        Self::new(report.divergences.clone())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let baseline: Baseline =
            serde_json::from_str(&content).map_err(|e| AppError::json(path, e))?;
        Ok(Self::new(baseline.entries))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonSerialize { source: e })?;
        fs::write(path, json).map_err(|e| AppError::io(path, e))
    }
}

fn missing_keys(from: &LocaleTable, to: &LocaleTable, out: &mut Vec<Divergence>) {
    for key in from.keys().filter(|key| !to.contains(key)) {
        out.push(Divergence::MissingKey {
            key: key.to_string(),
            present_in: from.locale().to_string(),
            missing_from: to.locale().to_string(),
        });
    }
}

pub fn namespace_summary(tables: &[&LocaleTable]) -> Vec<NamespaceSummary> {
    let mut summary: IndexMap<String, IndexMap<String, usize>> = IndexMap::new();
    for table in tables {
        for ns in table.namespaces() {
            summary.entry(ns.to_string()).or_default();
        }
    }
    for counts in summary.values_mut() {
        for table in tables {
            counts.insert(table.locale().to_string(), 0);
        }
    }
    for table in tables {
        for key in table.keys() {
            if let Some(count) = summary
                .get_mut(namespace_of(key))
                .and_then(|counts| counts.get_mut(table.locale()))
            {
                *count += 1;
            }
        }
    }
    summary
        .into_iter()
        .map(|(namespace, counts)| NamespaceSummary { namespace, counts })
        .collect()
}

/// Compare every table of `catalog` with its default locale table.
pub fn audit(catalog: &Catalog) -> Result<ParityReport> {
    let reference = catalog
        .default_table()
        .ok_or_else(|| AppError::UnknownLocale(catalog.default_locale().to_string()))?;

    let mut tables: Vec<&LocaleTable> = vec![reference];
    tables.extend(
        catalog
            .locales()
            .filter_map(|locale| catalog.table(locale))
            .filter(|table| table.locale() != reference.locale()),
    );

    let mut divergences = Vec::new();
    for table in &tables {
        for (key, value) in table.iter() {
            if value.trim().is_empty() {
                divergences.push(Divergence::EmptyValue {
                    locale: table.locale().to_string(),
                    key: key.to_string(),
                });
            }
        }
    }

    for table in tables.iter().skip(1) {
        missing_keys(reference, table, &mut divergences);
        missing_keys(table, reference, &mut divergences);

        for (key, value) in table.iter() {
            let Some(expected_text) = reference.get(key) else {
                continue;
            };
            let expected = placeholders(expected_text);
            let found = placeholders(value);
            if expected != found {
                divergences.push(Divergence::PlaceholderMismatch {
                    key: key.to_string(),
                    locale: table.locale().to_string(),
                    expected: expected.into_iter().collect(),
                    found: found.into_iter().collect(),
                });
            }
        }
    }
    divergences.sort();

    log::debug!(
        "parity audit over {} locale(s): {} divergence(s)",
        tables.len(),
        divergences.len()
    );

    Ok(ParityReport {
        default_locale: reference.locale().to_string(),
        locales: tables.iter().map(|t| t.locale().to_string()).collect(),
        generated_at: Utc::now(),
        divergences,
        namespaces: namespace_summary(&tables),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(en: &[(&str, &str)], zh: &[(&str, &str)]) -> Catalog {
        let mut catalog = Catalog::new("en");
        catalog
            .add_table(LocaleTable::from_pairs("en", en).expect("en"))
            .expect("add en");
        catalog
            .add_table(LocaleTable::from_pairs("zh", zh).expect("zh"))
            .expect("add zh");
        catalog
    }

    fn missing(key: &str, present_in: &str, missing_from: &str) -> Divergence {
        Divergence::MissingKey {
            key: key.to_string(),
            present_in: present_in.to_string(),
            missing_from: missing_from.to_string(),
        }
    }

    #[test]
    fn symmetric_tables_have_no_divergence() {
        let report = audit(&catalog(
            &[("nav.basic", "Basic")],
            &[("nav.basic", "基础配置")],
        ))
        .expect("audit");
        assert!(report.is_symmetric());
        assert_eq!(report.locales, vec!["en", "zh"]);
    }

    #[test]
    fn missing_keys_are_reported_in_both_directions() {
        let report = audit(&catalog(
            &[("nav.basic", "Basic"), ("nav.proxyPlugin", "Proxy Plugin")],
            &[("nav.basic", "基础配置"), ("nav.plugin", "插件配置")],
        ))
        .expect("audit");
        assert_eq!(
            report.divergences,
            vec![
                missing("nav.plugin", "zh", "en"),
                missing("nav.proxyPlugin", "en", "zh"),
            ]
        );
    }

    #[test]
    fn empty_values_and_placeholders_are_reported() {
        let report = audit(&catalog(
            &[("form.limitMax", "Must be less than {max}"), ("form.name", "Name")],
            &[("form.limitMax", "不能大于{value}"), ("form.name", " ")],
        ))
        .expect("audit");
        assert!(report.divergences.contains(&Divergence::EmptyValue {
            locale: "zh".to_string(),
            key: "form.name".to_string(),
        }));
        assert!(report.divergences.contains(&Divergence::PlaceholderMismatch {
            key: "form.limitMax".to_string(),
            locale: "zh".to_string(),
            expected: vec!["max".to_string()],
            found: vec!["value".to_string()],
        }));
    }

    #[test]
    fn baseline_splits_regressions_and_stale_entries() {
        let report = audit(&catalog(
            &[("nav.basic", "Basic"), ("nav.proxyPlugin", "Proxy Plugin")],
            &[("nav.basic", "基础配置"), ("nav.plugin", "插件配置")],
        ))
        .expect("audit");
        let baseline = Baseline::new(vec![
            missing("nav.plugin", "zh", "en"),
            missing("location.plugins", "zh", "en"),
        ]);

        let diff = report.against(&baseline);
        assert_eq!(diff.regressions, vec![missing("nav.proxyPlugin", "en", "zh")]);
        assert_eq!(diff.stale, vec![missing("location.plugins", "zh", "en")]);
        assert!(!diff.passed(false));

        let diff = report.against(&Baseline::from_report(&report));
        assert!(diff.passed(true));
    }

    #[test]
    fn namespace_summary_counts_keys_per_locale() {
        let report = audit(&catalog(
            &[("nav.basic", "Basic"), ("form.name", "Name")],
            &[("nav.basic", "基础配置"), ("nav.plugin", "插件配置")],
        ))
        .expect("audit");
        let nav = &report.namespaces[0];
        assert_eq!(nav.namespace, "nav");
        assert_eq!(nav.counts["en"], 1);
        assert_eq!(nav.counts["zh"], 2);
        let form = &report.namespaces[1];
        assert_eq!(form.counts["zh"], 0);
    }

    #[test]
    fn audit_without_default_table_fails() {
        let mut catalog = Catalog::new("en");
        catalog
            .add_table(LocaleTable::from_pairs("zh", &[("nav.basic", "基础配置")]).expect("zh"))
            .expect("add zh");
        assert!(matches!(audit(&catalog), Err(AppError::UnknownLocale(_))));
    }

    #[test]
    fn baseline_round_trips_through_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("baseline.json");
        let baseline = Baseline::new(vec![missing("nav.plugin", "zh", "en")]);
        baseline.save(&path).expect("save");
        assert_eq!(Baseline::load(&path).expect("load"), baseline);

        let raw = fs::read_to_string(&path).expect("read");
        assert!(raw.contains("\"kind\": \"missingKey\""), "{raw}");
        assert!(raw.contains("\"presentIn\": \"zh\""), "{raw}");
    }
}
