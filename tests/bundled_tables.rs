use std::collections::HashMap;

use pingap_locale::{
    audit, parse_table, render_table, tables, Baseline, Catalog, Divergence, Format, Source,
};

fn missing(key: &str, present_in: &str, missing_from: &str) -> Divergence {
    Divergence::MissingKey {
        key: key.to_string(),
        present_in: present_in.to_string(),
        missing_from: missing_from.to_string(),
    }
}

#[test]
fn every_default_locale_key_resolves_to_non_empty_text() {
    let catalog = Catalog::bundled();
    let default = catalog.default_table().expect("default table");
    assert!(!default.is_empty());
    for key in default.keys() {
        let found = catalog.resolve(catalog.default_locale(), key);
        assert!(!found.text.trim().is_empty(), "{key} resolved to empty text");
        assert_eq!(found.source, Source::Requested { locale: "en" }, "{key}");
    }
}

#[test]
fn every_chinese_key_resolves_without_raw_key() {
    let catalog = Catalog::bundled();
    let zh = catalog.table("zh").expect("zh table");
    for key in zh.keys() {
        let found = catalog.resolve("zh-CN", key);
        assert_ne!(found.source, Source::RawKey, "{key}");
        assert!(!found.text.is_empty(), "{key}");
    }
}

#[test]
fn unknown_key_falls_back_to_raw_key_in_any_locale() {
    let catalog = Catalog::bundled();
    for locale in ["en", "zh", "zh-TW", "ja", "not a locale"] {
        let found = catalog.resolve(locale, "does.not.exist");
        assert_eq!(found.text, "does.not.exist");
        assert_eq!(found.source, Source::RawKey);
    }
}

#[test]
fn key_missing_in_chinese_uses_english_text() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.t("zh", "nav.proxyPlugin"), "Proxy Plugin");
    assert_eq!(catalog.t("zh", "location.proxyPlugins"), "Proxy Plugins");
    // zh-only keys have no English text to fall back to
    assert_eq!(catalog.t("en", "location.proxySetHeaders"), "location.proxySetHeaders");
    assert_eq!(catalog.t("zh", "upstream.healthCheck"), "健康检查");
}

#[test]
fn validation_messages_interpolate_in_both_locales() {
    let catalog = Catalog::bundled();
    let args = HashMap::from([("max".to_string(), "1024".to_string())]);
    assert_eq!(
        catalog.format("en", "form.limitMax", &args),
        "Must be less than or equal to 1024"
    );
    assert_eq!(catalog.format("zh", "form.limitMax", &args), "不能大于1024");
}

#[test]
fn parity_audit_flags_known_asymmetries() {
    let report = audit(Catalog::bundled()).expect("audit");
    assert!(!report.is_symmetric());
    for expected in [
        missing("nav.plugin", "zh", "en"),
        missing("nav.proxyPlugin", "en", "zh"),
        missing("location.proxySetHeaders", "zh", "en"),
        missing("location.proxyAddHeaders", "zh", "en"),
    ] {
        assert!(
            report.divergences.contains(&expected),
            "{} not reported",
            expected.describe()
        );
    }
}

#[test]
fn parity_audit_matches_recorded_baseline_exactly() {
    let report = audit(Catalog::bundled()).expect("audit");
    let diff = report.against(&Baseline::bundled());
    let describe = |items: &[Divergence]| {
        items
            .iter()
            .map(Divergence::describe)
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert!(
        diff.regressions.is_empty(),
        "new divergences between zh and en:\n{}",
        describe(&diff.regressions)
    );
    assert!(
        diff.stale.is_empty(),
        "fixed divergences still recorded in the baseline:\n{}",
        describe(&diff.stale)
    );
}

#[test]
fn placeholders_agree_between_bundled_locales() {
    let report = audit(Catalog::bundled()).expect("audit");
    let mismatches: Vec<_> = report
        .divergences
        .iter()
        .filter(|d| !matches!(d, Divergence::MissingKey { .. }))
        .collect();
    assert!(mismatches.is_empty(), "{mismatches:?}");
}

#[test]
fn bundled_tables_round_trip_through_every_format() {
    for table in [tables::english().expect("en"), tables::chinese().expect("zh")] {
        for format in [Format::Json, Format::Toml, Format::Yaml] {
            let text = render_table(&table, format).expect("render");
            let loaded = parse_table(&text, format, table.locale()).expect("parse");
            assert_eq!(loaded, table, "{} as {format}", table.locale());
            assert_eq!(
                loaded.keys().collect::<Vec<_>>(),
                table.keys().collect::<Vec<_>>(),
                "{} as {format} keeps source order",
                table.locale()
            );

            let again = render_table(&loaded, format).expect("render again");
            assert_eq!(again, text, "rendering is stable for {format}");
        }
    }
}

#[test]
fn namespaces_group_keys_by_ui_section() {
    let report = audit(Catalog::bundled()).expect("audit");
    let names: Vec<_> = report
        .namespaces
        .iter()
        .map(|ns| ns.namespace.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["nav", "header", "basic", "server", "location", "upstream", "plugin", "form"]
    );

    let location = report
        .namespaces
        .iter()
        .find(|ns| ns.namespace == "location")
        .expect("location namespace");
    assert_eq!(location.counts["zh"], location.counts["en"] + 2);
}
