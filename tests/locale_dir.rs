use std::fs;

use pingap_locale::cli::commands::check::{self, CheckArgs};
use pingap_locale::cli::{load_catalog, CatalogSource};
use pingap_locale::{
    get_settings, load_dir, update_settings, AppError, AppSettings, Baseline, Source,
};

#[path = "support.rs"]
mod support;
use support::{ensure_test_home, lock_test_mutex, reset_test_fs, settings_file, write_locale_dir};

fn check_args() -> CheckArgs {
    CheckArgs {
        baseline: None,
        no_baseline: false,
        strict: false,
        write_baseline: None,
        json: false,
    }
}

#[test]
fn catalog_from_dir_resolves_with_configured_default() {
    let dir = write_locale_dir(
        &[("nav.basic", "Basic"), ("upstream.healthCheck", "Health Check")],
        &[("nav.basic", "基础配置")],
    );

    let catalog = load_dir(dir.path(), "en").expect("load dir");
    let found = catalog.resolve("zh", "upstream.healthCheck");
    assert_eq!(found.text, "Health Check");
    assert_eq!(found.source, Source::DefaultLocale { locale: "en" });

    let catalog = load_catalog(Some(dir.path()), "zh").expect("load with zh default");
    assert_eq!(catalog.t("fr", "nav.basic"), "基础配置");
    assert_eq!(catalog.t("fr", "upstream.healthCheck"), "upstream.healthCheck");
}

#[test]
fn settings_round_trip_through_settings_file() {
    let _guard = lock_test_mutex();
    ensure_test_home();
    reset_test_fs();

    let settings = AppSettings {
        language: Some("zh".to_string()),
        default_locale: "ZH_cn".to_string(),
        locale_dir: Some("/srv/pingap/locales".to_string()),
    };
    update_settings(settings).expect("update settings");

    let current = get_settings();
    assert_eq!(current.default_locale, "zh-cn");
    assert_eq!(current.language.as_deref(), Some("zh"));

    let raw = fs::read_to_string(settings_file()).expect("settings written");
    assert!(raw.contains("\"localeDir\": \"/srv/pingap/locales\""), "{raw}");
    assert_eq!(AppSettings::load_from(&settings_file()), current);

    update_settings(AppSettings::default()).expect("restore defaults");
}

#[test]
fn catalog_source_flags_override_settings() {
    let _guard = lock_test_mutex();
    ensure_test_home();
    reset_test_fs();
    update_settings(AppSettings::default()).expect("default settings");

    let dir = write_locale_dir(&[("nav.basic", "Basic")], &[("nav.basic", "基础配置")]);
    let source = CatalogSource {
        dir: Some(dir.path().to_path_buf()),
        default_locale: Some("zh".to_string()),
    };
    let catalog = source.load().expect("load");
    assert_eq!(catalog.default_locale(), "zh");
    assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["en", "zh"]);

    let bundled = CatalogSource::default().load().expect("bundled");
    assert_eq!(bundled.t("zh", "nav.plugin"), "插件配置");
}

#[test]
fn check_fails_on_new_divergence_and_passes_with_baseline() {
    let _guard = lock_test_mutex();
    ensure_test_home();
    reset_test_fs();

    let dir = write_locale_dir(
        &[("nav.basic", "Basic"), ("nav.proxyPlugin", "Proxy Plugin")],
        &[("nav.basic", "基础配置"), ("nav.plugin", "插件配置")],
    );
    let source = CatalogSource {
        dir: Some(dir.path().to_path_buf()),
        default_locale: None,
    };

    let err = check::execute(check_args(), &source).expect_err("divergence is a regression");
    assert!(matches!(err, AppError::Localized { key: "check.failed", .. }));

    let baseline_path = dir.path().join("baseline").join("known.json");
    check::execute(
        CheckArgs {
            write_baseline: Some(baseline_path.clone()),
            ..check_args()
        },
        &source,
    )
    .expect("write baseline");
    assert_eq!(Baseline::load(&baseline_path).expect("baseline").entries.len(), 2);

    check::execute(
        CheckArgs {
            baseline: Some(baseline_path),
            ..check_args()
        },
        &source,
    )
    .expect("divergences recorded in baseline");
}

#[test]
fn check_passes_for_bundled_tables() {
    let _guard = lock_test_mutex();
    ensure_test_home();
    reset_test_fs();
    update_settings(AppSettings::default()).expect("default settings");

    check::execute(
        CheckArgs {
            strict: true,
            ..check_args()
        },
        &CatalogSource::default(),
    )
    .expect("bundled tables match their baseline");

    let err = check::execute(
        CheckArgs {
            no_baseline: true,
            ..check_args()
        },
        &CatalogSource::default(),
    )
    .expect_err("bundled tables are not symmetric");
    assert!(matches!(err, AppError::Localized { .. }));
}
