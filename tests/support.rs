#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

use pingap_locale::{save_table, LocaleTable, HOME_ENV};
use tempfile::TempDir;

/// Point the settings directory at a scratch dir shared by the whole test
/// binary. Must run before anything reads settings.
pub fn ensure_test_home() -> &'static Path {
    static HOME: OnceLock<TempDir> = OnceLock::new();
    let home = HOME.get_or_init(|| {
        let dir = tempfile::tempdir().expect("create test home");
        std::env::set_var(HOME_ENV, dir.path());
        dir
    });
    home.path()
}

pub fn settings_file() -> PathBuf {
    ensure_test_home().join("settings.json")
}

pub fn reset_test_fs() {
    let path = settings_file();
    if path.exists() {
        fs::remove_file(&path).expect("remove settings file");
    }
}

pub fn lock_test_mutex() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write `en.json` and `zh.yaml` into a fresh directory.
pub fn write_locale_dir(en: &[(&str, &str)], zh: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("locale dir");
    let en = LocaleTable::from_pairs("en", en).expect("en table");
    let zh = LocaleTable::from_pairs("zh", zh).expect("zh table");
    save_table(&en, &dir.path().join("en.json")).expect("write en");
    save_table(&zh, &dir.path().join("zh.yaml")).expect("write zh");
    dir
}
