use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};

use crate::error::AppError;
use crate::locale::{normalize_code, DEFAULT_LOCALE};

/// Overrides the settings directory (`~/.pingap-locale` by default).
pub const HOME_ENV: &str = "PINGAP_LOCALE_HOME";

/// 应用设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// 命令行界面语言（en|zh）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 查找失败时回退的语言
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// 外部语言表目录，未设置时使用内置语言表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_dir: Option<String>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: None,
            default_locale: default_locale(),
            locale_dir: None,
        }
    }
}

impl AppSettings {
    pub fn settings_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pingap-locale")
    }

    pub fn settings_path() -> PathBuf {
        Self::settings_dir().join("settings.json")
    }

    fn normalize(&mut self) {
        self.language = self
            .language
            .as_ref()
            .map(|s| normalize_code(s))
            .filter(|s| matches!(s.as_str(), "en" | "zh"));

        let locale = normalize_code(&self.default_locale);
        self.default_locale = if locale.is_empty() {
            default_locale()
        } else {
            locale
        };

        self.locale_dir = self
            .locale_dir
            .as_ref()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
    }

    /// Read settings from `path`; a missing or broken file gives defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str::<AppSettings>(&content) {
            Ok(mut settings) => {
                settings.normalize();
                settings
            }
            Err(err) => {
                log::warn!(
                    "解析设置文件失败，将使用默认设置。路径: {}, 错误: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        let mut normalized = self.clone();
        normalized.normalize();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&normalized)
            .map_err(|e| AppError::JsonSerialize { source: e })?;
        fs::write(path, json).map_err(|e| AppError::io(path, e))?;
        Ok(())
    }

    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::settings_path())
    }

    /// `localeDir` with `~` expanded.
    pub fn locale_dir_path(&self) -> Option<PathBuf> {
        self.locale_dir.as_deref().map(resolve_override_path)
    }
}

fn settings_store() -> &'static RwLock<AppSettings> {
    static STORE: OnceLock<RwLock<AppSettings>> = OnceLock::new();
    STORE.get_or_init(|| RwLock::new(AppSettings::load()))
}

fn resolve_override_path(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(stripped) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    } else if let Some(stripped) = raw.strip_prefix("~\\") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    PathBuf::from(raw)
}

pub fn get_settings() -> AppSettings {
    settings_store()
        .read()
        .map(|s| s.clone())
        .unwrap_or_default()
}

pub fn update_settings(mut new_settings: AppSettings) -> Result<(), AppError> {
    new_settings.normalize();
    new_settings.save()?;

    let mut guard = settings_store().write()?;
    *guard = new_settings;
    Ok(())
}

pub fn set_default_locale(code: &str) -> Result<(), AppError> {
    let mut settings = get_settings();
    settings.default_locale = code.to_string();
    update_settings(settings)
}

pub fn set_locale_dir(dir: Option<&str>) -> Result<(), AppError> {
    let mut settings = get_settings();
    settings.locale_dir = dir.map(|d| d.to_string());
    update_settings(settings)
}
