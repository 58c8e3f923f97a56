use crate::settings::{get_settings, update_settings};
use std::sync::OnceLock;
use std::sync::RwLock;

pub use crate::locale::Language;

/// Global language state
fn language_store() -> &'static RwLock<Language> {
    static STORE: OnceLock<RwLock<Language>> = OnceLock::new();
    STORE.get_or_init(|| {
        let lang = if cfg!(test) {
            // Keep unit tests deterministic and avoid reading real user settings.
            Language::English
        } else {
            get_settings()
                .language
                .as_deref()
                .map(Language::from_code)
                .unwrap_or(Language::English)
        };
        RwLock::new(lang)
    })
}

/// Get current language
pub fn current_language() -> Language {
    language_store()
        .read()
        .map(|lang| *lang)
        .unwrap_or(Language::English)
}

/// Set current language and persist
pub fn set_language(lang: Language) -> Result<(), crate::error::AppError> {
    {
        let mut guard = language_store().write()?;
        *guard = lang;
    }

    let mut settings = get_settings();
    settings.language = Some(lang.code().to_string());
    update_settings(settings)
}

/// Check if current language is Chinese
pub fn is_chinese() -> bool {
    current_language() == Language::Chinese
}

/// Get localized text based on current language
#[macro_export]
macro_rules! t {
    ($en:expr, $zh:expr) => {
        if $crate::cli::i18n::is_chinese() {
            $zh
        } else {
            $en
        }
    };
}

// Re-export for convenience
pub use t;

/// Show a [`crate::AppError`] in the CLI language.
pub fn error_message(err: &crate::error::AppError) -> String {
    match err {
        crate::error::AppError::Localized { zh, en, .. } => t!(en.clone(), zh.clone()),
        crate::error::AppError::UnknownLocale(code) => texts::unknown_locale(code),
        other => other.to_string(),
    }
}

// ============================================================================
// Common UI Texts
// ============================================================================

pub mod texts {
    use super::is_chinese;

    // ============================================
    // LOOKUP (查找)
    // ============================================

    pub fn source_requested(locale: &str) -> String {
        if is_chinese() {
            format!("来自语言表 '{}'", locale)
        } else {
            format!("from locale '{}'", locale)
        }
    }

    pub fn source_default_locale(locale: &str) -> String {
        if is_chinese() {
            format!("回退到默认语言 '{}'", locale)
        } else {
            format!("fell back to default locale '{}'", locale)
        }
    }

    pub fn source_raw_key() -> &'static str {
        if is_chinese() {
            "未找到翻译，显示原始 key"
        } else {
            "no translation found, showing the raw key"
        }
    }

    pub fn invalid_arg(raw: &str) -> String {
        if is_chinese() {
            format!("参数格式错误（应为 name=value）: {}", raw)
        } else {
            format!("Invalid argument (expected name=value): {}", raw)
        }
    }

    // ============================================
    // LISTING (列表)
    // ============================================

    pub fn header_key() -> &'static str {
        if is_chinese() {
            "Key"
        } else {
            "Key"
        }
    }

    pub fn header_value() -> &'static str {
        if is_chinese() {
            "文本"
        } else {
            "Text"
        }
    }

    pub fn header_namespace() -> &'static str {
        if is_chinese() {
            "命名空间"
        } else {
            "Namespace"
        }
    }

    pub fn header_locale() -> &'static str {
        if is_chinese() {
            "语言"
        } else {
            "Locale"
        }
    }

    pub fn header_keys() -> &'static str {
        if is_chinese() {
            "Key 数量"
        } else {
            "Keys"
        }
    }

    pub fn header_default() -> &'static str {
        if is_chinese() {
            "默认"
        } else {
            "Default"
        }
    }

    pub fn no_keys_found() -> &'static str {
        if is_chinese() {
            "没有匹配的 key。"
        } else {
            "No matching keys."
        }
    }

    pub fn keys_total(count: usize) -> String {
        if is_chinese() {
            format!("共 {} 个 key", count)
        } else {
            format!("{} key(s) in total", count)
        }
    }

    pub fn unknown_locale(locale: &str) -> String {
        if is_chinese() {
            format!("语言表不存在: {}", locale)
        } else {
            format!("Locale table not found: {}", locale)
        }
    }

    // ============================================
    // PARITY CHECK (一致性检查)
    // ============================================

    pub fn check_title() -> &'static str {
        if is_chinese() {
            "语言表一致性检查"
        } else {
            "Locale Parity Check"
        }
    }

    pub fn check_reference(locale: &str) -> String {
        if is_chinese() {
            format!("参照语言: {}", locale)
        } else {
            format!("Reference locale: {}", locale)
        }
    }

    pub fn check_symmetric() -> &'static str {
        if is_chinese() {
            "✓ 所有语言表的 key 完全一致"
        } else {
            "✓ All locale tables share the same keys"
        }
    }

    pub fn check_known(count: usize) -> String {
        if is_chinese() {
            format!("已知差异（基线中已记录）: {}", count)
        } else {
            format!("Known divergences (recorded in baseline): {}", count)
        }
    }

    pub fn check_regressions(count: usize) -> String {
        if is_chinese() {
            format!("✗ 新增差异: {}", count)
        } else {
            format!("✗ New divergences: {}", count)
        }
    }

    pub fn check_stale(count: usize) -> String {
        if is_chinese() {
            format!("! 基线中已修复的差异: {}", count)
        } else {
            format!("! Baseline entries no longer found: {}", count)
        }
    }

    pub fn check_passed() -> &'static str {
        if is_chinese() {
            "✓ 检查通过"
        } else {
            "✓ Check passed"
        }
    }

    pub fn baseline_written(path: &str) -> String {
        if is_chinese() {
            format!("✓ 基线已写入 {}", path)
        } else {
            format!("✓ Baseline written to {}", path)
        }
    }

    // ============================================
    // EXPORT (导出)
    // ============================================

    pub fn confirm_overwrite(path: &str) -> String {
        if is_chinese() {
            format!("文件 '{}' 已存在，是否覆盖？", path)
        } else {
            format!("File '{}' already exists. Overwrite?", path)
        }
    }

    pub fn cancelled() -> &'static str {
        if is_chinese() {
            "已取消。"
        } else {
            "Cancelled."
        }
    }

    pub fn exported(locale: &str, count: usize, path: &str) -> String {
        if is_chinese() {
            format!("✓ 已导出 '{}' 的 {} 个 key 到 {}", locale, count, path)
        } else {
            format!("✓ Exported {} key(s) of '{}' to {}", count, locale, path)
        }
    }

    pub fn prompt_failed(err: &str) -> String {
        if is_chinese() {
            format!("交互输入失败: {}", err)
        } else {
            format!("Prompt failed: {}", err)
        }
    }

    // ============================================
    // CONFIG (设置)
    // ============================================

    pub fn config_title() -> &'static str {
        if is_chinese() {
            "当前设置"
        } else {
            "Current Settings"
        }
    }

    pub fn config_file() -> &'static str {
        if is_chinese() {
            "设置文件"
        } else {
            "Settings file"
        }
    }

    pub fn config_language() -> &'static str {
        if is_chinese() {
            "界面语言"
        } else {
            "Language"
        }
    }

    pub fn config_default_locale() -> &'static str {
        if is_chinese() {
            "默认语言"
        } else {
            "Default locale"
        }
    }

    pub fn config_locale_dir() -> &'static str {
        if is_chinese() {
            "语言表目录"
        } else {
            "Locale dir"
        }
    }

    pub fn bundled() -> &'static str {
        if is_chinese() {
            "（内置）"
        } else {
            "(bundled)"
        }
    }

    pub fn language_changed(lang: &str) -> String {
        if is_chinese() {
            format!("✓ 界面语言已切换为 {}", lang)
        } else {
            format!("✓ Language set to {}", lang)
        }
    }

    pub fn default_locale_changed(locale: &str) -> String {
        if is_chinese() {
            format!("✓ 默认语言已设置为 {}", locale)
        } else {
            format!("✓ Default locale set to {}", locale)
        }
    }

    pub fn locale_dir_changed(dir: &str) -> String {
        if is_chinese() {
            format!("✓ 语言表目录已设置为 {}", dir)
        } else {
            format!("✓ Locale dir set to {}", dir)
        }
    }

    pub fn locale_dir_cleared() -> &'static str {
        if is_chinese() {
            "✓ 已恢复使用内置语言表"
        } else {
            "✓ Using bundled locale tables again"
        }
    }

    pub fn dir_not_found(dir: &str) -> String {
        if is_chinese() {
            format!("目录不存在: {}", dir)
        } else {
            format!("Directory not found: {}", dir)
        }
    }
}
