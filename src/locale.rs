//! Locale codes: normalization, negotiation and the built-in languages.

/// Default locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Chinese,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match normalize_code(code).as_str() {
            "zh" | "zh-cn" | "zh-tw" | "zh-hans" | "zh-hant" | "chinese" => Language::Chinese,
            _ => Language::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// `" zh_CN "` becomes `"zh-cn"`.
pub fn normalize_code(code: &str) -> String {
    code.trim().replace('_', "-").to_lowercase()
}

fn primary_subtag(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Pick the available locale that best serves `requested`.
///
/// Exact match first, then the requested primary subtag (`zh-cn` -> `zh`),
/// then any available locale sharing that primary subtag (`zh` -> `zh-cn`).
pub fn negotiate<'a, I>(requested: &str, available: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let requested = normalize_code(requested);
    if requested.is_empty() {
        return None;
    }
    let primary = primary_subtag(&requested);
    let available: Vec<&'a str> = available.into_iter().collect();

    available
        .iter()
        .find(|code| normalize_code(code) == requested)
        .or_else(|| available.iter().find(|code| normalize_code(code) == primary))
        .or_else(|| {
            available
                .iter()
                .find(|code| primary_subtag(&normalize_code(code)) == primary)
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_code_handles_case_and_separator() {
        assert_eq!(normalize_code(" zh_CN "), "zh-cn");
        assert_eq!(normalize_code("EN"), "en");
    }

    #[test]
    fn negotiate_prefers_exact_then_primary() {
        let available = ["en", "zh", "zh-tw"];
        assert_eq!(negotiate("zh-TW", available), Some("zh-tw"));
        assert_eq!(negotiate("zh-CN", available), Some("zh"));
        assert_eq!(negotiate("en_US", available), Some("en"));
        assert_eq!(negotiate("fr", available), None);
        assert_eq!(negotiate("", available), None);
    }

    #[test]
    fn negotiate_widens_to_regional_variant() {
        assert_eq!(negotiate("zh", ["en", "zh-CN"]), Some("zh-CN"));
    }

    #[test]
    fn language_from_code_defaults_to_english() {
        assert_eq!(Language::from_code("zh_CN"), Language::Chinese);
        assert_eq!(Language::from_code("de"), Language::English);
        assert_eq!(Language::Chinese.code(), "zh");
    }
}
