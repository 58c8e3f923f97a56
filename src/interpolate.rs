//! `{name}` placeholders inside label text.
//!
//! `{{` and `}}` render as literal braces. A placeholder without a matching
//! argument is left as written so the UI shows what is missing.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .unwrap_or_else(|e| panic!("invalid placeholder regex: {e}"))
});

pub fn placeholders(text: &str) -> BTreeSet<String> {
    TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

pub fn interpolate(text: &str, args: &HashMap<String, String>) -> String {
    TOKEN_RE
        .replace_all(text, |caps: &Captures| match caps.get(1) {
            Some(name) => args
                .get(name.as_str())
                .cloned()
                .unwrap_or_else(|| caps[0].to_string()),
            None if &caps[0] == "{{" => "{".to_string(),
            None => "}".to_string(),
        })
        .into_owned()
}
