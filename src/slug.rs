//! Company code generation: display name -> URL-safe lowercase slug.

use regex::Regex;
use std::sync::OnceLock;

fn separator_runs() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("slug pattern is valid"))
}

/// Lowercase `name` and collapse every run of characters that are not letters or digits
/// into a single `-`. Leading and trailing separators are dropped.
/// e.g. "Apple Inc" -> "apple-inc", "  AT&T  Mobility " -> "at-t-mobility"
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    separator_runs()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
