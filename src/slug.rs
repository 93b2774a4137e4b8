//! URL- and filename-safe slugs

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static UNSAFE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\-]").expect("valid regex"));

/// Trim, lowercase, whitespace runs to `-`, anything outside `[a-z0-9-]` dropped
///
/// Leading and trailing whitespace is trimmed first, so `" Vaso "` gives
/// `vaso` rather than `-vaso-`.
pub fn slugify(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    let dashed = WHITESPACE.replace_all(&lower, "-");
    UNSAFE.replace_all(&dashed, "").into_owned()
}
