//! Lexical normalization: free text → lowercase token set.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Distinct lowercase tokens. Ordered, so iteration is already lexicographic.
pub type TokenSet = BTreeSet<String>;

/// Runs of ASCII letters, digits, `+`, `#`, `.` and `-`.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9+#.\-]+").expect("word pattern is a valid regex"));

/// Tokenizes `text` into its set of lowercase keywords.
///
/// Symbols at either end of a run are trimmed, so `developer.` becomes
/// `developer` and `c++` becomes `c`. Every token starts and ends with a letter
/// or digit.
pub fn normalize_words(text: &str) -> TokenSet {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
