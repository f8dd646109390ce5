use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex"));

/// Lowercase, strip diacritics, and collapse anything that is not `a-z0-9`
/// into single spaces. `"Tesla Model-3"`, `"tesla_model_3"` and
/// `" TESLA  model 3 "` all become `"tesla model 3"`.
pub fn normalize_text(input: &str) -> String {
    let lower = input.trim().to_lowercase();

    // NFKD, then drop combining marks
    let no_diacritics: String = lower.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    NON_ALNUM
        .replace_all(&no_diacritics, " ")
        .trim()
        .to_string()
}
