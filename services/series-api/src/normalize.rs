//! Title Normalizer
//!
//! Turns raw user input into the canonical title used as the search key:
//! every space-delimited token starts upper-case and continues lower-case.
//!
//! Empty tokens are preserved, so `"the  office"` becomes `"The  Office"`
//! with both spaces intact.

use std::fmt;

/// Canonical, title-cased form of a user-supplied show name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTitle(String);

impl NormalizedTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw title. Never fails; `""` maps to `""`.
pub fn normalize(raw: &str) -> NormalizedTitle {
    let lowered = raw.to_lowercase();
    let words: Vec<String> = lowered.split(' ').map(capitalize).collect();
    NormalizedTitle(words.join(" "))
}

/// Upper-case the first character of an already lower-cased word.
///
/// Characters whose upper-case form expands to several characters (`ß` ->
/// `SS`) are kept as-is, otherwise a second pass would lower the tail again.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut out = String::with_capacity(word.len());
    out.push(head);
    out.push_str(chars.as_str());
    out
}
