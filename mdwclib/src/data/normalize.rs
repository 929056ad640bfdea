//! Text normalization.

/// Lowercase `text` and delete every ASCII punctuation character.
///
/// Punctuation is removed, not replaced by whitespace, so words joined only
/// by punctuation merge into one: `"end.The"` becomes `"endthe"`.
/// Whitespace and digits are left untouched. Lowercasing uses Unicode's
/// default case mapping, independent of locale.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}
