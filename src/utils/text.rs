/// Case-folds search input and names so substring checks ignore case.
#[inline]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Case-insensitive containment where `needle` is already normalized.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
