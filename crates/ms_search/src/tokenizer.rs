use std::collections::HashSet;

/// Lowercases and splits on non-alphanumeric boundaries into a set of
/// unique tokens. Both queries and article text go through here so the
/// two sides can never tokenize differently.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
