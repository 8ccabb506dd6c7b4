/// Splits text into Unicode characters.
///
/// ```not_rust
/// "Hey!" -> ["H", "e", "y", "!"]
/// ```
#[must_use]
pub fn character_tokenizer(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}
