/// Splits text into lines, keeping each line's terminator attached to it.
///
/// A final line without a terminator becomes a unit of its own, so files
/// round-trip byte-for-byte regardless of whether they end in a newline and
/// no join policy has to be reconstructed on save.
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello\n", "World!"]
/// "Line 1\r\nLine 2\r\n" -> ["Line 1\r\n", "Line 2\r\n"]
/// ```
#[must_use]
pub fn line_tokenizer(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}
