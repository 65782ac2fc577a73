use scraper::Html;

/// Reduces a markup-bearing string to its text content, decoding character references
/// and trimming surrounding whitespace. The input is parsed as an HTML fragment, so the
/// result matches what reading `textContent` off the parsed nodes gives.
pub fn markup_to_text(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    let text: String = fragment.root_element().text().collect();
    text.trim().to_string()
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_ix, _)) => &text[..byte_ix],
        None => text,
    }
}
