// WHY: Segmented sentences may span hard line breaks in the source document
// Collapsing whitespace keeps one sentence per output line

/// Collapse every whitespace run (including `\r\n`) to one space and trim the ends
pub fn normalize_sentence(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    normalize_sentence_into(text, &mut buffer);
    buffer
}

/// Same as [`normalize_sentence`], reusing the caller's buffer
pub fn normalize_sentence_into(text: &str, buffer: &mut String) {
    buffer.clear();
    let mut pending_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            buffer.push(' ');
            pending_space = false;
        }
        buffer.push(ch);
    }
}
