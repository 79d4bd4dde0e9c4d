//! Splits flowable body text into paragraphs.

/// Splits markdown body text on blank lines into trimmed, non-empty paragraphs.
///
/// A line holding only whitespace counts as blank. Line breaks inside a
/// paragraph are kept. CRLF input is handled by `str::lines`.
pub fn split_paragraphs(body: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body.lines() {
        if line.trim().is_empty() {
            push_paragraph(&mut paragraphs, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_paragraph(&mut paragraphs, &current);

    paragraphs
}

fn push_paragraph(paragraphs: &mut Vec<String>, lines: &[&str]) {
    let text = lines.join("\n");
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
}
