use crate::error::ParseError;
use crate::extractor::extract_text;

/// Line boundaries recognised when splitting extracted text. `\r\n` splits
/// twice; the empty piece between is dropped with the other blank lines.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Stripped from line ends: Unicode whitespace and the ASCII unit separator.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{1f}'
}

/// Trims every line, drops the empty ones and joins the rest with `\n`.
pub fn clean_text(text: &str) -> String {
    text.split(is_line_boundary)
        .map(|line| line.trim_matches(is_blank))
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join("\n")
}

pub fn extract_clean_text(html: &[u8]) -> Result<String, ParseError> {
    let text = extract_text(html)?;
    Ok(clean_text(&text))
}
