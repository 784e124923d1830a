//! Text layout helpers for the HUD

/// Approximate glyph advance as a fraction of the font size
const CHAR_WIDTH_RATIO: f32 = 0.55;

/// Approximate pixel width of `text` at `font_size`
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO
}

/// Wrap text to fit within a given pixel width.
/// Explicit newlines start a new paragraph; a single word wider than the
/// line gets a line to itself.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if current.is_empty() || text_width(&candidate, font_size) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_text("You found a key!", 20.0, 1000.0), vec!["You found a key!"]);
    }

    #[test]
    fn test_wraps_on_words() {
        // 11 px per char at size 20, so "aaaa bbbb" (99 px) just fits
        let lines = wrap_text("aaaa bbbb cccc", 20.0, 100.0);
        assert_eq!(lines, vec!["aaaa bbbb", "cccc"]);
    }

    #[test]
    fn test_long_word_kept_whole() {
        let lines = wrap_text("supercalifragilistic", 20.0, 50.0);
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_newlines_split_paragraphs() {
        let lines = wrap_text("one\n\ntwo", 20.0, 1000.0);
        assert_eq!(lines, vec!["one", "", "two"]);
    }
}
