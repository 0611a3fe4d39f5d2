use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// ```
/// use tripview::util::display_width;
///
/// assert_eq!(display_width("Reseñas"), 7);
/// assert_eq!(display_width("★★"), 2);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Byte index where the prefix of `s` that fits in `width` columns ends.
fn fit_prefix(s: &str, width: usize) -> usize {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > width {
            return idx;
        }
        used += w;
    }
    s.len()
}

/// Truncate `s` to `max_width` columns, ending in "..." when cut.
///
/// Widths of 3 or less have no room for an ellipsis and get a plain cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width <= ELLIPSIS_WIDTH {
        return Cow::Owned(s[..fit_prefix(s, max_width)].to_string());
    }
    let cut = fit_prefix(s, max_width - ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS))
}

fn is_stripped_control(c: char) -> bool {
    c == '\x7f' || (c < ' ' && c != '\t' && c != '\n' && c != '\r')
}

/// Strip terminal control characters and ANSI escape sequences.
///
/// Text from the content service is rendered straight into the terminal, so
/// CSI (`ESC [`) and OSC (`ESC ]`, ended by BEL or `ESC \`) sequences are
/// dropped along with C0 controls and DEL. Tab, newline and CR are kept.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    if !s.chars().any(is_stripped_control) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            if !is_stripped_control(c) {
                out.push(c);
            }
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                // Parameters run until a final byte in 0x40..=0x7e
                for p in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&p) {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                while let Some(p) = chars.next() {
                    if p == '\x07' {
                        break;
                    }
                    if p == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    Cow::Owned(out)
}

/// Greedy word wrap to `width` columns.
///
/// Words wider than the line are hard-split. Embedded newlines start a new
/// line. Always returns at least one (possibly empty) line.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_width = display_width(word);

            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            while word_width > width {
                let cut = fit_prefix(word, width - line_width).max(
                    word.chars().next().map_or(word.len(), char::len_utf8),
                );
                if line_width > 0 {
                    line.push(' ');
                }
                line.push_str(&word[..cut]);
                lines.push(std::mem::take(&mut line));
                line_width = 0;
                word = &word[cut..];
                word_width = display_width(word);
            }

            if word.is_empty() {
                continue;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_truncation() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
        assert_eq!(truncate_to_width("Short", 10), "Short");
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }

    #[test]
    fn test_wide_char_truncation() {
        assert_eq!(truncate_to_width("日本語テスト", 7), "日本...");
        assert_eq!(truncate_to_width("日本語", 3), "日");
    }

    #[test]
    fn test_narrow_widths() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Testing", 3), "Tes");
        assert_eq!(truncate_to_width("Testing", 4), "T...");
    }

    #[test]
    fn test_accents_are_single_width() {
        assert_eq!(truncate_to_width("Incluídos y más", 10), "Incluíd...");
    }

    #[test]
    fn test_strip_clean_text_borrowed() {
        let input = "line1\nline2\ttabbed";
        assert!(matches!(strip_control_chars(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_controls_and_sequences() {
        assert_eq!(strip_control_chars("he\x00ll\x07o\x7f"), "hello");
        assert_eq!(strip_control_chars("\x1b[31mRed\x1b[0m"), "Red");
        assert_eq!(strip_control_chars("\x1b]0;title\x07safe"), "safe");
        assert_eq!(strip_control_chars("\x1b]0;title\x1b\\safe"), "safe");
        assert_eq!(strip_control_chars("a\x1bb"), "ab");
    }

    #[test]
    fn test_wrap_basic() {
        assert_eq!(
            wrap_text("Island of the Sun and Moon", 10),
            vec!["Island of", "the Sun", "and Moon"]
        );
    }

    #[test]
    fn test_wrap_keeps_newlines_and_empty() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_splits_long_word() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_lines_fit_width() {
        let text = "Embárcate en un viaje inolvidable con nuestro tour por el Lago Titicaca";
        for line in wrap_text(text, 17) {
            assert!(display_width(&line) <= 17, "{:?}", line);
        }
    }
}
