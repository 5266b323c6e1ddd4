//! Display-width aware string helpers for column alignment.
//!
//! Widths are terminal cells: East-Asian wide characters take two.

use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS: &str = "...";

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Shorten `text` to fit `width` cells, ending it with [`ELLIPSIS`].
///
/// Text that already fits is returned unchanged. A wide character that would
/// straddle the limit is dropped, so the result may be one cell short.
///
/// The kept prefix is measured as a whole string, since a variation selector
/// can widen the character before it.
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width < ELLIPSIS.len() {
        return ".".repeat(width);
    }

    let budget = width - ELLIPSIS.len();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        out.push(c);
        if display_width(&out) > budget {
            out.pop();
            break;
        }
    }
    out.push_str(ELLIPSIS);
    out
}

/// Right-pad with spaces up to `width` cells.
pub fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + fill);
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(fill));
    out
}

pub fn fit(text: &str, width: usize) -> String {
    pad(&truncate(text, width), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_wide_chars_twice() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("驚愕"), 4);
        assert_eq!(display_width("Rust入門"), 8);
    }

    #[test]
    fn test_truncate_leaves_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_ascii() {
        let out = truncate("abcdefghijkl", 10);
        assert_eq!(out, "abcdefg...");
        assert_eq!(display_width(&out), 10);
    }

    #[test]
    fn test_truncate_wide_chars() {
        // 7 cells of budget cannot hold a fourth wide char
        let out = truncate("あいうえおかきくけこ", 10);
        assert_eq!(out, "あいう...");
        assert!(display_width(&out) <= 10);
    }

    #[test]
    fn test_truncated_prefix_property() {
        let inputs = [
            "これは非常に長いタイトルなので切り詰められるはずです",
            "https://example.com/a/very/long/path/that/keeps/going/and/going",
            "Mixed 日本語 and English タイトル with width",
            "aaaaaa\u{26A0}\u{FE0F}bbbbbbbb",
            "\u{26A0}\u{FE0F}注意\u{26A0}\u{FE0F}速報\u{2764}\u{FE0F}記事",
        ];
        for input in inputs {
            for width in 3..30 {
                let out = truncate(input, width);
                assert!(display_width(&out) <= width, "{} @ {}", input, width);
                if display_width(input) > width {
                    let head = out.strip_suffix(ELLIPSIS).unwrap();
                    assert!(input.starts_with(head));
                }
            }
        }
    }

    #[test]
    fn test_truncate_emoji_presentation_sequence() {
        let text = "aaaaaa\u{26A0}\u{FE0F}bbbbbbbb";
        let out = truncate(text, 10);
        assert!(display_width(&out) <= 10, "{:?}", out);
        assert!(text.starts_with(out.strip_suffix(ELLIPSIS).unwrap()));
        assert_eq!(display_width(&fit(text, 10)), 10);
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad("驚愕", 6), "驚愕  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_fit_is_exact_width() {
        for text in ["a", "驚愕の事実が明らかに", "https://example.com/x", "abcdefghijklmnop"] {
            assert_eq!(display_width(&fit(text, 12)), 12, "{}", text);
        }
        assert_eq!(fit("驚愕の事実が明らかに", 12), "驚愕の事... ");
    }
}
