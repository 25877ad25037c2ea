//! Shared rendering utilities.
//!
//! User-provided text (titles, URLs, profile fields, imported data) is passed
//! through [`sanitize`] before it reaches the terminal, so stored content can
//! never inject escape sequences or move the cursor.

use crate::ui::theme::Palette;

pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Removes control characters, including ESC, CR and LF.
///
/// # Examples
///
/// ```
/// use linkhub::ui::helpers::sanitize;
///
/// assert_eq!(sanitize("bold\u{1b}[1m title\n"), "bold[1m title");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Shortens `text` to at most `width` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }

    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Prints `text` centered on `row`, filling the rest of the line with spaces.
pub fn print_centered(row: usize, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Prints a horizontal rule across the full width.
pub fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Palette::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Palette::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_printable_unicode() {
        assert_eq!(sanitize("Café ☕ <b>"), "Café ☕ <b>");
        assert_eq!(sanitize("\u{7}bell\r\n"), "bell");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
        assert_eq!(truncate("ééééé", 4), "é...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
