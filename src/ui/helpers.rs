//! Shared rendering utilities.
//!
//! Cursor positioning, width fitting and match highlighting. All width math
//! is in chars, not bytes, since country names are not ASCII-only.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of chars in `text`.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` chars, ending in `...` when shortened.
///
/// # Example
///
/// ```rust
/// use country_browser::ui::helpers::fit;
///
/// assert_eq!(fit("United Kingdom", 8), "Unite...");
/// assert_eq!(fit("Peru", 8), "Peru");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if display_len(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Prints `text` padded with spaces to exactly `width` chars.
pub fn print_cell(text: &str, width: usize) {
    let fitted = fit(text, width);
    print!("{fitted}{}", " ".repeat(width.saturating_sub(display_len(&fitted))));
}

/// Left and right padding that centers `text` in `width` columns.
#[must_use]
pub fn center_padding(text: &str, width: usize) -> (usize, usize) {
    let len = display_len(text);
    let left = width.saturating_sub(len) / 2;
    (left, width.saturating_sub(left + len))
}

/// Prints `text` centered on `row` in `style`, filling the whole line.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = fit(text, cols);
    let (left, right) = center_padding(&text, cols);

    position_cursor(row, 1);
    print!("{style}{}{text}{}{}", " ".repeat(left), " ".repeat(right), Theme::reset());
}

/// Prints `text` with the char ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` char indices, end exclusive. On a selected row
/// highlighting is skipped so it does not fight the selection background.
/// The text is assumed to be already fitted to its column.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
