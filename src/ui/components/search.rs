//! Search box.
//!
//! Three lines, bordered. The border takes the accent color while typing and
//! is dimmed once the query is only applied.

use crate::ui::helpers::{fit, position_cursor, print_cell};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Blank columns on each side of the box.
const MARGIN: usize = 5;

/// Renders the search box at `row` and returns the row after it.
///
/// ```text
///      ┌──────────────┐
///      │ Search: per_ │
///      └──────────────┘
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(MARGIN * 2 + 2);
    let border = Theme::fg(if search.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.text_dim
    });
    let indent = " ".repeat(MARGIN);
    let rule = "─".repeat(inner);

    position_cursor(row, 1);
    print!("{indent}{border}┌{rule}┐{}", Theme::reset());

    let caret = if search.focused { "_" } else { "" };
    let text = fit(&format!(" Search: {}{caret}", search.query), inner);
    position_cursor(row + 1, 1);
    print!("{indent}{border}│{}", Theme::fg(&theme.colors.text_normal));
    print_cell(&text, inner);
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{indent}{border}└{rule}┘{}", Theme::reset());

    row + 3
}
