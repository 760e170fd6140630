//! Title line.
//!
//! Centered title with the visible count, plus the theme marker at the right
//! edge (the terminal counterpart of the page's dark-mode class).

use crate::ui::helpers::{center_padding, display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// ```text
/// [padding] Countries (250) [padding] light
/// ```
///
/// The marker is dropped when the pane is too narrow to hold both.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let colors = &theme.colors;
    let marker = format!("{} ", header.theme_marker);
    let (left, right) = center_padding(&header.title, cols);
    let marker_fits = right >= display_len(&marker);

    let mut line = format!("{}{}", Theme::bold(), Theme::fg(&colors.header_fg));
    if let Some(bg) = &colors.header_bg {
        line.push_str(&Theme::bg(bg));
    }
    line.push_str(&" ".repeat(left));
    line.push_str(&header.title);

    if marker_fits {
        line.push_str(&" ".repeat(right - display_len(&marker)));
        line.push_str(&Theme::fg(&colors.theme_marker_fg));
        line.push_str(&marker);
    } else {
        line.push_str(&" ".repeat(right));
    }

    position_cursor(row, 1);
    print!("{line}{}", Theme::reset());
    row + 1
}
