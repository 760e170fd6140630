//! Status and no-match screens.
//!
//! Used for the loading screen and for a filter that matches nothing.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and its subtitle centered, starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    print_centered(row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let dimmed = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(row + 1, &empty.subtitle, &dimmed, cols);

    row + 2
}
