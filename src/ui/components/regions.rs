//! Region title and region list renderers.

use crate::ui::helpers::{display_len, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{RegionBarInfo, RegionPanelInfo};

/// Renders the region title line.
///
/// ```text
///  ▸ Region            (collapsed)
///  ▾ Europe  [locked]  (expanded, after a selection)
/// ```
pub fn render_region_bar(row: usize, bar: &RegionBarInfo, theme: &Theme, cols: usize) -> usize {
    let arrow = if bar.expanded { '▾' } else { '▸' };
    let lock = if bar.locked { "  [locked]" } else { "" };
    let text = fit(&format!(" {arrow} {}{lock}", bar.label), cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.region_fg));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(display_len(&text))));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one line per region, marking the cursor and the selected region.
pub fn render_region_panel(row: usize, panel: &RegionPanelInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    if panel.items.is_empty() {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit("   (no regions)", cols));
        print!("{}", Theme::reset());
        return current_row + 1;
    }

    for item in &panel.items {
        let marker = if item.is_selected { '*' } else { ' ' };
        let text = fit(&format!("   {marker} {}", item.name), cols);

        position_cursor(current_row, 1);
        if item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.region_fg));
        }
        print!("{text}");
        print!("{}", " ".repeat(cols.saturating_sub(display_len(&text))));
        print!("{}", Theme::reset());

        current_row += 1;
    }

    current_row
}
