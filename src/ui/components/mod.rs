//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title, count and theme marker
//! - [`regions`]: Region title line and the expandable region list
//! - [`search`]: Search input box
//! - [`table`]: Country table and flag detail line
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Loading and no-match messages

mod empty;
mod footer;
mod header;
mod regions;
mod search;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use regions::{render_region_bar, render_region_panel};
use search::render_search_bar;
use table::{render_detail, render_table_headers, render_table_rows};

/// Row of the loading message when nothing else is drawn.
const EMPTY_STATE_ROW: usize = 6;

/// Renders a horizontal border line at `row`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Renders the browser layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Region title]
/// [Region list, when expanded]
/// [Search bar - 3 lines, when searching or a query is applied]
/// [Table headers]
/// [Table rows or no-match message]
/// [Flag detail line]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_browser(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_region_bar(current_row, &vm.region_bar, theme, cols);
    if let Some(panel) = &vm.region_panel {
        current_row = render_region_panel(current_row, panel, theme, cols);
    }
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        current_row = render_table_rows(current_row, &vm.display_items, theme, cols);
        if let Some(detail) = &vm.detail {
            render_detail(current_row, detail, theme, cols);
        }
    }

    render_chrome_bottom(vm, theme, cols, rows);
}

/// Renders only the header, a centered message and the footer, used until
/// the dataset is available.
pub fn render_status(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_header(2, &vm.header, theme, cols);
    render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(EMPTY_STATE_ROW, empty, theme, cols);
    }

    render_chrome_bottom(vm, theme, cols, rows);
}

fn render_chrome_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
