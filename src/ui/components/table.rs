//! Country table renderer.
//!
//! Four columns: NAME, POPULATION, REGION, CAPITAL. The capital column takes
//! whatever width is left. The selected country's flag URL goes on a detail
//! line under the table since a terminal cannot show the SVG itself.

use crate::app::state::FLAG_LABEL;
use crate::ui::helpers::{self, display_len, fit, position_cursor, print_cell};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, DisplayItem};

const NAME_WIDTH: usize = 30;
const POPULATION_WIDTH: usize = 14;
const REGION_WIDTH: usize = 12;

/// Width taken by the fixed columns and their separators.
const FIXED_WIDTH: usize = 1 + NAME_WIDTH + 1 + POPULATION_WIDTH + 1 + REGION_WIDTH + 1;

/// Renders the column headers at `row`.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let line = format!(
        " {:<NAME_WIDTH$} {:>POPULATION_WIDTH$} {:<REGION_WIDTH$} {}",
        "NAME", "POPULATION", "REGION", "CAPITAL"
    );

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", fit(&line, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the row after the last.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one country. The whole line is padded to `cols` so the selection
/// background spans the pane.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");

    let name = fit(&item.row.name, NAME_WIDTH);
    let name_len = display_len(&name);
    let shown_chars = if name_len < display_len(&item.row.name) {
        name_len.saturating_sub(3)
    } else {
        name_len
    };
    let ranges: Vec<(usize, usize)> = item
        .highlight_ranges
        .iter()
        .map(|&(start, end)| (start.min(shown_chars), end.min(shown_chars)))
        .filter(|(start, end)| start < end)
        .collect();

    helpers::render_highlighted_text(&name, &ranges, theme, item.is_selected);
    print!("{}", " ".repeat(NAME_WIDTH.saturating_sub(name_len)));
    print!(" ");

    let population = fit(&item.row.population, POPULATION_WIDTH);
    print!("{population:>POPULATION_WIDTH$}");
    print!(" ");

    print_cell(&item.row.region, REGION_WIDTH);
    print!(" ");

    let capital_width = cols.saturating_sub(FIXED_WIDTH);
    print_cell(&item.row.capital, capital_width);

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the flag URL of the selected country.
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize) -> usize {
    let text = fit(&format!("{FLAG_LABEL}{}", detail.flag_url), cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(display_len(&text))));
    print!("{}", Theme::reset());
    row + 1
}
