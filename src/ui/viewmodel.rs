//! View model types representing renderable UI state.
//!
//! Built by `AppState::compute_viewmodel()` and consumed by the renderer.
//! They carry display-ready strings and flags only; no filtering happens past
//! this point.

use crate::ui::card::CountryRow;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title line with count and theme marker.
    pub header: HeaderInfo,

    /// The region title line, always present.
    pub region_bar: RegionBarInfo,

    /// Region list, present only while expanded.
    pub region_panel: Option<RegionPanelInfo>,

    /// Search box, present while searching or while a query is applied.
    pub search_bar: Option<SearchBarInfo>,

    /// Windowed slice of the visible countries.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    /// Flag URL line for the selected country.
    pub detail: Option<DetailInfo>,

    pub footer: FooterInfo,

    /// Message shown instead of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// `false` while the dataset is loading; the renderer then shows only
    /// the empty state.
    pub data_ready: bool,
}

/// One country row in the table.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub row: CountryRow,

    pub is_selected: bool,

    /// Character ranges of the name matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,

    /// `"dark"` or `"light"`.
    pub theme_marker: String,
}

#[derive(Debug, Clone)]
pub struct RegionBarInfo {
    /// `"Region"` or the region last shown.
    pub label: String,

    pub expanded: bool,

    /// A region has been selected and search is scoped to it.
    pub locked: bool,
}

#[derive(Debug, Clone)]
pub struct RegionPanelInfo {
    pub items: Vec<RegionItem>,
}

#[derive(Debug, Clone)]
pub struct RegionItem {
    pub name: String,
    pub is_cursor: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// Keystrokes currently go to the query.
    pub focused: bool,
}

#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub flag_url: String,
}

/// Keybinding hints for the current mode.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "Loading countries").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
