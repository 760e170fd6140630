//! Application state management and view model computation.
//!
//! [`AppState`] is the one explicit state object of the plugin. It owns the
//! dataset, the region set, the filter, and all presentation state, and the
//! event handler is the only thing that mutates it.
//!
//! The listing is recomputed from scratch by [`AppState::apply_filter`] after
//! every change to the dataset or the filter. Selection and windowing work on
//! the visible rows only; hidden world-mode entries never take a row.

use super::modes::{DataStatus, InputMode, RegionPanel};
use crate::domain::{fold_case, list_countries, Country, FilterMode, FilterState, RegionSet};
use crate::ui::card::render_country;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, RegionBarInfo, RegionItem,
    RegionPanelInfo, SearchBarInfo, UIViewModel,
};

/// Label of the region title before any region is shown.
pub const DEFAULT_REGION_LABEL: &str = "Region";

/// Rows taken by everything except the table body: blank line, header,
/// border, region bar, column headers, detail line, border, footer.
const BASE_CHROME_ROWS: usize = 8;

/// Rows taken by the bordered search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dataset, in API order. Empty until the fetch succeeds.
    pub countries: Vec<Country>,

    /// Distinct non-empty regions of `countries`, in first-seen order.
    pub regions: RegionSet,

    pub filter: FilterState,

    /// Indices into `countries` of the non-hidden entries of the last
    /// filter pass.
    visible: Vec<usize>,

    /// Selected row within the visible rows.
    pub selected_index: usize,

    /// Highlighted entry of the region panel.
    pub region_cursor: usize,

    pub input_mode: InputMode,

    pub region_panel: RegionPanel,

    /// Text of the region title.
    pub region_label: String,

    /// Active palette is the dark one.
    pub dark_mode: bool,

    /// The user toggled the theme before the stored value arrived.
    theme_chosen: bool,

    pub light_theme: Theme,
    pub dark_theme: Theme,

    /// Dataset endpoint.
    pub endpoint: String,

    pub data_status: DataStatus,

    fetch_requested: bool,
    theme_requested: bool,
}

impl AppState {
    /// Creates an empty state waiting for the dataset.
    #[must_use]
    pub fn new(light_theme: Theme, dark_theme: Theme, endpoint: impl Into<String>) -> Self {
        Self {
            countries: Vec::new(),
            regions: RegionSet::new(),
            filter: FilterState::new(),
            visible: Vec::new(),
            selected_index: 0,
            region_cursor: 0,
            input_mode: InputMode::Normal,
            region_panel: RegionPanel::Collapsed,
            region_label: DEFAULT_REGION_LABEL.to_string(),
            dark_mode: false,
            theme_chosen: false,
            light_theme,
            dark_theme,
            endpoint: endpoint.into(),
            data_status: DataStatus::Loading,
            fetch_requested: false,
            theme_requested: false,
        }
    }

    /// Palette matching the current theme flag.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        if self.dark_mode {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }

    /// Countries currently shown, in dataset order.
    pub fn visible_countries(&self) -> impl Iterator<Item = &Country> {
        self.visible.iter().map(|&index| &self.countries[index])
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn selected_country(&self) -> Option<&Country> {
        self.visible
            .get(self.selected_index)
            .map(|&index| &self.countries[index])
    }

    /// Moves selection down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves selection up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    pub fn move_region_cursor_down(&mut self) {
        if self.regions.is_empty() {
            return;
        }
        self.region_cursor = (self.region_cursor + 1) % self.regions.len();
    }

    pub fn move_region_cursor_up(&mut self) {
        if self.regions.is_empty() {
            return;
        }
        if self.region_cursor == 0 {
            self.region_cursor = self.regions.len() - 1;
        } else {
            self.region_cursor -= 1;
        }
    }

    /// Flips the region panel. Opening it puts the cursor on the selected
    /// region, if any.
    pub fn toggle_region_panel(&mut self) {
        self.region_panel = self.region_panel.toggle();

        if self.region_panel.is_expanded() {
            self.region_cursor = self
                .filter
                .selected_region()
                .and_then(|selected| self.regions.iter().position(|region| region == selected))
                .unwrap_or(0);
        }
    }

    /// Selects the region under the cursor. Returns the region name, or
    /// `None` if there is no region to select.
    pub fn select_region_at_cursor(&mut self) -> Option<String> {
        let region = self.regions.get(self.region_cursor)?.to_string();
        self.select_region(&region);
        Some(region)
    }

    /// Enters region-locked mode for `region`.
    ///
    /// Collapses the panel, shows the region in the title and replaces the
    /// listing with the region's countries (intersected with any query).
    pub fn select_region(&mut self, region: &str) {
        let _span = tracing::debug_span!("select_region", region = %region).entered();

        self.filter.select_region(region);
        self.region_panel = RegionPanel::Collapsed;
        self.region_label = region.to_string();
        self.selected_index = 0;
        self.apply_filter();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.search_text.push(c);
        self.on_search_changed();
    }

    pub fn pop_search_char(&mut self) {
        self.filter.search_text.pop();
        self.on_search_changed();
    }

    pub fn clear_search(&mut self) {
        self.filter.search_text.clear();
        self.on_search_changed();
    }

    /// Re-filters after the query changed.
    ///
    /// In world mode this also collapses the region panel and points the
    /// region title at the first visible country's region, or resets it to
    /// [`DEFAULT_REGION_LABEL`] when the query is empty. A query with no
    /// match leaves the title alone.
    fn on_search_changed(&mut self) {
        tracing::trace!(query = %self.filter.search_text, "search query updated");

        self.selected_index = 0;
        self.apply_filter();

        if self.filter.mode() != FilterMode::World {
            return;
        }

        self.region_panel = RegionPanel::Collapsed;

        if self.filter.search_text.is_empty() {
            self.region_label = DEFAULT_REGION_LABEL.to_string();
            return;
        }

        let first_region = self.visible_countries().next().map(|country| country.region.clone());
        if let Some(region) = first_region.filter(|region| !region.is_empty()) {
            self.region_label = region;
        }
    }

    /// Installs the fetched dataset and lists it under the current filter.
    pub fn load_countries(&mut self, countries: Vec<Country>) {
        let _span = tracing::debug_span!("load_countries", count = countries.len()).entered();

        self.regions = RegionSet::from_countries(&countries);
        self.countries = countries;
        self.region_cursor = 0;
        self.data_status = DataStatus::Loaded;
        self.apply_filter();

        tracing::debug!(regions = self.regions.len(), "countries loaded");
    }

    /// Leaves the browser without data after a failed fetch.
    pub fn mark_unavailable(&mut self) {
        self.countries.clear();
        self.regions = RegionSet::new();
        self.data_status = DataStatus::Unavailable;
        self.apply_filter();
    }

    /// Recomputes the listing and clamps the selection.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!("apply_filter",
            total = self.countries.len(),
            query_len = self.filter.search_text.len(),
            mode = ?self.filter.mode()
        )
        .entered();

        self.visible = list_countries(&self.countries, &self.filter)
            .into_iter()
            .filter(|entry| !entry.hidden)
            .map(|entry| entry.index)
            .collect();

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }

        tracing::debug!(visible = self.visible.len(), "filter applied");
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.theme_chosen = true;
        self.dark_mode
    }

    /// Applies the persisted theme unless the user already picked one.
    /// Returns `true` if the active palette changed.
    pub fn apply_stored_theme(&mut self, dark: bool) -> bool {
        if self.theme_chosen || self.dark_mode == dark {
            return false;
        }
        self.dark_mode = dark;
        true
    }

    /// Returns the endpoint the first time it is called, `None` afterwards.
    pub fn request_fetch(&mut self) -> Option<String> {
        if self.fetch_requested {
            return None;
        }
        self.fetch_requested = true;
        Some(self.endpoint.clone())
    }

    /// Returns `true` the first time it is called, `false` afterwards.
    pub fn request_stored_theme(&mut self) -> bool {
        !std::mem::replace(&mut self.theme_requested, true)
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// The visible rows are windowed around the selection so the selected
    /// country stays on screen, and while a query is applied the matching
    /// part of each name is marked for highlighting.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mut viewmodel = UIViewModel {
            header: self.compute_header(),
            region_bar: self.compute_region_bar(),
            region_panel: self.compute_region_panel(),
            search_bar: self.compute_search_bar(),
            display_items: vec![],
            selected_index: 0,
            detail: None,
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            data_ready: self.data_status != DataStatus::Loading,
        };

        if self.visible.is_empty() {
            return viewmodel;
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = self.filter.search_text.as_str();

        viewmodel.display_items = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, &country_idx)| {
                let country = &self.countries[country_idx];
                DisplayItem {
                    row: render_country(country),
                    is_selected: visible_start + relative_idx == self.selected_index,
                    highlight_ranges: match_range(&country.name, query).into_iter().collect(),
                }
            })
            .collect();
        viewmodel.selected_index = self.selected_index.saturating_sub(visible_start);
        viewmodel.detail = self.selected_country().map(|country| DetailInfo {
            flag_url: format_flag_url(&country.flag_url, cols.saturating_sub(FLAG_LABEL.len())),
        });

        viewmodel
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.visible.len();
        HeaderInfo {
            title: format!(" Countries ({count}) "),
            theme_marker: if self.dark_mode { "dark" } else { "light" }.to_string(),
        }
    }

    fn compute_region_bar(&self) -> RegionBarInfo {
        RegionBarInfo {
            label: self.region_label.clone(),
            expanded: self.region_panel.is_expanded(),
            locked: self.filter.selected_region().is_some(),
        }
    }

    fn compute_region_panel(&self) -> Option<RegionPanelInfo> {
        if !self.region_panel.is_expanded() {
            return None;
        }

        let selected = self.filter.selected_region();
        let items = self
            .regions
            .iter()
            .enumerate()
            .map(|(index, name)| RegionItem {
                name: name.to_string(),
                is_cursor: index == self.region_cursor,
                is_selected: selected == Some(name),
            })
            .collect();

        Some(RegionPanelInfo { items })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let focused = self.input_mode == InputMode::Search;

        if focused || !self.filter.search_text.is_empty() {
            Some(SearchBarInfo {
                query: self.filter.search_text.clone(),
                focused,
            })
        } else {
            None
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.region_panel) {
            (InputMode::Search, _) => "Esc: clear  Enter: keep query  Ctrl+n/p: navigate  Type to filter",
            (InputMode::Normal, RegionPanel::Expanded) => {
                "j/k: choose region  Enter: select  r/Esc: close  q: quit"
            }
            (InputMode::Normal, RegionPanel::Collapsed) => {
                "j/k: navigate  /: search  r: regions  t: theme  Esc: clear  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle) = match self.data_status {
            DataStatus::Loading => ("Loading countries", "Waiting for the country list".to_string()),
            // Failure is only logged; the browser stays up with an empty table.
            DataStatus::Unavailable => return None,
            DataStatus::Loaded if self.visible.is_empty() => (
                "No countries match",
                self.filter.selected_region().map_or_else(
                    || "Try a different search".to_string(),
                    |region| format!("Nothing in {region} matches the search"),
                ),
            ),
            DataStatus::Loaded => return None,
        };

        Some(EmptyState {
            message: message.to_string(),
            subtitle,
        })
    }

    /// Rows left for the table body after the chrome around it.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let mut chrome = BASE_CHROME_ROWS;

        if self.compute_search_bar().is_some() {
            chrome += SEARCH_BAR_ROWS;
        }
        if self.region_panel.is_expanded() {
            chrome += self.regions.len().max(1);
        }

        total_rows.saturating_sub(chrome)
    }
}

/// Prefix of the detail line, used for width accounting.
pub(crate) const FLAG_LABEL: &str = " Flag: ";

/// Returns the char range in `name` of the first case-insensitive
/// occurrence of `query`, folding the same way as the name filter.
fn match_range(name: &str, query: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = fold_case(query).chars().collect();
    if needle.is_empty() {
        return None;
    }

    // Folded chars tagged with the position of the name char they came from.
    let folded: Vec<(char, usize)> = name
        .chars()
        .enumerate()
        .flat_map(|(position, c)| c.to_lowercase().map(move |lower| (lower, position)))
        .collect();

    let start = folded
        .windows(needle.len())
        .position(|window| window.iter().map(|&(c, _)| c).eq(needle.iter().copied()))?;
    let end = folded[start + needle.len() - 1].1 + 1;

    Some((folded[start].1, end))
}

/// Shortens a flag URL from the left so it fits `max_width` characters.
fn format_flag_url(url: &str, max_width: usize) -> String {
    let len = url.chars().count();
    if len > max_width {
        let keep_chars = max_width.saturating_sub(3);
        let tail: String = url.chars().skip(len - keep_chars).collect();
        format!("...{tail}")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_sample() -> AppState {
        let mut state = AppState::new(Theme::light(), Theme::dark(), "http://localhost/all");
        state.load_countries(vec![
            Country::new("pe.svg", "Peru", 33_000_000, "Americas", Some("Lima")),
            Country::new("fr.svg", "France", 67_000_000, "Europe", Some("Paris")),
            Country::new("cl.svg", "Chile", 19_000_000, "Americas", Some("Santiago")),
        ]);
        state
    }

    fn visible_names(state: &AppState) -> Vec<String> {
        state.visible_countries().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn loaded_dataset_is_fully_visible() {
        let state = state_with_sample();

        assert_eq!(visible_names(&state), ["Peru", "France", "Chile"]);
        assert_eq!(state.regions.iter().collect::<Vec<_>>(), ["Americas", "Europe"]);
        assert_eq!(state.data_status, DataStatus::Loaded);
    }

    #[test]
    fn selection_wraps_over_visible_rows_only() {
        let mut state = state_with_sample();
        state.push_search_char('e');

        assert_eq!(visible_names(&state), ["Peru", "France", "Chile"]);

        state.clear_search();
        state.push_search_char('p');
        assert_eq!(visible_names(&state), ["Peru"]);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_country().map(|c| c.name.as_str()), Some("Peru"));
    }

    #[test]
    fn world_search_points_label_at_first_match_region() {
        let mut state = state_with_sample();
        state.region_panel = RegionPanel::Expanded;

        state.push_search_char('f');

        assert_eq!(state.region_label, "Europe");
        assert_eq!(state.region_panel, RegionPanel::Collapsed);
    }

    #[test]
    fn world_search_without_match_keeps_label() {
        let mut state = state_with_sample();
        state.push_search_char('f');
        state.push_search_char('z');

        assert_eq!(state.visible_count(), 0);
        assert_eq!(state.region_label, "Europe");
    }

    #[test]
    fn clearing_world_search_resets_label() {
        let mut state = state_with_sample();
        state.push_search_char('c');
        state.clear_search();

        assert_eq!(state.region_label, DEFAULT_REGION_LABEL);
        assert_eq!(state.visible_count(), 3);
    }

    #[test]
    fn region_locked_search_keeps_region_label() {
        let mut state = state_with_sample();
        state.select_region("Americas");
        state.push_search_char('f');

        assert_eq!(state.region_label, "Americas");
        assert!(visible_names(&state).is_empty());
    }

    #[test]
    fn opening_panel_puts_cursor_on_selected_region() {
        let mut state = state_with_sample();
        state.select_region("Europe");

        state.toggle_region_panel();

        assert_eq!(state.region_cursor, 1);
    }

    #[test]
    fn stored_theme_yields_to_user_choice() {
        let mut state = state_with_sample();

        assert!(state.toggle_theme());
        assert!(!state.apply_stored_theme(false));
        assert!(state.dark_mode);
    }

    #[test]
    fn fetch_is_requested_once() {
        let mut state = state_with_sample();

        assert_eq!(state.request_fetch().as_deref(), Some("http://localhost/all"));
        assert_eq!(state.request_fetch(), None);
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = AppState::new(Theme::light(), Theme::dark(), "");
        state.load_countries(
            (0..50)
                .map(|i| Country::new("", format!("Country {i}"), i, "Somewhere", None))
                .collect(),
        );
        for _ in 0..40 {
            state.move_selection_down();
        }

        let vm = state.compute_viewmodel(20, 80);

        assert_eq!(vm.display_items.len(), 12);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].row.name, "Country 40");
    }

    #[test]
    fn viewmodel_highlights_query_case_insensitively() {
        let mut state = state_with_sample();
        state.input_mode = InputMode::Search;
        state.push_search_char('R');
        state.push_search_char('a');

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.display_items[0].row.name, "France");
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(1, 3)]);
        assert!(vm.search_bar.is_some_and(|bar| bar.focused));
    }

    #[test]
    fn viewmodel_reports_loading_before_data() {
        let state = AppState::new(Theme::light(), Theme::dark(), "");

        let vm = state.compute_viewmodel(24, 80);

        assert!(!vm.data_ready);
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("Loading countries"));
    }

    #[test]
    fn failed_fetch_renders_empty_browser_without_message() {
        let mut state = AppState::new(Theme::light(), Theme::dark(), "");
        state.mark_unavailable();

        let vm = state.compute_viewmodel(24, 80);

        assert!(vm.data_ready);
        assert!(vm.empty_state.is_none());
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.header.title, " Countries (0) ");
    }

    #[test]
    fn empty_region_country_stays_in_the_unfiltered_list() {
        let mut state = AppState::new(Theme::light(), Theme::dark(), "");
        state.load_countries(vec![
            Country::new("pe.svg", "Peru", 33_000_000, "Americas", Some("Lima")),
            Country::new("", "Nowhere", 0, "", None),
        ]);

        let names: Vec<&str> = state.visible_countries().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Peru", "Nowhere"]);
        assert_eq!(state.regions.iter().collect::<Vec<_>>(), ["Americas"]);

        state.push_search_char('n');
        state.push_search_char('o');
        let names: Vec<&str> = state.visible_countries().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Nowhere"]);
        // An empty region never becomes the title.
        assert_eq!(state.region_label, DEFAULT_REGION_LABEL);
    }

    #[test]
    fn highlight_follows_multi_char_case_folding() {
        assert_eq!(match_range("İzmiria", "i\u{307}z"), Some((0, 2)));
        assert_eq!(match_range("İzmiria", "zm"), Some((1, 3)));
        assert_eq!(match_range("İzmiria", "\u{307}"), Some((0, 1)));
        assert_eq!(match_range("Peru", ""), None);
    }

    #[test]
    fn long_flag_url_is_shortened_from_the_left() {
        assert_eq!(format_flag_url("https://flagcdn.com/pe.svg", 10), ".../pe.svg");
        assert_eq!(format_flag_url("pe.svg", 10), "pe.svg");
    }
}
