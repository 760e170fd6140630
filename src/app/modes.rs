//! Input, panel and data-loading state types.
//!
//! These small enums decide which keybindings are active and which layout the
//! renderer draws:
//!
//! - [`InputMode`]: whether keystrokes edit the search query
//! - [`RegionPanel`]: the two-state region list toggle
//! - [`DataStatus`]: where the one-shot country fetch stands

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and commands. The search query, if any, stays applied.
    #[default]
    Normal,

    /// Printable keys edit the search query.
    Search,
}

/// Visibility of the region list.
///
/// Starts collapsed. `toggle` is the only transition besides selecting a
/// region, which always collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionPanel {
    #[default]
    Collapsed,
    Expanded,
}

impl RegionPanel {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// Progress of the initial country fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataStatus {
    /// Waiting for permissions or for the response.
    #[default]
    Loading,

    /// The dataset arrived and decoded.
    Loaded,

    /// The fetch failed or was never allowed. The browser shows an empty
    /// table and there is no retry.
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_collapsed() {
        let panel = RegionPanel::default();

        assert_eq!(panel.toggle(), RegionPanel::Expanded);
        assert_eq!(panel.toggle().toggle(), RegionPanel::Collapsed);
    }
}
