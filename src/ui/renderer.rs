//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI on stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout using the active palette.
///
/// Does not clear the screen; Zellij hands the plugin a fresh frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows = rows, cols = cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

/// Picks the status screen until data is ready, the full browser after.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if vm.data_ready {
        components::render_browser(vm, theme, cols, rows);
    } else {
        components::render_status(vm, theme, cols, rows);
    }
}
