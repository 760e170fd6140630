//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`card`]: The single country row builder
//! - [`viewmodel`]: Renderable UI state
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Header, region, search, table, footer and empty renderers
//! - [`helpers`]: Cursor, width fitting and highlighting
//! - [`theme`]: Palettes and ANSI escape generation

pub mod card;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use card::{render_country, CountryRow};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, RegionBarInfo, RegionItem,
    RegionPanelInfo, SearchBarInfo, UIViewModel,
};
