//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the domain, storage and worker
//! layers:
//!
//! ```text
//! Keys / Host → Event → handle_event → AppState mutations → Actions → Zellij calls
//!                          ↑                                     ↓
//!                          └──────── Worker responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the handler
//! - [`handler`]: Event processing
//! - [`modes`]: Input mode, region panel and data status
//! - [`state`]: The state object and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DataStatus, InputMode, RegionPanel};
pub use state::{AppState, DEFAULT_REGION_LABEL};
