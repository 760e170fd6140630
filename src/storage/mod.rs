//! Storage layer for the persisted theme preference.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait
//! - `json`: JSON file implementation
//! - `expiry`: Two-hour cookie-style lifetime
//! - `models`: Record types

pub mod backend;
pub mod expiry;
pub mod json;
pub mod models;

pub use backend::PreferenceStore;
pub use expiry::{expires_at, is_live, theme_ttl};
pub use json::JsonPreferenceStore;
pub use models::{ThemeChoice, ThemeRecord};
