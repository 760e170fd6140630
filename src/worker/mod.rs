//! Background worker for theme persistence.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Worker implementation over a [`PreferenceStore`](crate::storage::PreferenceStore)

pub mod handler;
pub mod messages;

pub use handler::PreferenceWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
