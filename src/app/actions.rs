//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never touches the host. It
//! returns a list of [`Action`]s and the plugin shim turns each one into the
//! matching Zellij call, in order.

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the one GET request for the country dataset.
    ///
    /// The response comes back as a `WebRequestResult` tagged with the
    /// countries request context.
    FetchCountries {
        /// Endpoint to query.
        url: String,
    },

    /// Posts a message to the preference worker thread.
    PostToWorker(WorkerMessage),
}
