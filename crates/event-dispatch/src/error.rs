use thiserror::Error;

use crate::handler::HandlerError;

/// Errors that can occur while dispatching an event.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler failed while processing an event.
    ///
    /// Delivery stops at the first failing handler; handlers registered
    /// after it are not invoked for this notification.
    #[error("handler failed for event '{event_name}': {source}")]
    Handler {
        event_name: String,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Returns the name of the event whose delivery failed.
    pub fn event_name(&self) -> &str {
        match self {
            DispatchError::Handler { event_name, .. } => event_name,
        }
    }
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
