use crate::record::EventRecord;

/// Error type returned by event handlers.
///
/// Handlers are supplied by callers and may fail for reasons the dispatcher
/// knows nothing about, so the error is an opaque boxed type.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A consumer of domain events.
///
/// Implementations are provided by calling code and registered with an
/// [`EventDispatcher`](crate::EventDispatcher) under the event names they
/// care about. The dispatcher does not enumerate or validate handler
/// variants; it only requires this single capability.
pub trait EventHandler: Send + Sync {
    /// Processes one event record, performing whatever side effect the
    /// handler exists for.
    fn handle(&self, event: &EventRecord) -> Result<(), HandlerError>;
}
