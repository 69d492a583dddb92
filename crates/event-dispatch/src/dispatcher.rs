use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::error::{DispatchError, Result};
use crate::handler::EventHandler;
use crate::record::EventRecord;

/// Registry mapping event names to ordered handler lists.
///
/// Handlers fire in registration order. Registering the same handler twice
/// under the same name is allowed and yields two invocations per
/// notification. The dispatcher assumes single-threaded access: mutation
/// takes `&mut self` and notification runs synchronously on the caller's
/// thread, returning only after the last handler returns.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the list for `event_name`, creating the list
    /// if this is the first registration under that name.
    pub fn register(&mut self, event_name: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.handlers.entry(event_name.into()).or_default().push(handler);
    }

    /// Removes the first registration of `handler` under `event_name`,
    /// matching by handler identity.
    ///
    /// Unknown event names and unregistered handlers are silent no-ops.
    pub fn unregister(&mut self, event_name: &str, handler: &Arc<dyn EventHandler>) {
        if let Some(registered) = self.handlers.get_mut(event_name)
            && let Some(index) = registered.iter().position(|h| Arc::ptr_eq(h, handler))
        {
            registered.remove(index);
        }
    }

    /// Clears every registration. Intended for test and teardown use.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Synchronously invokes every handler registered under the event's
    /// name, in registration order.
    ///
    /// An event name with no registrations is a silent no-op. The first
    /// handler failure aborts delivery to the remaining handlers and is
    /// returned as [`DispatchError::Handler`].
    pub fn notify(&self, event: &EventRecord) -> Result<()> {
        let Some(registered) = self.handlers.get(event.name()) else {
            trace!(event_name = event.name(), "no handlers registered");
            return Ok(());
        };

        for handler in registered {
            handler.handle(event).map_err(|source| DispatchError::Handler {
                event_name: event.name().to_string(),
                source,
            })?;
        }

        Ok(())
    }

    /// Read access to the current registration map, for introspection.
    pub fn event_handlers(&self) -> &HashMap<String, Vec<Arc<dyn EventHandler>>> {
        &self.handlers
    }
}
