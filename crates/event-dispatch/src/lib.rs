//! In-process publish/subscribe for domain events.
//!
//! Domain code constructs an [`EventRecord`] describing what happened and
//! hands it to an [`EventDispatcher`], which fans out synchronously to every
//! [`EventHandler`] registered under the event's name. The dispatcher is an
//! explicitly constructed dependency owned by the application context; there
//! is no ambient global registry.

pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod record;

pub use dispatcher::EventDispatcher;
pub use error::{DispatchError, Result};
pub use handler::{EventHandler, HandlerError};
pub use record::EventRecord;
