//! Integration tests wiring the Order aggregate to the event dispatcher.
//!
//! Domain code announces state changes by constructing an `EventRecord`
//! and handing it to a dispatcher owned by the caller; these tests cover
//! that flow end to end.

use std::sync::{Arc, Mutex};

use domain::{Money, Order, OrderItem};
use event_dispatch::{EventDispatcher, EventHandler, EventRecord, HandlerError};

/// Collects the payloads of every event it handles.
#[derive(Default)]
struct CollectingHandler {
    payloads: Mutex<Vec<serde_json::Value>>,
}

impl EventHandler for CollectingHandler {
    fn handle(&self, event: &EventRecord) -> Result<(), HandlerError> {
        self.payloads.lock().unwrap().push(event.payload().clone());
        Ok(())
    }
}

fn sample_order() -> Order {
    Order::new(
        "123",
        "123",
        vec![OrderItem::new(
            "1",
            "Product 1",
            Money::from_dollars(10),
            "123",
            2,
        )],
    )
    .unwrap()
}

#[test]
fn order_creation_notifies_registered_handlers() {
    let mut dispatcher = EventDispatcher::new();
    let handler = Arc::new(CollectingHandler::default());
    dispatcher.register("OrderCreatedEvent", handler.clone() as Arc<dyn EventHandler>);

    let order = sample_order();
    let event = EventRecord::new(
        "OrderCreatedEvent",
        serde_json::json!({
            "id": order.id(),
            "customer_id": order.customer_id(),
            "total_cents": order.total().cents(),
        }),
    );
    dispatcher.notify(&event).unwrap();

    let payloads = handler.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0]["id"], "123");
    assert_eq!(payloads[0]["total_cents"], 2000);
}

#[test]
fn handlers_for_other_events_stay_silent() {
    let mut dispatcher = EventDispatcher::new();
    let created = Arc::new(CollectingHandler::default());
    let updated = Arc::new(CollectingHandler::default());
    dispatcher.register("OrderCreatedEvent", created.clone() as Arc<dyn EventHandler>);
    dispatcher.register("OrderUpdatedEvent", updated.clone() as Arc<dyn EventHandler>);

    let mut order = sample_order();
    order
        .update_items(vec![OrderItem::new(
            "2",
            "Product 2",
            Money::from_dollars(5),
            "456",
            1,
        )])
        .unwrap();

    let event = EventRecord::new(
        "OrderUpdatedEvent",
        serde_json::json!({
            "id": order.id(),
            "total_cents": order.total().cents(),
        }),
    );
    dispatcher.notify(&event).unwrap();

    assert!(created.payloads.lock().unwrap().is_empty());
    assert_eq!(updated.payloads.lock().unwrap().len(), 1);
    assert_eq!(updated.payloads.lock().unwrap()[0]["total_cents"], 500);
}
