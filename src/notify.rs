use tokio::sync::broadcast;

use crate::models::Product;

/// Published after every successful product mutation. Carries the full
/// updated collection, which is what a live product view needs to re-render.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    ProductsChanged(Vec<Product>),
}

pub type EventSender = broadcast::Sender<StoreEvent>;

const CHANNEL_CAPACITY: usize = 16;

pub fn channel() -> (EventSender, broadcast::Receiver<StoreEvent>) {
    broadcast::channel(CHANNEL_CAPACITY)
}

/// Fire-and-forget publish. A send with no live subscribers is not an error
/// and must never fail the originating request.
pub fn products_changed(events: &EventSender, products: &[Product]) {
    if events
        .send(StoreEvent::ProductsChanged(products.to_vec()))
        .is_err()
    {
        tracing::debug!("products changed with no subscribers");
    }
}
