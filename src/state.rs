use crate::{
    models::{Cart, Product},
    notify::EventSender,
    store::JsonStore,
};

#[derive(Clone)]
pub struct AppState {
    pub products: JsonStore<Product>,
    pub carts: JsonStore<Cart>,
    pub events: EventSender,
}
