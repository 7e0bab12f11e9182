pub mod item;
pub mod number;
pub mod store;

pub use item::LineItem;
pub use number::{coerce_number, format_number};
pub use store::{ItemId, ListEntry, ShoppingList};
