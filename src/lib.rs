//! shopping-list: a list store, a row renderer and a controller tying them
//! together.
//!
//! Every mutation goes through [`api::ShoppingListController`] and is followed
//! by one full redraw into a [`render::DisplaySink`]. Sinks exist for tests
//! (in memory), terminals (any `io::Write`) and, behind the `gtk4-adapter`
//! feature, GTK4.

pub mod api;
pub mod console;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "remote-fetch")]
pub mod fetch;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ShoppingListConfig, ShoppingListController};
pub use error::{ListError, ListResult};
