//! Host-facing API: configuration, controller, form wiring and bootstrap.

mod bootstrap;
mod config;
mod controller;
mod form;
mod json_contract;

pub use bootstrap::{SAMPLE_ITEMS, bootstrap};
pub use config::{DEFAULT_FETCH_ENDPOINT, MountPoints, ShoppingListConfig};
pub use controller::ShoppingListController;
pub use form::AddItemForm;
pub use json_contract::{CONFIG_JSON_SCHEMA_V1, ShoppingListConfigJsonContractV1};
