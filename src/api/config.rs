use serde::{Deserialize, Serialize};

pub const DEFAULT_FETCH_ENDPOINT: &str = "https://api.example.com/data";

/// Identifiers of the widgets a display surface must provide.
///
/// Hosts look these up (or assign them as widget names) to find the list
/// container and the add-item form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountPoints {
    pub list_container: String,
    pub add_item_form: String,
    pub name_input: String,
    pub quantity_input: String,
    pub price_input: String,
}

impl Default for MountPoints {
    fn default() -> Self {
        Self {
            list_container: "shopping-list-container".to_owned(),
            add_item_form: "add-item-form".to_owned(),
            name_input: "item-name".to_owned(),
            quantity_input: "item-quantity".to_owned(),
            price_input: "item-price".to_owned(),
        }
    }
}

/// Public bootstrap configuration.
///
/// This type is serializable so hosts can keep their setup in a JSON file
/// instead of inventing their own format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListConfig {
    #[serde(default)]
    pub mount_points: MountPoints,
    #[serde(default = "default_seed_sample_items")]
    pub seed_sample_items: bool,
    #[serde(default = "default_fetch_endpoint")]
    pub fetch_endpoint: String,
}

impl Default for ShoppingListConfig {
    fn default() -> Self {
        Self {
            mount_points: MountPoints::default(),
            seed_sample_items: default_seed_sample_items(),
            fetch_endpoint: default_fetch_endpoint(),
        }
    }
}

impl ShoppingListConfig {
    #[must_use]
    pub fn with_sample_items(mut self, enabled: bool) -> Self {
        self.seed_sample_items = enabled;
        self
    }

    #[must_use]
    pub fn with_fetch_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.fetch_endpoint = endpoint.into();
        self
    }
}

fn default_seed_sample_items() -> bool {
    true
}

fn default_fetch_endpoint() -> String {
    DEFAULT_FETCH_ENDPOINT.to_owned()
}
