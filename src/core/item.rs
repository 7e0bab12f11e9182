use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// One shopping-list entry: a name, a quantity and a unit price.
///
/// Values are taken as given. Negative, infinite and `NaN` quantities or prices
/// are stored unchanged and flow through to the rendered text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Quantity multiplied by unit price, recomputed on every call.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

// `NaN` fields compare equal to themselves so an item built from bad input can
// still be found by value.
impl PartialEq for LineItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && OrderedFloat(self.quantity) == OrderedFloat(other.quantity)
            && OrderedFloat(self.unit_price) == OrderedFloat(other.unit_price)
    }
}

impl Eq for LineItem {}
