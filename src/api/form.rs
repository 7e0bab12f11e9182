use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ItemId, coerce_number};
use crate::error::ListResult;
use crate::render::DisplaySink;

use super::ShoppingListController;

/// Text currently held by the three add-item inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl AddItemForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Handles a form submission.
    ///
    /// The name is taken verbatim; quantity and price are coerced, so
    /// non-numeric text becomes `NaN` instead of an error. All three fields are
    /// cleared once the item has been added.
    pub fn submit<S: DisplaySink>(
        &mut self,
        controller: &mut ShoppingListController<S>,
    ) -> ListResult<ItemId> {
        let quantity = coerce_number(&self.quantity);
        let price = coerce_number(&self.price);
        debug!(
            raw_quantity = %self.quantity,
            raw_price = %self.price,
            "submit add-item form"
        );

        let id = controller.add_item(self.name.as_str(), quantity, price)?;
        self.reset();
        Ok(id)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.quantity.clear();
        self.price.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.quantity.is_empty() && self.price.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::AddItemForm;
    use crate::api::ShoppingListController;
    use crate::render::MemorySink;

    #[test]
    fn non_numeric_fields_flow_through_as_nan() {
        let mut controller = ShoppingListController::new(MemorySink::new());
        let mut form = AddItemForm::new("Eggs", "a dozen", "");

        let id = form.submit(&mut controller).expect("submit");
        let item = controller.list().get(id).expect("item stored");
        assert!(item.quantity.is_nan());
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(
            controller.sink().texts()[0],
            "Eggs (Quantity: NaN, Price: $0)"
        );
        assert!(form.is_empty());
    }
}
