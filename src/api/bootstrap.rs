use tracing::info;

use crate::error::ListResult;
use crate::render::DisplaySink;

use super::{ShoppingListConfig, ShoppingListController};

/// Items present on a fresh list: `(name, quantity, unit price)`.
pub const SAMPLE_ITEMS: [(&str, f64, f64); 4] = [
    ("Apples", 5.0, 1.5),
    ("Bananas", 3.0, 0.75),
    ("Milk", 2.0, 2.99),
    ("Bread", 1.0, 3.49),
];

/// Builds the application context around `sink`.
///
/// Sample items go through the controller, so each one renders, and a final
/// initial render runs regardless of seeding.
pub fn bootstrap<S: DisplaySink>(
    sink: S,
    config: &ShoppingListConfig,
) -> ListResult<ShoppingListController<S>> {
    let mut controller = ShoppingListController::new(sink);

    if config.seed_sample_items {
        for (name, quantity, price) in SAMPLE_ITEMS {
            controller.add_item(name, quantity, price)?;
        }
    }
    controller.render()?;

    info!(
        items = controller.list().total_items(),
        container = %config.mount_points.list_container,
        "shopping list ready"
    );
    Ok(controller)
}
