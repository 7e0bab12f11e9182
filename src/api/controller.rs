use tracing::{debug, warn};

use crate::core::{ItemId, LineItem, ShoppingList};
use crate::error::ListResult;
use crate::render::{DisplaySink, ListRenderer};

/// Single entry point for every mutating user intent.
///
/// The controller owns the list and its renderer; each mutation is followed
/// by exactly one render pass, including removals that match nothing.
#[derive(Debug)]
pub struct ShoppingListController<S: DisplaySink> {
    list: ShoppingList,
    renderer: ListRenderer<S>,
}

impl<S: DisplaySink> ShoppingListController<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_list(ShoppingList::new(), sink)
    }

    #[must_use]
    pub fn with_list(list: ShoppingList, sink: S) -> Self {
        Self {
            list,
            renderer: ListRenderer::new(sink),
        }
    }

    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        price: f64,
    ) -> ListResult<ItemId> {
        let item = LineItem::new(name, quantity, price);
        debug!(
            name = %item.name,
            quantity = item.quantity,
            price = item.unit_price,
            "add item"
        );
        let id = self.list.add_item(item);
        self.renderer.render(&self.list)?;
        Ok(id)
    }

    pub fn remove_item(&mut self, id: ItemId) -> ListResult<Option<LineItem>> {
        let removed = self.list.remove_item(id);
        match &removed {
            Some(item) => debug!(id = id.get(), name = %item.name, "remove item"),
            None => warn!(id = id.get(), "remove ignored: no such item"),
        }
        self.renderer.render(&self.list)?;
        Ok(removed)
    }

    /// Removes the first item equal to `item` by value.
    pub fn remove_matching(&mut self, item: &LineItem) -> ListResult<Option<LineItem>> {
        let removed = self.list.remove_matching(item);
        if removed.is_some() {
            debug!(name = %item.name, "remove matching item");
        } else {
            warn!(name = %item.name, "remove ignored: no matching item");
        }
        self.renderer.render(&self.list)?;
        Ok(removed)
    }

    pub fn clear_list(&mut self) -> ListResult<()> {
        debug!(cleared = self.list.total_items(), "clear list");
        self.list.clear_list();
        self.renderer.render(&self.list)
    }

    /// Re-renders the current state without mutating it.
    pub fn render(&mut self) -> ListResult<()> {
        self.renderer.render(&self.list)
    }

    #[must_use]
    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    #[must_use]
    pub fn render_passes(&self) -> u64 {
        self.renderer.passes()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        self.renderer.sink()
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.renderer.into_sink()
    }
}
