use serde::{Deserialize, Serialize};

use crate::core::LineItem;

/// Store-unique identity handed out when an item is appended.
///
/// Two entries with identical fields still carry different ids. Ids are never
/// reused by the store that issued them, not even after a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: ItemId,
    pub item: LineItem,
}

/// Ordered collection of line items. Display order is insertion order.
#[derive(Debug, Default)]
pub struct ShoppingList {
    entries: Vec<ListEntry>,
    next_id: u64,
}

impl ShoppingList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the end of the list.
    pub fn add_item(&mut self, item: LineItem) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(ListEntry { id, item });
        id
    }

    /// Removes the entry carrying `id`. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: ItemId) -> Option<LineItem> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).item)
    }

    /// Removes the first entry whose fields equal `item`. No match is a no-op.
    pub fn remove_matching(&mut self, item: &LineItem) -> Option<LineItem> {
        let index = self.entries.iter().position(|entry| entry.item == *item)?;
        Some(self.entries.remove(index).item)
    }

    pub fn clear_list(&mut self) {
        self.entries = Vec::new();
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.item)
    }

    /// Id of the entry at `index` in display order.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.entries.get(index).map(|entry| entry.id)
    }

    #[must_use]
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.entries.iter().map(|entry| &entry.item)
    }
}
