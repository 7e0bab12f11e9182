use serde::{Deserialize, Serialize};

use crate::core::{LineItem, ShoppingList, format_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Item,
    Summary,
}

/// One line of rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    pub kind: RowKind,
    pub text: String,
}

impl ListRow {
    #[must_use]
    pub fn item(text: impl Into<String>) -> Self {
        Self {
            kind: RowKind::Item,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn summary(text: impl Into<String>) -> Self {
        Self {
            kind: RowKind::Summary,
            text: text.into(),
        }
    }
}

/// Backend-agnostic projection of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListFrame {
    rows: Vec<ListRow>,
}

impl ListFrame {
    #[must_use]
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn item_rows(&self) -> impl Iterator<Item = &ListRow> {
        self.rows.iter().filter(|row| row.kind == RowKind::Item)
    }

    #[must_use]
    pub fn summary(&self) -> Option<&ListRow> {
        self.rows.iter().find(|row| row.kind == RowKind::Summary)
    }
}

/// Builds the rows for `list`: one per item in list order, then the summary.
#[must_use]
pub fn build_frame(list: &ShoppingList) -> ListFrame {
    let mut rows = Vec::with_capacity(list.total_items() + 1);
    rows.extend(list.items().map(|item| ListRow::item(item_row_text(item))));
    rows.push(ListRow::summary(summary_row_text(list.total_items())));
    ListFrame { rows }
}

/// `<name> (Quantity: <quantity>, Price: $<unit price>)`.
///
/// Only the unit price carries a currency prefix; the per-item total is not
/// shown.
#[must_use]
pub fn item_row_text(item: &LineItem) -> String {
    format!(
        "{} (Quantity: {}, Price: ${})",
        item.name,
        format_number(item.quantity),
        format_number(item.unit_price)
    )
}

/// `Total Items: <count>`. A count of entries, not a monetary sum.
#[must_use]
pub fn summary_row_text(count: usize) -> String {
    format!("Total Items: {count}")
}
