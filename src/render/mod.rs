mod frame;
mod memory_sink;
mod writer_sink;

pub use frame::{ListFrame, ListRow, RowKind, build_frame, item_row_text, summary_row_text};
pub use memory_sink::MemorySink;
pub use writer_sink::WriterSink;

use tracing::trace;

use crate::core::ShoppingList;
use crate::error::ListResult;

/// Contract implemented by any display surface.
///
/// Sinks only know about rows of text. They never see the list itself, so
/// the store and controller stay testable without a real display.
pub trait DisplaySink {
    /// Discards every row previously appended.
    fn clear_rows(&mut self) -> ListResult<()>;

    /// Appends one row after the existing ones.
    fn append_row(&mut self, row: &ListRow) -> ListResult<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn clear_rows(&mut self) -> ListResult<()> {
        (**self).clear_rows()
    }

    fn append_row(&mut self, row: &ListRow) -> ListResult<()> {
        (**self).append_row(row)
    }
}

/// Projects a [`ShoppingList`] onto a [`DisplaySink`].
///
/// Every pass replaces the sink's content wholesale: the sink is cleared, then
/// each item row is appended in list order, then the summary row.
#[derive(Debug)]
pub struct ListRenderer<S: DisplaySink> {
    sink: S,
    passes: u64,
}

impl<S: DisplaySink> ListRenderer<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink, passes: 0 }
    }

    pub fn render(&mut self, list: &ShoppingList) -> ListResult<()> {
        let frame = build_frame(list);

        self.sink.clear_rows()?;
        for row in frame.rows() {
            self.sink.append_row(row)?;
        }

        self.passes += 1;
        trace!(
            rows = frame.rows().len(),
            pass = self.passes,
            "rendered shopping list"
        );
        Ok(())
    }

    /// Number of completed render passes.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
