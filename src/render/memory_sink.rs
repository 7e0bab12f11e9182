use crate::error::ListResult;
use crate::render::{DisplaySink, ListRow};

/// In-memory sink used by tests and headless usage.
///
/// It keeps exactly what a real display would currently show, plus how many
/// times it has been cleared.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySink {
    rows: Vec<ListRow>,
    clear_count: usize,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.text.as_str()).collect()
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl DisplaySink for MemorySink {
    fn clear_rows(&mut self) -> ListResult<()> {
        self.rows.clear();
        self.clear_count += 1;
        Ok(())
    }

    fn append_row(&mut self, row: &ListRow) -> ListResult<()> {
        self.rows.push(row.clone());
        Ok(())
    }
}
