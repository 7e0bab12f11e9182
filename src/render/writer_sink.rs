use std::borrow::Cow;
use std::io::Write;

use crate::error::{ListError, ListResult};
use crate::render::{DisplaySink, ListRow, RowKind};

/// Streams rows to any [`Write`] target, e.g. stdout.
///
/// A stream cannot erase what it already printed, so a clear starts a new
/// block separated from the previous one by a blank line. Item rows are
/// bulleted with `- `, the summary row is printed as is. Line breaks inside a
/// row are written as single spaces so each row stays on one output line.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    blocks: usize,
}

impl<W: Write> WriterSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, blocks: 0 }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for WriterSink<W> {
    fn clear_rows(&mut self) -> ListResult<()> {
        if self.blocks > 0 {
            writeln!(self.writer).map_err(sink_error)?;
        }
        self.blocks += 1;
        Ok(())
    }

    fn append_row(&mut self, row: &ListRow) -> ListResult<()> {
        let text = single_line(&row.text);
        let written = match row.kind {
            RowKind::Item => writeln!(self.writer, "- {text}"),
            RowKind::Summary => writeln!(self.writer, "{text}"),
        };
        written.map_err(sink_error)?;

        if row.kind == RowKind::Summary {
            self.writer.flush().map_err(sink_error)?;
        }
        Ok(())
    }
}

fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r']) {
        Cow::Owned(text.replace("\r\n", " ").replace(['\n', '\r'], " "))
    } else {
        Cow::Borrowed(text)
    }
}

fn sink_error(err: std::io::Error) -> ListError {
    ListError::Sink(format!("failed to write row: {err}"))
}

#[cfg(test)]
mod tests {
    use super::WriterSink;
    use crate::core::{LineItem, ShoppingList};
    use crate::render::ListRenderer;

    #[test]
    fn redraws_are_separated_by_a_blank_line() {
        let mut list = ShoppingList::new();
        list.add_item(LineItem::new("Apples", 5.0, 1.5));

        let mut renderer = ListRenderer::new(WriterSink::new(Vec::new()));
        renderer.render(&list).expect("first render");
        list.clear_list();
        renderer.render(&list).expect("second render");

        let bytes = renderer.into_sink().into_inner();
        let output = String::from_utf8(bytes).expect("utf8 output");
        assert_eq!(
            output,
            "- Apples (Quantity: 5, Price: $1.5)\nTotal Items: 1\n\nTotal Items: 0\n"
        );
    }

    #[test]
    fn line_breaks_in_names_are_flattened() {
        let mut list = ShoppingList::new();
        list.add_item(LineItem::new("Milk\nBread\r\nJam", 1.0, 1.0));

        let mut renderer = ListRenderer::new(WriterSink::new(Vec::new()));
        renderer.render(&list).expect("render");

        let bytes = renderer.into_sink().into_inner();
        let output = String::from_utf8(bytes).expect("utf8 output");
        assert_eq!(
            output,
            "- Milk Bread Jam (Quantity: 1, Price: $1)\nTotal Items: 1\n"
        );
    }
}
