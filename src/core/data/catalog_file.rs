use super::{Catalog, Context, Message, MessageContext, MessageLocation};

/// A parsed catalog together with where it came from.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub file_path: String,
    pub catalog: Catalog,
    /// Line of every `<message>` tag, in document order.
    pub message_lines: Vec<usize>,
}

/// A message with its context and file line, as yielded by [`CatalogFile::entries`].
#[derive(Debug, Clone, Copy)]
pub struct MessageEntry<'a> {
    pub context: &'a Context,
    pub message: &'a Message,
    pub line: usize,
}

impl CatalogFile {
    pub fn new(file_path: impl Into<String>, catalog: Catalog, message_lines: Vec<usize>) -> Self {
        Self {
            file_path: file_path.into(),
            catalog,
            message_lines,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.catalog.language.as_deref()
    }

    /// All messages in document order with their file lines.
    ///
    /// Falls back to line 1 when the line table is shorter than the message list.
    pub fn entries(&self) -> impl Iterator<Item = MessageEntry<'_>> {
        self.catalog
            .messages()
            .enumerate()
            .map(|(i, (context, message))| MessageEntry {
                context,
                message,
                line: self.message_lines.get(i).copied().unwrap_or(1),
            })
    }
}

impl MessageEntry<'_> {
    /// Build the reporting context for this entry.
    pub fn to_message_context(&self, file_path: &str) -> MessageContext {
        MessageContext::new(
            MessageLocation::with_line(file_path, self.line),
            self.context.name.clone(),
            self.message.source.clone(),
            self.message.translation_text(),
        )
    }
}
