use crate::core::{Catalog, Context, Message, TranslationStatus};

/// Message counts by translation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCounts {
    /// Finished and non-empty.
    pub finished: usize,
    /// Marked unfinished but carrying text.
    pub unfinished: usize,
    /// Active with no text at all.
    pub untranslated: usize,
    /// Obsolete or vanished.
    pub obsolete: usize,
}

impl MessageCounts {
    fn add(&mut self, message: &Message) {
        match message.status() {
            TranslationStatus::Obsolete | TranslationStatus::Vanished => self.obsolete += 1,
            _ if message.is_untranslated() => self.untranslated += 1,
            TranslationStatus::Unfinished => self.unfinished += 1,
            TranslationStatus::Finished => self.finished += 1,
        }
    }

    /// Active messages (everything but obsolete).
    pub fn active(&self) -> usize {
        self.finished + self.unfinished + self.untranslated
    }

    /// Translations a release build would ship.
    pub fn generated(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Share of active messages with a finished translation, 0-100.
    pub fn completion_percent(&self) -> f64 {
        match self.active() {
            0 => 100.0,
            active => self.finished as f64 * 100.0 / active as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextStats {
    pub name: String,
    pub counts: MessageCounts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub language: Option<String>,
    pub totals: MessageCounts,
    pub contexts: Vec<ContextStats>,
}

impl CatalogStats {
    pub fn compute(catalog: &Catalog) -> Self {
        let contexts: Vec<ContextStats> = catalog.contexts.iter().map(context_stats).collect();
        let mut totals = MessageCounts::default();
        for ctx in &contexts {
            totals.finished += ctx.counts.finished;
            totals.unfinished += ctx.counts.unfinished;
            totals.untranslated += ctx.counts.untranslated;
            totals.obsolete += ctx.counts.obsolete;
        }
        Self {
            language: catalog.language.clone(),
            totals,
            contexts,
        }
    }
}

fn context_stats(context: &Context) -> ContextStats {
    let mut counts = MessageCounts::default();
    for message in &context.messages {
        counts.add(message);
    }
    ContextStats {
        name: context.name.clone(),
        counts,
    }
}
