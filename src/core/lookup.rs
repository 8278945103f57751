//! Active lookup table built from a catalog.
//!
//! This is what a running application consults when it renders a label:
//! `(context, source, disambiguation)` in, localized text out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{Catalog, MessageKey, PluralRule, TranslationStatus};

/// Which catalog entries make it into the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupPolicy {
    /// Ship translations still marked unfinished (as long as they are non-empty).
    pub include_unfinished: bool,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            include_unfinished: true,
        }
    }
}

#[derive(Debug, Clone)]
struct LookupEntry {
    forms: Vec<String>,
    status: TranslationStatus,
}

/// Outcome of [`LookupTable::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    /// Status of the catalog entry used; `None` when the text is the source fallback.
    pub status: Option<TranslationStatus>,
}

#[derive(Debug, Clone)]
pub struct LookupTable {
    language: Option<String>,
    plural_rule: PluralRule,
    entries: HashMap<MessageKey, LookupEntry>,
}

impl LookupTable {
    pub fn build(catalog: &Catalog, policy: LookupPolicy) -> Self {
        let mut entries = HashMap::new();
        let mut excluded = 0usize;

        for (context, message) in catalog.messages() {
            let status = message.status();
            let keep = match status {
                TranslationStatus::Obsolete | TranslationStatus::Vanished => false,
                TranslationStatus::Unfinished => policy.include_unfinished,
                TranslationStatus::Finished => true,
            };
            if !keep || message.is_untranslated() {
                excluded += 1;
                continue;
            }

            let key = normalized_key(&context.name, &message.source, message.comment.as_deref());
            let forms = message
                .translation_forms()
                .into_iter()
                .map(str::to_string)
                .collect();
            // first occurrence wins, as in the compiled catalog
            entries
                .entry(key)
                .or_insert(LookupEntry { forms, status });
        }

        tracing::debug!(
            language = catalog.language.as_deref().unwrap_or("?"),
            entries = entries.len(),
            excluded,
            "lookup table built"
        );

        let plural_rule = PluralRule::for_language(catalog.language.as_deref().unwrap_or(""));
        Self {
            language: catalog.language.clone(),
            plural_rule,
            entries,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup. A disambiguated lookup that misses retries without the
    /// disambiguation.
    pub fn get(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&str> {
        self.entry(context, source, comment)
            .and_then(|e| e.forms.first())
            .map(String::as_str)
    }

    /// Localized text, or the source text when there is no usable translation.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str, comment: Option<&str>) -> &'a str {
        self.get(context, source, comment).unwrap_or(source)
    }

    /// Localized plural text for `n`, with `%n` replaced by the count.
    ///
    /// Falls back to the last available form when the catalog has fewer forms
    /// than the language needs, and to the source text when nothing matches.
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: u64,
    ) -> String {
        self.resolve(context, source, comment, Some(n)).text
    }

    /// Text for a lookup together with the status of the entry that produced
    /// it. `count` selects a plural form and fills in `%n`.
    pub fn resolve(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        count: Option<u64>,
    ) -> Resolved {
        let found = self.entry(context, source, comment).and_then(|e| {
            let form = match count {
                Some(n) => e
                    .forms
                    .get(self.plural_rule.form_index(n))
                    .or_else(|| e.forms.last()),
                None => e.forms.first(),
            };
            form.filter(|form| !form.is_empty())
                .map(|form| (form.as_str(), e.status))
        });

        let (template, status) = match found {
            Some((form, status)) => (form, Some(status)),
            None => (source, None),
        };
        let text = match count {
            Some(n) => template.replace("%n", &n.to_string()),
            None => template.to_string(),
        };
        Resolved { text, status }
    }

    fn entry(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&LookupEntry> {
        let key = normalized_key(context, source, comment);
        self.entries.get(&key).or_else(|| {
            key.comment
                .is_some()
                .then(|| self.entries.get(&normalized_key(context, source, None)))
                .flatten()
        })
    }
}

fn normalized_key(context: &str, source: &str, comment: Option<&str>) -> MessageKey {
    MessageKey::new(context, source, comment.filter(|c| !c.is_empty()))
}
