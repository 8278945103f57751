//! Keyboard accelerator consistency rule.
//!
//! An `&` before a character marks the mnemonic of a menu entry or button
//! (`&File`). `&&` is a literal ampersand. If only one side of a translation
//! has a mnemonic, keyboard navigation differs between languages.

use crate::{
    core::{CatalogFile, CheckContext},
    issues::AcceleratorIssue,
    utils::contains_alphabetic,
};

pub fn check_accelerator_issues(ctx: &CheckContext) -> Vec<AcceleratorIssue> {
    ctx.catalogs().iter().flat_map(check_accelerators).collect()
}

pub fn check_accelerators(file: &CatalogFile) -> Vec<AcceleratorIssue> {
    file.entries()
        .filter(|entry| entry.message.is_active())
        .filter_map(|entry| {
            let translation = entry.message.translation_text();
            // nothing to navigate to in symbol-only labels
            if !contains_alphabetic(translation) {
                return None;
            }
            let in_source = has_accelerator(&entry.message.source);
            let in_translation = has_accelerator(translation);
            (in_source != in_translation).then(|| AcceleratorIssue {
                context: entry.to_message_context(&file.file_path),
                missing_in_translation: in_source,
            })
        })
        .collect()
}

/// Whether `text` carries a mnemonic.
///
/// `&&` and `& ` are not mnemonics. An `&` that starts an HTML entity
/// (`&lt;`) means the text is rich text, which has no mnemonics at all.
pub fn has_accelerator(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        let Some(next) = chars.next() else {
            return false;
        };
        if next == '&' || next.is_whitespace() || next.is_control() {
            continue;
        }
        let mut entity = next.is_ascii_alphabetic();
        if entity {
            while chars.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                chars.next();
            }
            entity = chars.peek() == Some(&';');
        }
        return !entity;
    }
    false
}
