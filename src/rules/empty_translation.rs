//! Empty finished translation detection rule.
//!
//! A message without a status flag claims to be translated. If its text (or
//! one of its plural forms) is empty, the application shows nothing at all
//! instead of falling back to the source text.

use crate::{
    core::{CatalogFile, CheckContext, TranslationStatus, TranslationText},
    issues::EmptyTranslationIssue,
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    ctx.catalogs()
        .iter()
        .flat_map(check_empty_translations)
        .collect()
}

pub fn check_empty_translations(file: &CatalogFile) -> Vec<EmptyTranslationIssue> {
    file.entries()
        .filter(|entry| entry.message.status() == TranslationStatus::Finished)
        .filter_map(|entry| {
            let empty_forms = match &entry.message.translation.text {
                TranslationText::Singular(text) if text.is_empty() => Vec::new(),
                TranslationText::Singular(_) => return None,
                TranslationText::Plural(forms) if forms.is_empty() => Vec::new(),
                TranslationText::Plural(forms) => {
                    let empty: Vec<usize> = forms
                        .iter()
                        .enumerate()
                        .filter(|(_, form)| form.is_empty())
                        .map(|(i, _)| i)
                        .collect();
                    if empty.is_empty() {
                        return None;
                    }
                    empty
                }
            };
            Some(EmptyTranslationIssue {
                context: entry.to_message_context(&file.file_path),
                empty_forms,
            })
        })
        .collect()
}
