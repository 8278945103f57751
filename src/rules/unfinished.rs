//! Unfinished translation detection rule.

use crate::{
    core::{CatalogFile, CheckContext, TranslationStatus},
    issues::UnfinishedIssue,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.catalogs().iter().flat_map(check_unfinished).collect()
}

/// Active messages still flagged `type="unfinished"`, translated or not.
pub fn check_unfinished(file: &CatalogFile) -> Vec<UnfinishedIssue> {
    file.entries()
        .filter(|entry| entry.message.status() == TranslationStatus::Unfinished)
        .map(|entry| UnfinishedIssue {
            context: entry.to_message_context(&file.file_path),
        })
        .collect()
}
