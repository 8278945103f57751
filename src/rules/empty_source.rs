//! Empty source text detection rule.
//!
//! A message with an empty `<source>` has no usable lookup key; every
//! lookup for it resolves to nothing.

use crate::{
    core::{CatalogFile, CheckContext},
    issues::EmptySourceIssue,
};

pub fn check_empty_source_issues(ctx: &CheckContext) -> Vec<EmptySourceIssue> {
    ctx.catalogs().iter().flat_map(check_empty_source).collect()
}

/// Check every message, obsolete ones included, for an empty source.
pub fn check_empty_source(file: &CatalogFile) -> Vec<EmptySourceIssue> {
    file.entries()
        .filter(|entry| entry.message.source.is_empty())
        .map(|entry| EmptySourceIssue {
            context: entry.to_message_context(&file.file_path),
        })
        .collect()
}
