//! Duplicate message detection rule.
//!
//! Two active messages in one context with the same source text and
//! disambiguation make the lookup ambiguous: only the first one is used.

use std::collections::HashMap;

use crate::{
    core::{CatalogFile, CheckContext},
    issues::DuplicateIssue,
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateIssue> {
    ctx.catalogs().iter().flat_map(check_duplicates).collect()
}

/// Report every active message that repeats an earlier `(context, source, comment)`.
///
/// An empty `<comment>` is the same as no comment.
pub fn check_duplicates(file: &CatalogFile) -> Vec<DuplicateIssue> {
    let mut first_seen: HashMap<(&str, &str, Option<&str>), usize> = HashMap::new();
    let mut issues = Vec::new();

    for entry in file.entries().filter(|e| e.message.is_active()) {
        let comment = entry.message.comment.as_deref().filter(|c| !c.is_empty());
        let key = (
            entry.context.name.as_str(),
            entry.message.source.as_str(),
            comment,
        );
        match first_seen.get(&key) {
            Some(&first_line) => issues.push(DuplicateIssue {
                context: entry.to_message_context(&file.file_path),
                comment: comment.map(str::to_string),
                first_line,
            }),
            None => {
                first_seen.insert(key, entry.line);
            }
        }
    }

    issues
}
