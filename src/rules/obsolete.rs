//! Obsolete message detection rule.
//!
//! Messages the extraction tool could no longer find in the application.
//! They are never looked up; `tscat clean` removes them.

use crate::{
    core::{CatalogFile, CheckContext},
    issues::ObsoleteIssue,
};

pub fn check_obsolete_issues(ctx: &CheckContext) -> Vec<ObsoleteIssue> {
    ctx.catalogs().iter().flat_map(check_obsolete).collect()
}

pub fn check_obsolete(file: &CatalogFile) -> Vec<ObsoleteIssue> {
    file.entries()
        .filter(|entry| !entry.message.is_active())
        .map(|entry| ObsoleteIssue {
            context: entry.to_message_context(&file.file_path),
            status: entry.message.status(),
        })
        .collect()
}
