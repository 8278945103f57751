use std::path::Path;

use anyhow::{Context, Result};

use super::super::args::CleanCommand;
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, writer::save_catalog},
    issues::{Issue, ObsoleteIssue},
    rules::obsolete::check_obsolete,
};

/// Drop obsolete and vanished messages (and contexts left empty) from every
/// catalog. Files are only rewritten with `--apply`.
pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let mut obsolete_issues: Vec<ObsoleteIssue> = Vec::new();
    let mut empty_context_count = 0;
    let mut stripped_location_count = 0;
    let mut file_count = 0;

    for file in ctx.catalogs() {
        let mut catalog = file.catalog.clone();
        let contexts_before = catalog.contexts.len();

        let removed = catalog.purge_obsolete();
        let stripped = if cmd.strip_locations {
            catalog.strip_location_lines()
        } else {
            0
        };
        if removed == 0 && stripped == 0 {
            continue;
        }

        obsolete_issues.extend(check_obsolete(file));
        empty_context_count += contexts_before - catalog.contexts.len();
        stripped_location_count += stripped;
        file_count += 1;

        if apply {
            save_catalog(&catalog, Path::new(&file.file_path))
                .with_context(|| format!("Failed to write {}", file.file_path))?;
            tracing::debug!(path = %file.file_path, removed, stripped, "catalog rewritten");
        }
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            obsolete_issues,
            empty_context_count,
            stripped_location_count,
            file_count,
            is_apply: apply,
        }),
        issues,
        ctx.files.len(),
        false,
    ))
}
