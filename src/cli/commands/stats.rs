use anyhow::Result;

use super::super::args::StatsCommand;
use super::helper::finish;
use super::{CatalogStatsEntry, CommandResult, CommandSummary, StatsSummary};
use crate::{
    core::{CatalogStats, CheckContext},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let catalogs = ctx
        .catalogs()
        .iter()
        .map(|file| CatalogStatsEntry {
            file_path: file.file_path.clone(),
            stats: CatalogStats::compute(&file.catalog),
        })
        .collect();

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { catalogs }),
        issues,
        ctx.files.len(),
        true,
    ))
}
