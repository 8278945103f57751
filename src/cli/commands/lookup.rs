use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use super::super::args::LookupCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, LookupSummary};
use crate::{
    config::load_config,
    core::{CatalogFile, CheckContext, LookupTable, MessageKey, parsers::ts::parse_catalog_file},
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let (file, mut policy) = match &cmd.file {
        Some(path) => {
            let root = cmd.common.root.clone().unwrap_or_else(|| PathBuf::from("."));
            let config = load_config(&root)?.config;
            let file = parse_catalog_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            (file, config.lookup_policy())
        }
        None => {
            let ctx = CheckContext::new(&cmd.common)?;
            let file = select_catalog(ctx.catalogs(), cmd.locale.as_deref())?.clone();
            (file, ctx.lookup_policy())
        }
    };
    if cmd.no_unfinished {
        policy.include_unfinished = false;
    }

    let table = LookupTable::build(&file.catalog, policy);
    let comment = cmd.comment.as_deref();
    let resolved = table.resolve(&cmd.context, &cmd.source, comment, cmd.count);
    tracing::debug!(
        path = %file.file_path,
        found = resolved.status.is_some(),
        "lookup resolved"
    );

    Ok(finish(
        CommandSummary::Lookup(LookupSummary {
            key: MessageKey::new(&cmd.context, &cmd.source, comment),
            text: resolved.text,
            status: resolved.status,
            language: file.catalog.language.clone(),
            file_path: file.file_path,
        }),
        Vec::new(),
        1,
        true,
    ))
}

/// Pick the catalog for `locale`, or the only catalog when no locale is given.
///
/// `sv-SE` matches a catalog declaring `sv_SE`.
fn select_catalog<'a>(catalogs: &'a [CatalogFile], locale: Option<&str>) -> Result<&'a CatalogFile> {
    match locale {
        Some(locale) => {
            let wanted = locale.replace('-', "_");
            catalogs
                .iter()
                .find(|c| c.language() == Some(wanted.as_str()))
                .with_context(|| {
                    format!(
                        "No catalog for locale '{}' (found: {})",
                        locale,
                        languages(catalogs)
                    )
                })
        }
        None => match catalogs {
            [] => bail!("No catalogs found"),
            [only] => Ok(only),
            _ => bail!(
                "Found {} catalogs; use --locale to pick one of: {}",
                catalogs.len(),
                languages(catalogs)
            ),
        },
    }
}

fn languages(catalogs: &[CatalogFile]) -> String {
    let languages: Vec<&str> = catalogs
        .iter()
        .map(|c| c.language().unwrap_or("?"))
        .collect();
    if languages.is_empty() {
        "none".to_string()
    } else {
        languages.join(", ")
    }
}
