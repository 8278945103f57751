use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        CheckRule, accelerator::check_accelerator_issues, duplicate::check_duplicate_issues,
        duplicate_locale::check_duplicate_locale_issues,
        empty_source::check_empty_source_issues,
        empty_translation::check_empty_translation_issues, obsolete::check_obsolete_issues,
        place_markers::check_place_marker_issues, unfinished::check_unfinished_issues,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    // Rules named on the command line run even when disabled in the config.
    let checks: Vec<CheckRule> = if cmd.checks.is_empty() {
        CheckRule::all()
            .into_iter()
            .filter(|rule| ctx.config.is_rule_enabled(*rule))
            .collect()
    } else {
        cmd.checks.clone()
    };
    tracing::debug!(?checks, "running checks");

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::EmptySource => {
                let issues = check_empty_source_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptySource));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Duplicate));
            }
            CheckRule::EmptyTranslation => {
                let issues = check_empty_translation_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Obsolete => {
                let issues = check_obsolete_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Obsolete));
            }
            CheckRule::PlaceMarkers => {
                let issues = check_place_marker_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceMarker));
            }
            CheckRule::Accelerator => {
                let issues = check_accelerator_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Accelerator));
            }
            CheckRule::DuplicateLocale => {
                let issues = check_duplicate_locale_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateLocale));
            }
        }
    }

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        true,
    ))
}
