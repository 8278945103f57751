//! Place marker consistency rule.
//!
//! `%1`..`%99` (and the locale-aware `%L1` spelling) are filled in by
//! `QString::arg`. A marker missing from the translation drops an argument;
//! an extra one shows up literally.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::{
    core::{CatalogFile, CheckContext},
    issues::PlaceMarkerIssue,
};

static PLACE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(\d{1,2})").expect("valid regex"));

pub fn check_place_marker_issues(ctx: &CheckContext) -> Vec<PlaceMarkerIssue> {
    ctx.catalogs().iter().flat_map(check_place_markers).collect()
}

/// Compare markers of every active message against each non-empty form.
///
/// One issue per message: the first mismatching form is reported.
pub fn check_place_markers(file: &CatalogFile) -> Vec<PlaceMarkerIssue> {
    let mut issues = Vec::new();

    for entry in file.entries().filter(|e| e.message.is_active()) {
        let source_markers = place_markers(&entry.message.source);

        let mismatch = entry
            .message
            .translation_forms()
            .into_iter()
            .filter(|form| !form.is_empty())
            .map(place_markers)
            .find(|markers| *markers != source_markers);

        if let Some(translation_markers) = mismatch {
            issues.push(PlaceMarkerIssue {
                context: entry.to_message_context(&file.file_path),
                missing: source_markers
                    .difference(&translation_markers)
                    .map(|n| format!("%{}", n))
                    .collect(),
                extra: translation_markers
                    .difference(&source_markers)
                    .map(|n| format!("%{}", n))
                    .collect(),
            });
        }
    }

    issues
}

/// Marker numbers in `text`; `%L2` counts as `%2`.
pub fn place_markers(text: &str) -> BTreeSet<u8> {
    PLACE_MARKER
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u8>().ok())
        .filter(|n| (1..=99).contains(n))
        .collect()
}
