//! Duplicate locale detection rule.
//!
//! One catalog per locale: when two files declare the same `language`, the
//! one loaded last silently wins at runtime.

use std::collections::HashMap;

use crate::{
    core::{CatalogFile, CheckContext},
    issues::DuplicateLocaleIssue,
};

pub fn check_duplicate_locale_issues(ctx: &CheckContext) -> Vec<DuplicateLocaleIssue> {
    check_duplicate_locales(ctx.catalogs())
}

/// Report every catalog that repeats a language declared by an earlier one
/// (in path order). Catalogs without a `language` attribute are skipped.
pub fn check_duplicate_locales(files: &[CatalogFile]) -> Vec<DuplicateLocaleIssue> {
    let mut sorted: Vec<&CatalogFile> = files.iter().collect();
    sorted.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    let mut first_by_language: HashMap<&str, &str> = HashMap::new();
    let mut issues = Vec::new();

    for file in sorted {
        let Some(language) = file.language().filter(|l| !l.is_empty()) else {
            continue;
        };
        match first_by_language.get(language) {
            Some(first_file) => issues.push(DuplicateLocaleIssue {
                file_path: file.file_path.clone(),
                language: language.to_string(),
                first_file: first_file.to_string(),
            }),
            None => {
                first_by_language.insert(language, &file.file_path);
            }
        }
    }

    issues
}
