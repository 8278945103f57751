//! Catalog check rules.
//!
//! Each rule is a pure function over a parsed [`CatalogFile`](crate::core::CatalogFile)
//! returning its own issue type, plus a `check_*_issues` wrapper that runs it
//! over every catalog of a [`CheckContext`](crate::core::CheckContext).
//!
//! - `empty_source`: messages with no source text
//! - `duplicate`: ambiguous `(source, comment)` pairs in a context
//! - `empty_translation`: finished messages without text
//! - `unfinished`: messages awaiting translation or review
//! - `obsolete`: messages no longer used by the application
//! - `place_markers`: `%1`..`%99` mismatches
//! - `accelerator`: `&` mnemonic mismatches
//! - `duplicate_locale`: catalogs sharing a language

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod accelerator;
pub mod duplicate;
pub mod duplicate_locale;
pub mod empty_source;
pub mod empty_translation;
pub mod obsolete;
pub mod place_markers;
pub mod unfinished;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckRule {
    EmptySource,
    Duplicate,
    EmptyTranslation,
    Unfinished,
    Obsolete,
    PlaceMarkers,
    Accelerator,
    DuplicateLocale,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::EmptySource,
            CheckRule::Duplicate,
            CheckRule::EmptyTranslation,
            CheckRule::Unfinished,
            CheckRule::Obsolete,
            CheckRule::PlaceMarkers,
            CheckRule::Accelerator,
            CheckRule::DuplicateLocale,
        ]
    }
}
