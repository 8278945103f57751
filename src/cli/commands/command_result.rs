use crate::{
    core::{CatalogStats, MessageKey, TranslationStatus},
    issues::{Issue, ObsoleteIssue},
};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Clean(CleanSummary),
    Stats(StatsSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CleanSummary {
    /// Obsolete and vanished messages, removed or to be removed.
    pub obsolete_issues: Vec<ObsoleteIssue>,
    /// Contexts left without messages.
    pub empty_context_count: usize,
    /// Locations whose line numbers were (or would be) dropped.
    pub stripped_location_count: usize,
    /// Catalogs that change.
    pub file_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct CatalogStatsEntry {
    pub file_path: String,
    pub stats: CatalogStats,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStatsEntry>,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub key: MessageKey,
    /// Text the application would show.
    pub text: String,
    /// Status of the catalog entry used; `None` when falling back to the source.
    pub status: Option<TranslationStatus>,
    pub file_path: String,
    pub language: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tscat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found, sorted. For non-check commands, parse errors only.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were looked at.
    pub files_checked: usize,
}
