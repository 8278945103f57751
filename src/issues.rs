//! Issue types for catalog checks.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it: location, the offending message and rule-specific details.

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, TranslationStatus};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    EmptySource,
    Duplicate,
    EmptyTranslation,
    Unfinished,
    Obsolete,
    PlaceMarkers,
    Accelerator,
    DuplicateLocale,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::EmptySource => write!(f, "empty-source"),
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::PlaceMarkers => write!(f, "place-markers"),
            Rule::Accelerator => write!(f, "accelerator"),
            Rule::DuplicateLocale => write!(f, "duplicate-locale"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Catalog Messages (MessageContext)
// ============================================================

/// Message with an empty `<source>`; it can never be looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySourceIssue {
    pub context: MessageContext,
}

impl EmptySourceIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptySource
    }
}

/// Active message sharing `(source, comment)` with an earlier one in the
/// same context. Only the first is ever used by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIssue {
    pub context: MessageContext,
    /// Disambiguation shared by both messages.
    pub comment: Option<String>,
    /// Line of the message that wins the lookup.
    pub first_line: usize,
}

impl DuplicateIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// Finished message whose translation (or one of its plural forms) is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
    /// Plural form indexes that are empty; empty for singular messages.
    pub empty_forms: Vec<usize>,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Active message still marked `type="unfinished"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Message no longer present in the application sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub context: MessageContext,
    /// `Obsolete` or `Vanished`.
    pub status: TranslationStatus,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

/// `%1`..`%99` markers differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceMarkerIssue {
    pub context: MessageContext,
    /// Markers in the source but not in the translation.
    pub missing: Vec<String>,
    /// Markers in the translation but not in the source.
    pub extra: Vec<String>,
}

impl PlaceMarkerIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceMarkers
    }
}

/// Keyboard accelerator present on only one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorIssue {
    pub context: MessageContext,
    /// True when the source has the accelerator and the translation lacks it.
    pub missing_in_translation: bool,
}

impl AcceleratorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Accelerator
    }
}

// ============================================================
// Issue Types - Whole Files
// ============================================================

/// Two catalogs declare the same `language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateLocaleIssue {
    pub file_path: String,
    pub language: String,
    /// The first catalog (in path order) declaring the language.
    pub first_file: String,
}

impl DuplicateLocaleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateLocale
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptySource(EmptySourceIssue),
    Duplicate(DuplicateIssue),
    EmptyTranslation(EmptyTranslationIssue),
    Unfinished(UnfinishedIssue),
    Obsolete(ObsoleteIssue),
    PlaceMarker(PlaceMarkerIssue),
    Accelerator(AcceleratorIssue),
    DuplicateLocale(DuplicateLocaleIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on
/// [`Issue`] without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for EmptySourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        format!("empty source text in {}", self.context.context_name)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        (!self.context.translation.is_empty())
            .then(|| format!("translation: \"{}\"", self.context.translation))
    }
}

impl Report for DuplicateIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let comment = self
            .comment
            .as_ref()
            .map(|c| format!(" with comment \"{}\"", c))
            .unwrap_or_default();
        Some(format!(
            "also defined{} at line {} in {}; only the first is used",
            comment, self.first_line, self.context.context_name
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("add a disambiguating <comment> or remove one of the messages")
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.empty_forms.is_empty() {
            Some("marked finished but the translation is empty".to_string())
        } else {
            let forms: Vec<String> = self.empty_forms.iter().map(|i| i.to_string()).collect();
            Some(format!("empty plural form(s): {}", forms.join(", ")))
        }
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.context.translation.is_empty() {
            Some("not translated yet; the source text is shown".to_string())
        } else {
            Some(format!("(\"{}\") awaiting review", self.context.translation))
        }
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "marked {} in {}",
            self.status, self.context.context_name
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tscat clean --apply` to remove obsolete messages")
    }
}

impl Report for PlaceMarkerIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing in translation: {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("not in source: {}", self.extra.join(", ")));
        }
        Some(parts.join("; "))
    }
}

impl Report for AcceleratorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.missing_in_translation {
            Some(format!(
                "(\"{}\") has no & accelerator",
                self.context.translation
            ))
        } else {
            Some(format!(
                "(\"{}\") has an & accelerator the source lacks",
                self.context.translation
            ))
        }
    }
}

impl Report for DuplicateLocaleIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.language.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("also declared by {}", self.first_file))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // file path, line, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
