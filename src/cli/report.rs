//! Report formatting and printing utilities.
//!
//! This module displays issues in cargo-style format and prints the
//! per-command summaries. Separate from core logic to allow tscat to be used
//! as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CatalogStatsEntry, CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ContextStats, MessageCounts};
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::count_noun;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to a writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no issues found",
            count_noun(files, "catalog", "catalogs")
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Message(ctx) => {
            // Clickable location: --> path:line
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line()
            );

            // "Context: source" with the source text underlined
            let prefix = format!("{}: ", ctx.context_name);
            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}{}",
                ctx.line().to_string().blue(),
                "|".blue(),
                prefix.dimmed(),
                ctx.source,
                width = max_line_width
            );

            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let caret_len = UnicodeWidthStr::width(ctx.source.as_str()).max(1);
            let carets = "^".repeat(caret_len);
            let carets = match severity {
                Severity::Error => carets.red(),
                Severity::Warning => carets.yellow(),
            };
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                carets,
                width = max_line_width,
                padding = caret_padding
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(result.files_checked, stdout);
            }
        }
        CommandSummary::Clean(summary) => print_clean_to(summary, stdout),
        CommandSummary::Stats(summary) => print_stats_to(&summary.catalogs, verbose, stdout),
        CommandSummary::Lookup(summary) => {
            print_lookup_to(summary, stdout);
            if verbose {
                print_lookup_note_to(summary, &mut io::stderr().lock());
            }
        }
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_clean_to<W: Write>(summary: &CleanSummary, writer: &mut W) {
    if summary.file_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Nothing to clean".green()
        );
        return;
    }

    let mut current_file: Option<&str> = None;
    for issue in &summary.obsolete_issues {
        let ctx = &issue.context;
        if current_file != Some(ctx.file_path()) {
            if current_file.is_some() {
                let _ = writeln!(writer);
            }
            let _ = writeln!(writer, "{}:", ctx.file_path().blue());
            current_file = Some(ctx.file_path());
        }
        let _ = writeln!(
            writer,
            "  {} {}: {}{}  {}",
            "-".dimmed(),
            ctx.context_name,
            ctx.source,
            format!(" (line {})", ctx.line()).dimmed(),
            format!("[{}]", issue.status).dimmed()
        );
    }
    if current_file.is_some() {
        let _ = writeln!(writer);
    }

    let removed = summary.obsolete_issues.len();
    let (verb, verb_locations) = if summary.is_apply {
        ("Removed".green().bold(), "Stripped".green().bold())
    } else {
        ("Would remove".yellow().bold(), "Would strip".yellow().bold())
    };

    if removed > 0 {
        let _ = writeln!(
            writer,
            "{} {} obsolete message(s) and {} empty context(s) from {}.",
            verb,
            removed,
            summary.empty_context_count,
            count_noun(summary.file_count, "file", "files")
        );
    }
    if summary.stripped_location_count > 0 {
        let _ = writeln!(
            writer,
            "{} line numbers from {} location(s).",
            verb_locations, summary.stripped_location_count
        );
    }
    if !summary.is_apply {
        let _ = writeln!(
            writer,
            "Run with {} to rewrite these catalogs.",
            "--apply".cyan()
        );
    }
}

fn print_stats_to<W: Write>(catalogs: &[CatalogStatsEntry], verbose: bool, writer: &mut W) {
    if catalogs.is_empty() {
        let _ = writeln!(writer, "{} No catalogs found", FAILURE_MARK.red());
        return;
    }

    for (i, entry) in catalogs.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(writer);
        }
        let stats = &entry.stats;
        let _ = writeln!(
            writer,
            "{} ({})",
            entry.file_path.blue(),
            stats.language.as_deref().unwrap_or("no language").bold()
        );
        print_counts_to(&stats.totals, "  ", writer);

        if verbose {
            for ctx in &stats.contexts {
                let _ = writeln!(
                    writer,
                    "    {:<width$} {:>6.1}%  ({}/{} finished)",
                    ctx.name,
                    ctx.counts.completion_percent(),
                    ctx.counts.finished,
                    ctx.counts.active(),
                    width = context_name_width(&stats.contexts)
                );
            }
        }
    }
}

fn context_name_width(contexts: &[ContextStats]) -> usize {
    contexts
        .iter()
        .map(|c| UnicodeWidthStr::width(c.name.as_str()))
        .max()
        .unwrap_or(0)
}

/// The release tool's summary lines, plus completion and obsolete counts.
fn print_counts_to<W: Write>(counts: &MessageCounts, indent: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}Generated {} translation(s) ({} finished and {} unfinished)",
        indent,
        counts.generated(),
        counts.finished,
        counts.unfinished
    );
    if counts.untranslated > 0 {
        let _ = writeln!(
            writer,
            "{}Ignored {} untranslated source text(s)",
            indent, counts.untranslated
        );
    }
    if counts.obsolete > 0 {
        let _ = writeln!(
            writer,
            "{}{} obsolete message(s)",
            indent, counts.obsolete
        );
    }
    let _ = writeln!(
        writer,
        "{}{:.1}% complete",
        indent,
        counts.completion_percent()
    );
}

/// The resolved text alone, so the output can be used by scripts.
fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.text);
}

fn print_lookup_note_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let language = summary.language.as_deref().unwrap_or("?");
    match summary.status {
        Some(status) => {
            let _ = writeln!(
                writer,
                "{} {} resolved from {} ({}, {})",
                "note:".bold(),
                summary.key,
                summary.file_path,
                language,
                status
            );
        }
        None => {
            let _ = writeln!(
                writer,
                "{} no usable translation for {} in {} ({}); showing the source text",
                "note:".bold(),
                summary.key,
                summary.file_path,
                language
            );
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}

// ============================================================
// Tests
// ============================================================
