//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (duplicates, empty translations, place markers, etc.)
//! - `clean`: Remove obsolete messages from catalogs
//! - `stats`: Show translation progress per catalog
//! - `lookup`: Resolve a message the way the application would
//! - `init`: Initialize tscat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::rules::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root: where the config file search starts and catalogs are scanned from
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Catalog directory (overrides config `includes`)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all enabled rules)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Also drop line numbers from <location> elements
    #[arg(long)]
    pub strip_locations: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Context name (e.g. DownloadManager)
    pub context: String,

    /// Source text (e.g. Clear)
    pub source: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count for plural messages; %n is replaced by it
    #[arg(long, short = 'n')]
    pub count: Option<u64>,

    /// Catalog language to use (e.g. sv_SE); required when several catalogs are found
    #[arg(long, conflicts_with = "file")]
    pub locale: Option<String>,

    /// Catalog file to use instead of scanning
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Ignore translations still marked unfinished (overrides config `includeUnfinished`)
    #[arg(long)]
    pub no_unfinished: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for problems (duplicates, empty translations, place markers, etc.)
    Check(CheckCommand),
    /// Remove obsolete and vanished messages from catalogs
    Clean(CleanCommand),
    /// Show translation statistics per catalog
    Stats(StatsCommand),
    /// Print the translation of a message, falling back to the source text
    Lookup(LookupCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}
