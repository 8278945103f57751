use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{CatalogFile, LookupPolicy, file_scanner::scan_files, parsers::ts::parse_catalog_file},
    issues::ParseErrorIssue,
};

/// Everything a command needs to look at the catalogs of a project.
///
/// Configuration is resolved at construction time with the following
/// priority (highest to lowest):
/// 1. CLI arguments (e.g., `--translations-root i18n`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
///
/// Catalogs are parsed lazily on first access, in parallel. Files that fail
/// to parse are kept aside as [`ParseErrorIssue`]s instead of failing the run.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Scan base directory.
    pub root_dir: PathBuf,

    /// Catalog files found by the scanner, sorted.
    pub files: BTreeSet<String>,

    pub verbose: bool,

    catalogs: OnceCell<Vec<CatalogFile>>,
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Load config, apply CLI overrides and scan for catalogs.
    ///
    /// # Errors
    ///
    /// Returns error if the config file exists but cannot be read, parsed or
    /// validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file() {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref translations_root) = common_args.translations_root {
            config.includes = vec![translations_root.to_string_lossy().to_string()];
        }

        let scan_result = scan_files(&root_dir, &config.includes, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        tracing::debug!(
            root = %root_dir.display(),
            files = scan_result.files.len(),
            "scan finished"
        );

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            catalogs: OnceCell::new(),
            parse_errors: OnceCell::new(),
        })
    }

    /// Parsed catalogs in file path order (lazy initialization).
    pub fn catalogs(&self) -> &[CatalogFile] {
        self.catalogs.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path, parse_catalog_file(Path::new(file_path))))
                .collect();

            let mut catalogs = Vec::new();
            let mut errors = Vec::new();

            for (file_path, result) in results {
                match result {
                    Ok(catalog) => catalogs.push(catalog),
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {} - {}", "warning:".bold().yellow(), file_path, e);
                        }
                        tracing::debug!(path = %file_path, error = %e, "catalog failed to parse");
                        errors.push(ParseErrorIssue {
                            file_path: file_path.clone(),
                            error: e.to_string(),
                        });
                    }
                }
            }

            let _ = self.parse_errors.set(errors);
            catalogs
        })
    }

    /// Files that could not be parsed. Populated by [`CheckContext::catalogs`].
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        self.catalogs();
        self.parse_errors.get_or_init(Vec::new)
    }

    pub fn lookup_policy(&self) -> LookupPolicy {
        self.config.lookup_policy()
    }
}
