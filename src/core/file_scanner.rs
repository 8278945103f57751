use std::{
    collections::BTreeSet,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;
use xml::reader::{EventReader, XmlEvent};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for catalog files.
pub struct ScanResult {
    /// Catalog paths, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Find `.ts` catalogs under `base_dir`.
///
/// `includes` entries are literal paths (directories or files) or glob
/// patterns relative to `base_dir`; an empty list scans `base_dir` itself.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let roots: Vec<PathBuf> = if includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten()),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for root in roots {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_catalog_file(path) {
                files.insert(path_str.into());
            } else if path.is_file() && has_ts_extension(path) {
                tracing::debug!(path = %path_str, "skipping .ts file that is not a catalog");
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_ts_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("ts")
}

/// A `.ts` file is a catalog if its root element is `<TS>`. TypeScript
/// sources share the extension. Reading stops at the first element, after
/// the declaration, doctype and any leading comments.
fn is_catalog_file(path: &Path) -> bool {
    if !has_ts_extension(path) {
        return false;
    }
    let Ok(file) = File::open(path) else {
        return false;
    };
    for event in EventReader::new(BufReader::new(file)) {
        match event {
            Ok(XmlEvent::StartElement { name, .. }) => return name.local_name == "TS",
            Ok(XmlEvent::EndDocument) | Err(_) => return false,
            Ok(_) => {}
        }
    }
    false
}
