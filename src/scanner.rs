//! Directory scanning: the structural inverse of materialization.
//!
//! The scanner walks an existing directory tree and emits the marker markup
//! that the materializer consumes, turning filesystem structure plus file
//! contents back into a reusable template. Path segments of the form
//! `#some_name` are rewritten into placeholder expressions so a scanned
//! tree can serve as a parametrized generator.

use crate::error::Result;
use cruet::Inflector;
use log::debug;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

/// Matches a path segment that should become a template placeholder:
/// a hash sign followed by letters and underscores, nothing else.
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^#([a-zA-Z_]+)$").unwrap())
}

/// Rewrites a placeholder path segment into a render expression.
///
/// The letters after the hash become a PascalCase field name; the helper is
/// `filename_lower` when the raw segment starts with a lowercase letter and
/// `filename` otherwise. Non-placeholder segments pass through untouched.
///
/// `#model_name` becomes `{{ filename_lower(ModelName) }}`.
fn fix_name(name: &str) -> String {
    let Some(captures) = placeholder_pattern().captures(name) else {
        return name.to_string();
    };
    let raw = &captures[1];
    let helper = if raw.starts_with(|c: char| c.is_ascii_lowercase()) {
        "filename_lower"
    } else {
        "filename"
    };
    format!("{{{{ {helper}({}) }}}}", raw.to_pascal_case())
}

/// Splits a file name into its stem and extension, keeping the dot with
/// the extension. Names without a dot have an empty extension.
fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

struct Scanner {
    out: String,
    skip_dir_pattern: Option<Regex>,
    /// Open directory contexts: the directory's path paired with the
    /// (possibly placeholder-rewritten) name its open marker was emitted
    /// with, innermost last.
    open_dirs: Vec<(PathBuf, String)>,
}

impl Scanner {
    /// Closes open directory contexts until the top of the stack is the
    /// parent of `path`, so sibling and upward transitions in the walk
    /// produce correctly nested close markers.
    fn close_until_parent(&mut self, path: &Path) {
        let parent = path.parent();
        while let Some((dir, _)) = self.open_dirs.last() {
            if Some(dir.as_path()) == parent {
                break;
            }
            self.close_dir();
        }
    }

    fn close_dir(&mut self) {
        if let Some((_, name)) = self.open_dirs.pop() {
            self.out.push_str(&format!("<<<{name}/\n"));
        }
    }

    fn enter_dir(&mut self, path: &Path, name: &str) {
        let fixed = fix_name(name);
        self.out.push_str(&format!(">>>{fixed}/\n"));
        self.open_dirs.push((path.to_path_buf(), fixed));
    }

    fn visit_file(&mut self, path: &Path, name: &str) -> Result<()> {
        let (bare, ext) = split_file_name(name);
        let fixed = format!("{}{ext}", fix_name(bare));

        self.out.push_str(&format!(">>>{fixed}\n"));

        let content = std::fs::read_to_string(path)?;
        self.out.push_str(&content);
        if !content.ends_with('\n') {
            self.out.push('\n');
        }

        self.out.push_str(&format!("<<<{fixed}\n"));
        Ok(())
    }

    fn drain(&mut self) {
        while !self.open_dirs.is_empty() {
            self.close_dir();
        }
    }
}

/// Scans a directory tree and returns the markup text describing it.
///
/// The walk is pre-order, depth-first, with siblings in lexical order. A
/// directory whose base name matches `skip_pattern` is neither visited nor
/// descended into. After the walk, all still-open folder contexts are
/// closed innermost first, so the returned markup is always balanced.
///
/// # Errors
/// * `Error::SkipPatternError` if `skip_pattern` is not a valid regex
/// * `Error::IoError` on traversal or file read failures
pub fn scan<P: AsRef<Path>>(root: P, skip_pattern: Option<&str>) -> Result<String> {
    let mut scanner = Scanner {
        out: String::new(),
        skip_dir_pattern: skip_pattern.map(Regex::new).transpose()?,
        open_dirs: Vec::new(),
    };

    let mut walker = WalkDir::new(root.as_ref()).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| {
            e.into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk aborted"))
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            if let Some(pattern) = &scanner.skip_dir_pattern {
                if pattern.is_match(&name) {
                    debug!("skipping directory {}", entry.path().display());
                    walker.skip_current_dir();
                    continue;
                }
            }
            scanner.close_until_parent(entry.path());
            scanner.enter_dir(entry.path(), &name);
        } else {
            scanner.close_until_parent(entry.path());
            scanner.visit_file(entry.path(), &name)?;
        }
    }

    scanner.drain();
    Ok(scanner.out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_name_lowercase_placeholder() {
        assert_eq!(fix_name("#model_name"), "{{ filename_lower(ModelName) }}");
    }

    #[test]
    fn test_fix_name_uppercase_placeholder() {
        assert_eq!(fix_name("#Model"), "{{ filename(Model) }}");
    }

    #[test]
    fn test_fix_name_passthrough() {
        assert_eq!(fix_name("models"), "models");
        assert_eq!(fix_name("#not a placeholder"), "#not a placeholder");
        assert_eq!(fix_name("#with3digits"), "#with3digits");
    }

    #[test]
    fn test_split_file_name() {
        assert_eq!(split_file_name("model.go"), ("model", ".go"));
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_file_name("Makefile"), ("Makefile", ""));
        assert_eq!(split_file_name(".gitignore"), (".gitignore", ""));
    }
}
