//! Template loading and head/body splitting.
//!
//! A template file is UTF-8 text with a newline line terminator and no byte
//! order mark. It consists of a head section (documentation and a record
//! example, must not contain a blank line), exactly one blank line, and the
//! body consumed by the materializer after rendering.

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Splits a template on the first blank line into `(head, body)`.
///
/// # Errors
/// * `Error::SplitError` if the text contains no blank line
pub fn split_template(template: &str) -> Result<(&str, &str)> {
    template.split_once("\n\n").ok_or(Error::SplitError)
}

/// Looks up a template file by name across a list of search directories.
///
/// The bare name is tried relative to the current directory first, then
/// inside each search path entry. For every candidate directory both `name`
/// and `name.template` are tried. Empty search path entries are skipped.
///
/// # Errors
/// * `Error::TemplateNotFound` if no candidate is an existing file
pub fn find_template(name: &str, search_path: &str) -> Result<PathBuf> {
    let dirs = std::iter::once("").chain(search_path.split(':'));

    for dir in dirs {
        for candidate_name in [name.to_string(), format!("{name}{TEMPLATE_SUFFIX}")] {
            let candidate = Path::new(dir).join(&candidate_name);
            debug!("looking for {}", candidate.display());
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(Error::TemplateNotFound { name: name.to_string() })
}

/// Reads a template file and returns its head and body.
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<(String, String)> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let (head, body) = split_template(&raw)?;
    Ok((head.to_string(), body.to_string()))
}
