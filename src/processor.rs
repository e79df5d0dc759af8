//! Core materialization: turning a rendered template body into files and
//! directories beneath a base directory.
//!
//! The materializer is a single forward pass over the body lines. It keeps a
//! stack of open folder contexts, at most one open file context and a buffer
//! of pending file content. Nesting violations and mismatched close markers
//! abort the pass immediately; files already written stay on disk.

use crate::error::{Error, Result};
use crate::parser::{parse_line, Marker};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The per-call state of one materialization pass.
struct Materializer {
    /// Current target directory: base dir joined with every open folder.
    dir: PathBuf,
    /// Names of the open folder contexts, innermost last.
    open_folders: Vec<String>,
    /// Full path of the open file context, if any.
    current_file: Option<PathBuf>,
    /// Literal content accumulated for the open file context.
    buffer: String,
    /// Paths written (or, in dry-run mode, that would have been written),
    /// in file-close order.
    written: Vec<PathBuf>,
    dry_run: bool,
}

/// Returns the final path segment of `path` as a string.
fn base_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

impl Materializer {
    fn new<P: AsRef<Path>>(base_dir: P, dry_run: bool) -> Self {
        Self {
            dir: base_dir.as_ref().to_path_buf(),
            open_folders: Vec::new(),
            current_file: None,
            buffer: String::new(),
            written: Vec::new(),
            dry_run,
        }
    }

    fn open_folder(&mut self, line: usize, name: &str) -> Result<()> {
        if let Some(open) = &self.current_file {
            return Err(Error::FolderInFile {
                line,
                name: name.to_string(),
                open: base_name(open),
            });
        }
        self.dir = self.dir.join(name);
        self.open_folders.push(name.to_string());
        Ok(())
    }

    fn open_file(&mut self, line: usize, name: &str) -> Result<()> {
        if let Some(open) = &self.current_file {
            return Err(Error::FileInFile {
                line,
                name: name.to_string(),
                open: base_name(open),
            });
        }
        self.current_file = Some(self.dir.join(name));
        Ok(())
    }

    /// Closes the innermost folder context. The close name must equal the
    /// base name of the current directory plus the trailing separator.
    fn close_folder(&mut self, line: usize, name: &str) -> Result<()> {
        if self.open_folders.pop().is_none() {
            return Err(Error::CloseWithoutOpen { line, name: name.to_string() });
        }
        let expected = format!("{}/", base_name(&self.dir));
        if expected != name {
            return Err(Error::FolderCloseMismatch {
                line,
                expected,
                actual: name.to_string(),
            });
        }
        self.dir = self.dir.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(())
    }

    /// Closes the open file context, writing the buffered content.
    fn close_file(&mut self, line: usize, name: &str) -> Result<()> {
        let Some(file) = self.current_file.take() else {
            return Err(Error::CloseWithoutOpen { line, name: name.to_string() });
        };
        let expected = base_name(&file);
        if expected != name {
            self.current_file = Some(file);
            return Err(Error::FileCloseMismatch {
                line,
                expected,
                actual: name.to_string(),
            });
        }
        self.write_file(&file)?;
        self.buffer.clear();
        Ok(())
    }

    /// Writes the buffered content to `path`, creating missing parent
    /// directories. In dry-run mode nothing is created or written but the
    /// path is still validated and logged.
    fn write_file(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            match fs::metadata(parent) {
                Ok(meta) if !meta.is_dir() => {
                    return Err(Error::NotADirectory { path: parent.display().to_string() });
                }
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    if !self.dry_run {
                        fs::create_dir_all(parent)?;
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }

        self.written.push(path.to_path_buf());

        if !self.dry_run {
            fs::write(path, &self.buffer)?;
        }
        Ok(())
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        match parse_line(line) {
            Marker::FolderOpen(name) => self.open_folder(line_no, name)?,
            Marker::FolderClose(name) => self.close_folder(line_no, name)?,
            Marker::FileOpen(name) => self.open_file(line_no, name)?,
            Marker::FileClose(name) => self.close_file(line_no, name)?,
            Marker::Literal(text) => {
                if self.current_file.is_some() {
                    self.buffer.push_str(text);
                    self.buffer.push('\n');
                } else if !text.trim().is_empty() {
                    debug!("discarding literal line outside of any file context: {text:?}");
                }
            }
        }
        Ok(())
    }

    /// Fails if a folder or file context is still open at end of input.
    fn finish(self) -> Result<Vec<PathBuf>> {
        if let Some(file) = &self.current_file {
            return Err(Error::UnclosedContext { name: base_name(file) });
        }
        if let Some(folder) = self.open_folders.last() {
            return Err(Error::UnclosedContext { name: folder.clone() });
        }
        Ok(self.written)
    }
}

/// Creates files and directories beneath `base_dir` as defined by the
/// rendered body markup.
///
/// Returns the written paths in file-close order. With `dry_run` set, all
/// syntax validation still happens and the full path log is returned, but
/// nothing is created on disk.
///
/// # Errors
/// * `Error::FileInFile`, `Error::FolderCloseMismatch`,
///   `Error::FileCloseMismatch`, `Error::CloseWithoutOpen`,
///   `Error::UnclosedContext` on markup violations
/// * `Error::NotADirectory`, `Error::IoError` on filesystem failures
pub fn materialize<P: AsRef<Path>>(
    base_dir: P,
    body: &str,
    dry_run: bool,
) -> Result<Vec<PathBuf>> {
    let mut m = Materializer::new(base_dir, dry_run);
    for (idx, line) in body.lines().enumerate() {
        m.feed(idx + 1, line)?;
    }
    m.finish()
}

/// Renders the template body with the input record, then materializes the
/// result beneath `base_dir`.
pub fn process<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    base_dir: P,
    body: &str,
    record: &serde_json::Value,
    dry_run: bool,
) -> Result<Vec<PathBuf>> {
    let rendered = engine.render(body, record)?;
    materialize(base_dir, &rendered, dry_run)
}
