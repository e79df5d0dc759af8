//! scaffold provides file and directory generation based on templates.
//!
//! A template consists of three parts: a head section (must not contain a
//! blank line), exactly one blank line, and the body. The head holds
//! documentation and usually an annotated JSON example of the input record.
//! The body mixes MiniJinja template syntax with a line-based context
//! markup: a line starting with `>>>` opens a folder context (name ends in
//! `/`) or a file context, and a matching `<<<` line closes it. Folder
//! contexts nest; the content of a file context becomes the content of the
//! created file.
//!
//! The following body creates `fileZ.txt` inside `[base_dir]/folder1/folderA`,
//! with missing directories created on the fly:
//!
//! ```text
//! >>>folder1/
//! >>>folderA/
//! >>>fileZ.txt
//! Hello World
//! <<<fileZ.txt
//! <<<folderA/
//! <<<folder1/
//! ```
//!
//! Because the JSON record is rendered into the body before the markup is
//! parsed, placeholders can also form parts of folder and file names. The
//! [`scanner`] module provides the reverse direction: it turns an existing
//! directory tree into the markup above.

/// Command-line interface module for the scaffold application
pub mod cli;

/// Common constants (marker prefixes, template file names)
pub mod constants;

/// Error types and handling for the scaffold application
pub mod error;

/// Line tokenizer for the context markup
pub mod parser;

/// Materialization of a rendered body into files and directories
pub mod processor;

/// Decoding of the JSON input record
pub mod record;

/// Template rendering with MiniJinja and the registered helpers
pub mod renderer;

/// Directory scanning: turning an existing tree into a template
pub mod scanner;

/// Template loading and head/body splitting
pub mod template;
