//! Line tokenizer for the context markup.
//!
//! The rendered template body is a line-oriented markup: a line starting
//! with `>>>` opens a context, a line starting with `<<<` closes one, and
//! every other line is literal content. A context whose name ends in `/`
//! is a folder context, otherwise it is a file context. The tokenizer only
//! classifies lines; nesting rules are enforced by the materializer in
//! [`crate::processor`].

use crate::constants::{CLOSE_MARKER, OPEN_MARKER};

/// One classified line of the template body.
#[derive(Debug, PartialEq, Eq)]
pub enum Marker<'a> {
    /// `>>>name/` - opens a folder context.
    FolderOpen(&'a str),
    /// `<<<name/` - closes the innermost folder context.
    FolderClose(&'a str),
    /// `>>>name` - opens a file context.
    FileOpen(&'a str),
    /// `<<<name` - closes the open file context and triggers the write.
    FileClose(&'a str),
    /// Anything else, including lines with a shorter lookalike prefix.
    Literal(&'a str),
}

/// Classifies a single line of the body.
///
/// The marker prefix is exactly three characters; the name is the trimmed
/// remainder of the line. Folder names keep their trailing separator.
pub fn parse_line(line: &str) -> Marker<'_> {
    if let Some(rest) = line.strip_prefix(OPEN_MARKER) {
        let name = rest.trim();
        if name.ends_with('/') {
            return Marker::FolderOpen(name);
        }
        return Marker::FileOpen(name);
    }

    if let Some(rest) = line.strip_prefix(CLOSE_MARKER) {
        let name = rest.trim();
        if name.ends_with('/') {
            return Marker::FolderClose(name);
        }
        return Marker::FileClose(name);
    }

    Marker::Literal(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_markers() {
        assert_eq!(parse_line(">>>models/"), Marker::FolderOpen("models/"));
        assert_eq!(parse_line("<<<models/"), Marker::FolderClose("models/"));
    }

    #[test]
    fn test_file_markers() {
        assert_eq!(parse_line(">>>model.go"), Marker::FileOpen("model.go"));
        assert_eq!(parse_line("<<<model.go"), Marker::FileClose("model.go"));
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(parse_line(">>> file.txt "), Marker::FileOpen("file.txt"));
        assert_eq!(parse_line("<<<  a/  "), Marker::FolderClose("a/"));
    }

    #[test]
    fn test_short_prefix_is_literal() {
        // Two '>' only: not a marker, stays literal content.
        assert_eq!(parse_line(">>file.txt"), Marker::Literal(">>file.txt"));
        assert_eq!(parse_line("<<file.txt"), Marker::Literal("<<file.txt"));
    }

    #[test]
    fn test_plain_text_is_literal() {
        assert_eq!(parse_line("Hello World"), Marker::Literal("Hello World"));
        assert_eq!(parse_line(""), Marker::Literal(""));
    }

    #[test]
    fn test_marker_must_start_the_line() {
        assert_eq!(parse_line(" >>>file.txt"), Marker::Literal(" >>>file.txt"));
    }
}
