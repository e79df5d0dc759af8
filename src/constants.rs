//! Common constants used throughout the scaffold application.

/// Prefix that opens a folder or file context.
pub const OPEN_MARKER: &str = ">>>";

/// Prefix that closes a folder or file context.
pub const CLOSE_MARKER: &str = "<<<";

/// Suffix tried when looking up a template by bare name.
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Template file name used when none is given on the command line.
pub const DEFAULT_TEMPLATE: &str = "scaffold.template";
