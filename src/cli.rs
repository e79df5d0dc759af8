//! Command-line interface implementation for scaffold.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_TEMPLATE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for scaffold.
#[derive(Parser, Debug)]
#[command(author, version, about = "scaffold: file and directory generation based on templates", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create files and directories from a template and a JSON record read
    /// from stdin
    Run {
        /// Template file name, looked up in the search path
        #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Directory that is the target root of the file creations
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Colon-separated list of directories to look for template files
        #[arg(short, long, default_value = "")]
        path: String,
    },

    /// Like run, but without creating any files (prints the paths that
    /// would be written)
    Test {
        /// Template file name, looked up in the search path
        #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Directory that is the target root of the file creations
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Colon-separated list of directories to look for template files
        #[arg(short, long, default_value = "")]
        path: String,
    },

    /// Show the head section of the given template
    Head {
        /// Template file name, looked up in the search path
        #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Colon-separated list of directories to look for template files
        #[arg(short, long, default_value = "")]
        path: String,
    },

    /// List template files residing in the search path
    List {
        /// Colon-separated list of directories to look for template files
        #[arg(short, long, default_value = "")]
        path: String,
    },

    /// Scan an existing directory tree and print a template describing it
    Scan {
        /// Directory to scan
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Regex matched against directory base names; matching directories
        /// are excluded from the scan
        #[arg(short, long)]
        skip: Option<String>,
    },
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
