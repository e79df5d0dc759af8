//! scaffold's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates template lookup,
//! rendering, materialization and scanning.

use std::path::Path;

use scaffold::{
    cli::{get_args, Args, Command},
    error::{default_error_handler, Result},
    processor::process,
    record::record_from_stdin,
    renderer::MiniJinjaRenderer,
    scanner::scan,
    template::{find_template, load_template},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Prints the template files found in each search path directory,
/// skipping dotfiles and subdirectories.
fn print_templates(search_path: &str) -> Result<()> {
    for path in search_path.split(':').filter(|p| !p.is_empty()) {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!("skipping {path} ({err})");
                continue;
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_file() && !name.starts_with('.') {
                names.push(name);
            }
        }
        names.sort();

        if names.is_empty() {
            println!("no templates inside {path}");
        } else {
            println!("templates inside {path}:");
            for name in names {
                println!("  {name}");
            }
        }
    }
    Ok(())
}

/// Runs the generation pipeline: find the template, split it, read the
/// record from stdin, render the body and materialize the result.
fn generate(template: &str, dir: &Path, search_path: &str, dry_run: bool) -> Result<()> {
    let template_file = find_template(template, search_path)?;
    let (_, body) = load_template(&template_file)?;
    let record = record_from_stdin()?;

    let engine = MiniJinjaRenderer::new();
    let written = process(&engine, dir, &body, &record, dry_run)?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Run { template, dir, path } => generate(&template, &dir, &path, false),
        Command::Test { template, dir, path } => generate(&template, &dir, &path, true),
        Command::Head { template, path } => {
            let template_file = find_template(&template, &path)?;
            let (head, _) = load_template(&template_file)?;
            println!("{head}");
            Ok(())
        }
        Command::List { path } => print_templates(&path),
        Command::Scan { dir, skip } => {
            let markup = scan(&dir, skip.as_deref())?;
            // A one-line head plus the separating blank line makes the
            // output a complete, immediately usable template.
            println!("{{}}");
            println!();
            print!("{markup}");
            Ok(())
        }
    }
}
