//! datagen's main application entry point.
//! Parses arguments, validates the working directory and hands the request
//! to the processor.

use std::path::PathBuf;

use datagen::{
    cli::{get_args, Args},
    context::Context,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    processor::Processor,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Resolves the directory the command operates on.
///
/// # Errors
/// * `Error::ContextError` if the directory does not exist
fn working_dir(directory: Option<PathBuf>) -> Result<PathBuf> {
    let directory = match directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    directory.canonicalize().map_err(|e| {
        Error::ContextError(format!("cannot use directory '{}': {}", directory.display(), e))
    })
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the working directory against the command category
/// 2. Parses and validates the command parameters
/// 3. Generates every document
/// 4. Confirms, for multi-file commands
/// 5. Writes the files
fn run(args: Args) -> Result<()> {
    let directory = working_dir(args.directory)?;
    let context = Context::from_dir(&directory, args.command.category())?;
    log::debug!("Namespace '{}' in {}", context.namespace, directory.display());

    let request = args.command.into_request()?;
    let prompt = Box::new(DialoguerPrompter::new());
    let processor = Processor::new(&*prompt, &context, args.yes);

    let written = processor.process(&request)?;
    if written.is_empty() {
        println!("Nothing written.");
        return Ok(());
    }
    for path in &written {
        println!("created: '{}'", path.display());
    }
    println!("Generated {} file(s) in {}.", written.len(), context.output_root.display());
    Ok(())
}
