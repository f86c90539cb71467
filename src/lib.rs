//! datagen generates the JSON resources of a Minecraft mod: block states,
//! block and item models, recipes, loot tables and recipe advancements.
//! Each command infers the mod namespace and resource category from the
//! directory it runs in and writes the documents there.

/// Command-line interface module for the datagen application
pub mod cli;

/// Namespace and resource category inferred from the working directory
pub mod context;

/// Resolved output documents and their serialization
pub mod document;

/// Error types and handling for the datagen application
pub mod error;

/// Per-category document generators
/// - blockstate, model (assets)
/// - recipe, machine, storage, tools, loot, advancement (data)
pub mod generator;

/// Logger setup shared by the binary
pub mod logger;

/// Compact argument syntaxes: item stacks, patterns and pattern keys
pub mod parser;

/// Generation orchestration: confirm, then write
pub mod processor;

/// User confirmation handling
pub mod prompt;

/// JSON skeletons with placeholder holes
pub mod template;
