// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors from the parts of the crate that talk to the outside world: parsing a command
/// script, reading identifiers, and setting up logging. Picker operations themselves
/// never fail.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum QueuePickerError {
    #[error("Unknown command: '{token}'")]
    #[diagnostic(
        code(r3bl_queue_picker::unknown_command),
        help("Valid commands are: {valid_commands}")
    )]
    UnknownCommand {
        token: String,
        valid_commands: String,
    },

    #[error("No items to pick from")]
    #[diagnostic(
        code(r3bl_queue_picker::no_items),
        help("Pass identifiers as arguments, or pipe them in, one per line")
    )]
    NoItems,

    #[error("Could not use '{path}' as a log file")]
    #[diagnostic(
        code(r3bl_queue_picker::log_file_path),
        help("The path has to end in a file name")
    )]
    LogFilePath { path: String },

    #[error("Could not read identifiers from stdin")]
    #[diagnostic(code(r3bl_queue_picker::read_stdin))]
    ReadStdin(#[source] std::io::Error),
}
