// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Headless host for the queue picker. For example:
//!
//! ```shell
//! ls ~/Music | qp -t 10 --show-panes --commands "down down enter focus quit"
//! qp -c "enter enter focus s" --format json a.mp3 b.mp3 c.mp3
//! ```

use std::io::stdin;

use clap::Parser;
use r3bl_queue_picker::{CLIArg, QueuePicker, StdinIsPipedResult, format_pick_result,
                        is_stdin_piped, make_window_size_provider, parse_commands,
                        read_identifiers, render_panes, run_commands,
                        try_initialize_logging_global};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    // Fail on a bad script before reading stdin.
    let commands = parse_commands(&cli_arg.commands)?;

    let maybe_stdin = match is_stdin_piped() {
        StdinIsPipedResult::StdinIsPiped => Some(stdin().lock()),
        StdinIsPipedResult::StdinIsNotPiped => None,
    };
    let identifiers = read_identifiers(cli_arg.identifiers, maybe_stdin)?;

    let picker = QueuePicker::new(identifiers)
        .with_window_size_provider(make_window_size_provider(cli_arg.height));

    let show_panes = cli_arg.show_panes;
    let pick_result = run_commands(picker, commands, |picker| {
        if show_panes {
            println!("{}\n", render_panes(picker));
        }
    });

    tracing::debug!(message = "Pick result", pick_result = ?pick_result);
    println!("{}", format_pick_result(&pick_result, cli_arg.format)?);

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}
