// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Headless host for [`QueuePicker`]. Instead of reading key presses it runs a list of
//! [`PickerCommand`]s, which is what the `qp` binary and the integration tests use.

use std::{io::BufRead, rc::Rc};

use miette::IntoDiagnostic;
use strum::IntoEnumIterator;

use crate::{DEFAULT_TERMINAL_COL_COUNT, DEVELOPMENT_MODE, EventLoopResult,
            OutputFormat, PANE_FRAME_COL_COUNT, Pane, PickResult, PickerCommand,
            QueuePicker, QueuePickerError, SharedWindowSizeProvider, Size,
            TerminalWindowSize};

/// Identifiers given on the command line win. Otherwise they are read from `reader`,
/// one per line, skipping blank lines.
///
/// # Errors
///
/// Returns [`QueuePickerError::NoItems`] if there is nothing to pick from, and
/// [`QueuePickerError::ReadStdin`] if `reader` fails.
pub fn read_identifiers(
    from_args: Vec<String>,
    maybe_reader: Option<impl BufRead>,
) -> miette::Result<Vec<String>> {
    let identifiers = match (from_args.is_empty(), maybe_reader) {
        (false, _) | (true, None) => from_args,
        (true, Some(reader)) => {
            let mut acc = vec![];
            for line in reader.lines() {
                let line = line.map_err(QueuePickerError::ReadStdin)?;
                let line = line.trim();
                if !line.is_empty() {
                    acc.push(line.to_string());
                }
            }
            acc
        }
    };

    if identifiers.is_empty() {
        return Err(QueuePickerError::NoItems.into());
    }

    Ok(identifiers)
}

/// A fixed pane height if one is given, otherwise the live terminal size.
#[must_use]
pub fn make_window_size_provider(maybe_height: Option<u16>) -> SharedWindowSizeProvider {
    match maybe_height {
        Some(height) => {
            let terminal_size = Size::from((DEFAULT_TERMINAL_COL_COUNT, height));
            let size = Size::new(
                terminal_size.col_count / 2 - PANE_FRAME_COL_COUNT,
                terminal_size.row_count,
            );
            Rc::new(move || size)
        }
        None => Rc::new(TerminalWindowSize),
    }
}

/// Apply `commands` one at a time until one of them asks to exit, or they run out.
/// `on_rerender` is called after every command that changed what the panes show.
pub fn run_commands(
    mut picker: QueuePicker,
    commands: impl IntoIterator<Item = PickerCommand>,
    mut on_rerender: impl FnMut(&QueuePicker),
) -> PickResult {
    for command in commands {
        match picker.apply(command) {
            EventLoopResult::Continue => {}
            EventLoopResult::ContinueAndRerender => on_rerender(&picker),
            EventLoopResult::Exit => break,
        }
    }

    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "run_commands done", picker = ?picker);
    });

    picker.terminate()
}

/// Plain text dump of both panes. The focused pane's title is marked with `>`.
#[must_use]
pub fn render_panes(picker: &QueuePicker) -> String {
    let mut lines: Vec<String> = vec![];
    for pane in Pane::iter() {
        let marker = if picker.focus() == pane { ">" } else { " " };
        lines.push(format!("{marker}{}", pane.title()));
        lines.extend(picker.visible_slice(pane).iter().map(ToString::to_string));
    }
    lines.join("\n")
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_pick_result(
    pick_result: &PickResult,
    format: OutputFormat,
) -> miette::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(pick_result).into_diagnostic(),
        OutputFormat::Text => {
            let mut lines = vec!["Will queue this:".to_string()];
            lines.extend(pick_result.queue_order.iter().map(|it| format!("- {it}")));
            lines.push("Then this:".to_string());
            lines.extend(pick_result.remaining_order.iter().map(|it| format!("- {it}")));
            Ok(lines.join("\n"))
        }
    }
}
