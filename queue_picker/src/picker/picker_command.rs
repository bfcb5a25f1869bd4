// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::QueuePickerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One entry at a time.
    Step,
    /// A third of the window height at a time.
    Page,
}

/// Discrete commands that a host sends to [`crate::QueuePicker::apply`]. The text form
/// (used by the `qp` script) is shown in [Display] and parsed by [`FromStr`], case
/// insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum PickerCommand {
    #[strum(to_string = "up", serialize = "move-up")]
    MoveUp,
    #[strum(to_string = "down", serialize = "move-down")]
    MoveDown,
    #[strum(to_string = "page-up", serialize = "pgup")]
    PageUp,
    #[strum(to_string = "page-down", serialize = "pgdn")]
    PageDown,
    #[strum(
        to_string = "focus",
        serialize = "switch-focus",
        serialize = "left",
        serialize = "right"
    )]
    SwitchFocus,
    /// Source focus: move the highlighted item to the end of the queue. Queue focus:
    /// move it back to the end of the source.
    #[strum(to_string = "enter", serialize = "transfer")]
    Transfer,
    /// Queue focus only.
    #[strum(to_string = "w", serialize = "prioritize-up")]
    PrioritizeUp,
    /// Queue focus only.
    #[strum(to_string = "s", serialize = "prioritize-down")]
    PrioritizeDown,
    #[strum(to_string = "quit", serialize = "q", serialize = "esc")]
    Terminate,
}

impl PickerCommand {
    /// The navigation that this command maps to, if it is a navigation command.
    #[must_use]
    pub fn navigation(self) -> Option<(Direction, Granularity)> {
        match self {
            PickerCommand::MoveUp => Some((Direction::Up, Granularity::Step)),
            PickerCommand::MoveDown => Some((Direction::Down, Granularity::Step)),
            PickerCommand::PageUp => Some((Direction::Up, Granularity::Page)),
            PickerCommand::PageDown => Some((Direction::Down, Granularity::Page)),
            PickerCommand::SwitchFocus
            | PickerCommand::Transfer
            | PickerCommand::PrioritizeUp
            | PickerCommand::PrioritizeDown
            | PickerCommand::Terminate => None,
        }
    }

    /// Comma separated list of the text form of every command.
    #[must_use]
    pub fn all_as_text() -> String {
        PickerCommand::iter()
            .map(|it| it.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse a script of commands separated by commas and / or whitespace, eg:
/// `"down, down enter focus w quit"`.
///
/// # Errors
///
/// Returns [`QueuePickerError::UnknownCommand`] for the first token that isn't a
/// command.
pub fn parse_commands(script: &str) -> Result<Vec<PickerCommand>, QueuePickerError> {
    script
        .split(|it: char| it == ',' || it.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            PickerCommand::from_str(token).map_err(|_| QueuePickerError::UnknownCommand {
                token: token.to_string(),
                valid_commands: PickerCommand::all_as_text(),
            })
        })
        .collect()
}

/// What the host's event loop should do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventLoopResult {
    /// Nothing changed (the command does not apply to the focused pane).
    Continue,
    /// State changed, redraw both panes.
    ContinueAndRerender,
    /// The user is done. Call [`crate::QueuePicker::terminate`].
    Exit,
}
