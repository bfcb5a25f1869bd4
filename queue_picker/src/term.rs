// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, IsTerminal as _};

use crossterm::terminal::size;

use crate::{DEFAULT_TERMINAL_COL_COUNT, DEFAULT_TERMINAL_ROW_COUNT,
            PANE_FRAME_COL_COUNT, PANE_FRAME_ROW_COUNT, Size, WindowSizeProvider};

/// Get the terminal size.
///
/// # Errors
///
/// Returns an error if the terminal size can't be queried (eg: not a TTY).
pub fn get_size() -> io::Result<Size> { size().map(Size::from) }

/// Get the terminal size. If there is a problem, return an 80x24 terminal.
#[must_use]
pub fn get_size_or_default() -> Size {
    get_size().unwrap_or_else(|_| {
        Size::from((DEFAULT_TERMINAL_COL_COUNT, DEFAULT_TERMINAL_ROW_COUNT))
    })
}

/// The inner size of one of the two panes that sit side by side in a terminal of
/// `terminal_size`. Each pane gets half the width. The frame and the footer take
/// [`PANE_FRAME_COL_COUNT`] columns and [`PANE_FRAME_ROW_COUNT`] rows. The result can
/// be negative for a tiny terminal, which makes the scrollers stop moving.
#[must_use]
pub fn pane_size(terminal_size: Size) -> Size {
    Size::new(
        terminal_size.col_count / 2 - PANE_FRAME_COL_COUNT,
        terminal_size.row_count - PANE_FRAME_ROW_COUNT,
    )
}

/// [`WindowSizeProvider`] that asks the terminal for its size on every call, so a
/// resize is seen right away.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWindowSize;

impl WindowSizeProvider for TerminalWindowSize {
    fn window_size(&self) -> Size { pane_size(get_size_or_default()) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

/// If you run `ls | qp` the following will return
/// [`StdinIsPipedResult::StdinIsPiped`].
#[must_use]
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if io::stdin().is_terminal() {
        StdinIsPipedResult::StdinIsNotPiped
    } else {
        StdinIsPipedResult::StdinIsPiped
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(Size::new(80, 24), Size::new(38, 21))]
    #[test_case(Size::new(121, 40), Size::new(58, 37))]
    #[test_case(Size::new(3, 2), Size::new(-1, -1))]
    fn test_pane_size(terminal_size: Size, expected: Size) {
        assert_eq2!(pane_size(terminal_size), expected);
    }

    #[test]
    fn test_terminal_window_size_is_usable() {
        // Either the real terminal, or the 80x24 fallback when tests run without one.
        let size = TerminalWindowSize.window_size();
        let max = Size::from((u16::MAX, u16::MAX));
        assert!(size.col_count <= max.col_count);
        assert!(size.row_count <= max.row_count);
    }
}
