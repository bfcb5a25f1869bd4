// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// How many rows before the window edge [`crate::SliceScroller::move_down`] and
/// [`crate::SliceScroller::move_up`] start scrolling. This is a fixed number of rows,
/// not a fraction of the window height, so on windows shorter than this the viewport
/// scrolls on almost every step.
pub const SMOOTH_SCROLL_MARGIN: usize = 20;

/// Page scrolls move the viewport by `height / PAGE_SCROLL_DIVISOR` rows.
pub const PAGE_SCROLL_DIVISOR: usize = 3;

// Pane titles.
pub const SOURCE_PANE_TITLE: &str = " Songs selection ";
pub const QUEUE_PANE_TITLE: &str = " Your initial queue ";

// Row prefixes.
pub const HIGHLIGHTED_ROW_PREFIX: &str = "* ";
pub const PLAIN_ROW_PREFIX: &str = "  ";

/// Suffixes removed from an identifier to make its label.
pub const STRIPPED_SUFFIXES: [&str; 3] = [".mp4", ".mp3", ".ogg"];

/// Terminal size used when the real size can't be queried.
pub const DEFAULT_TERMINAL_COL_COUNT: u16 = 80;
pub const DEFAULT_TERMINAL_ROW_COUNT: u16 = 24;

/// Columns taken by the frame around a pane.
pub const PANE_FRAME_COL_COUNT: isize = 2;
/// Rows taken by the frame around a pane plus the footer line.
pub const PANE_FRAME_ROW_COUNT: isize = 3;
