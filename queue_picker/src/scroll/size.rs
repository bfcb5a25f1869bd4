// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Size of a window (or pane) as reported by the host. The values are signed since a
/// host may report a degenerate (zero or negative) size while the terminal is being
/// resized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_count: isize,
    pub row_count: isize,
}

impl Size {
    #[must_use]
    pub fn new(col_count: isize, row_count: isize) -> Self {
        Self {
            col_count,
            row_count,
        }
    }

    /// The number of rows that can display list entries, or [None] if the height is
    /// not positive.
    #[must_use]
    pub fn viewport_height(&self) -> Option<usize> {
        usize::try_from(self.row_count).ok().filter(|it| *it > 0)
    }
}

/// Convert the `(columns, rows)` tuple returned by [`crossterm::terminal::size()`].
impl From<(u16, u16)> for Size {
    fn from((col_count, row_count): (u16, u16)) -> Self {
        Self {
            col_count: isize::try_from(col_count).unwrap_or(isize::MAX),
            row_count: isize::try_from(row_count).unwrap_or(isize::MAX),
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[width:{}, height:{}]", self.col_count, self.row_count)
    }
}
