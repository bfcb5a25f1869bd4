// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ### Cursor and viewport for one list
//!
//! A [`SliceScroller`] keeps track of two numbers for a list of `entries_count` items:
//! the cursor `index` (the highlighted item) and the `view_offset` (the first item
//! that is visible). The window height is not stored, it comes from a
//! [`crate::WindowSizeProvider`] and may change between any two calls.
//!
//! ```text
//!                    +0--------------------+
//!                    0                     |
//!                    |        above        |
//!                    |                     |
//!                    +--- view_offset -----+
//!                    |         ↑           |      ↑
//!                    |                     |      |
//!                    |  index is in here   |    height
//!                    |                     |      |
//!                    |         ↓           |      ↓
//!                    +--- view_offset -----+
//!                    |    + height - 1     |
//!                    |                     |
//!                    |        below        |
//!                    |                     |
//!                    +--- entries_count ---+
//! ```
//!
//! After every operation (for the height at the time of the check):
//! - `view_offset <= index`.
//! - `index <= view_offset + height - 1` when the list is not empty.
//! - `index < entries_count` when the list is not empty.
//! - Once `entries_count > height` scrolling never reveals blank rows past the end of
//!   the list.
//!
//! [`SliceScroller::set_entries_count`] does not repair any of this when the list
//! shrinks. The owner of the list has to call [`SliceScroller::reanchor_cursor`]
//! afterwards.

use std::{fmt::{Debug, Formatter},
          ops::Range};

use crate::{DEVELOPMENT_MODE, PAGE_SCROLL_DIVISOR, SMOOTH_SCROLL_MARGIN,
            SharedWindowSizeProvider};

#[derive(Clone, Default)]
pub struct SliceScroller {
    view_offset: usize,
    index: usize,
    entries_count: usize,
    maybe_window_size_provider: Option<SharedWindowSizeProvider>,
}

impl Debug for SliceScroller {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceScroller")
            .field("view_offset", &self.view_offset)
            .field("index", &self.index)
            .field("entries_count", &self.entries_count)
            .field(
                "window_size",
                &self
                    .maybe_window_size_provider
                    .as_ref()
                    .map(|it| it.window_size()),
            )
            .finish()
    }
}

impl SliceScroller {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Record the new length of the list. This does not move the cursor, see
    /// [`SliceScroller::reanchor_cursor`].
    pub fn set_entries_count(&mut self, entries_count: usize) {
        self.entries_count = entries_count;
    }

    #[must_use]
    pub fn entries_count(&self) -> usize { self.entries_count }

    pub fn set_window_size_provider(&mut self, provider: SharedWindowSizeProvider) {
        self.maybe_window_size_provider = Some(provider);
    }

    /// Index of the highlighted entry. It has no meaning when the list is empty.
    #[must_use]
    pub fn index(&self) -> usize { self.index }

    /// Index of the first visible entry.
    #[must_use]
    pub fn view_offset(&self) -> usize { self.view_offset }

    /// Ask the provider for the current height. [None] when there is no provider or
    /// when it reports a height that isn't positive, in which case every operation is
    /// a no-op.
    #[must_use]
    pub fn viewport_height(&self) -> Option<usize> {
        self.maybe_window_size_provider
            .as_ref()
            .and_then(|it| it.window_size().viewport_height())
    }

    /// Range of entry indices that fit in the window right now. Empty when the list is
    /// empty or the height is degenerate.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.view_offset.min(self.entries_count);
        match self.viewport_height() {
            Some(height) => {
                start..self.view_offset.saturating_add(height).min(self.entries_count)
            }
            None => start..start,
        }
    }

    /// Scroll the viewport down by `amount` rows, then pull the cursor down into the
    /// window if it was left above it.
    pub fn scroll_down_by(&mut self, amount: usize) {
        let Some(height) = self.viewport_height() else {
            return;
        };
        self.scroll_down_impl(amount, height);
    }

    /// Scroll the viewport up by `amount` rows, then pull the cursor up into the window
    /// if it was left below it.
    pub fn scroll_up_by(&mut self, amount: usize) {
        let Some(height) = self.viewport_height() else {
            return;
        };
        self.scroll_up_impl(amount, height);
    }

    /// Page down, by a third of the window height.
    pub fn page_down(&mut self) {
        let Some(height) = self.viewport_height() else {
            return;
        };
        self.scroll_down_impl(height / PAGE_SCROLL_DIVISOR, height);
    }

    /// Page up, by a third of the window height.
    pub fn page_up(&mut self) {
        let Some(height) = self.viewport_height() else {
            return;
        };
        self.scroll_up_impl(height / PAGE_SCROLL_DIVISOR, height);
    }

    /// Move the cursor down one entry. When the cursor is within
    /// [`SMOOTH_SCROLL_MARGIN`] rows of the bottom of the window, the viewport scrolls
    /// down by one row first.
    pub fn move_down(&mut self) {
        let Some(height) = self.viewport_height() else {
            return;
        };

        // index >= view_offset + height - margin
        if self.index + SMOOTH_SCROLL_MARGIN >= self.view_offset + height {
            self.scroll_down_impl(1, height);
        }

        // index < view_offset + height - 1 && index < entries_count - 1
        if self.index + 1 < self.view_offset + height
            && self.index + 1 < self.entries_count
        {
            self.index += 1;
        }

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "move_down", scroller = ?self);
        });
    }

    /// Move the cursor up one entry. When the cursor is within
    /// [`SMOOTH_SCROLL_MARGIN`] rows of the top of the window, the viewport scrolls up
    /// by one row first.
    pub fn move_up(&mut self) {
        let Some(height) = self.viewport_height() else {
            return;
        };

        if self.index <= self.view_offset + SMOOTH_SCROLL_MARGIN {
            self.scroll_up_impl(1, height);
        }

        if self.index > self.view_offset && self.index > 0 {
            self.index -= 1;
        }

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "move_up", scroller = ?self);
        });
    }

    /// Bring a cursor that points past the end of a list that just shrank back in
    /// bounds. This replays [`SliceScroller::move_up`] one step at a time, so the
    /// viewport is adjusted by the same path that normal navigation uses.
    ///
    /// If a step makes no progress (only possible when the height is degenerate), the
    /// cursor is put on the last entry directly.
    pub fn reanchor_cursor(&mut self) {
        while self.index >= self.entries_count && self.entries_count > 0 {
            let before = (self.index, self.view_offset);
            self.move_up();
            if (self.index, self.view_offset) == before {
                self.index = self.entries_count - 1;
                self.view_offset = self.view_offset.min(self.index);
                break;
            }
        }
    }

    fn scroll_down_impl(&mut self, amount: usize, height: usize) {
        // Moving the viewport down stops once the last entry sits on the bottom row of
        // the window (or at 0 when every entry fits).
        let max_view_offset = self.entries_count.saturating_sub(height);
        self.view_offset = self.view_offset.saturating_add(amount).min(max_view_offset);

        // Cursor must not be above the window.
        self.index = self.index.max(self.view_offset);
    }

    fn scroll_up_impl(&mut self, amount: usize, height: usize) {
        self.view_offset = self.view_offset.saturating_sub(amount);

        // Cursor must not be below the window.
        let last_visible_row = self.view_offset + height - 1;
        self.index = self.index.min(last_visible_row);
    }
}
