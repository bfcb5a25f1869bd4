// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use crate::{HIGHLIGHTED_ROW_PREFIX, Item, PLAIN_ROW_PREFIX, SliceScroller};

/// One row of a pane, ready to draw. Borrows the label from the picker, so the host
/// must draw before it sends the next command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub label: &'a str,
    pub is_highlighted: bool,
}

/// Rows in top to bottom order. Most terminals are short enough that this never spills
/// to the heap.
pub type VisibleRows<'a> = SmallVec<[VisibleRow<'a>; 16]>;

impl Display for VisibleRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let prefix = if self.is_highlighted {
            HIGHLIGHTED_ROW_PREFIX
        } else {
            PLAIN_ROW_PREFIX
        };
        write!(f, "{prefix}{}", self.label)
    }
}

/// The rows of `items` that fall inside the scroller's window. Exactly one row is
/// highlighted when `items` is not empty.
#[must_use]
pub fn visible_slice<'a>(items: &'a [Item], scroller: &SliceScroller) -> VisibleRows<'a> {
    let range = scroller.visible_range();
    let end = range.end.min(items.len());
    let start = range.start.min(end);
    items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| VisibleRow {
            label: item.label(),
            is_highlighted: start + offset == scroller.index(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{ItemList, Size, assert_eq2};

    fn make_scroller(entries_count: usize, height: isize) -> SliceScroller {
        let mut scroller = SliceScroller::new();
        scroller.set_window_size_provider(Rc::new(move || Size::new(40, height)));
        scroller.set_entries_count(entries_count);
        scroller
    }

    #[test]
    fn test_rows_follow_the_window() {
        let items = ItemList::from_identifiers((0..10).map(|it| format!("song_{it}.mp3")));
        let mut scroller = make_scroller(items.len(), 3);
        scroller.move_down();
        scroller.move_down();
        scroller.move_down();

        let rows = visible_slice(&items, &scroller);
        let text = rows.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq2!(scroller.index(), 4);
        assert_eq2!(text, vec!["  song 3", "* song 4", "  song 5"]);
    }

    #[test]
    fn test_empty_list_has_no_rows() {
        let items = ItemList::new();
        let scroller = make_scroller(0, 10);
        assert!(visible_slice(&items, &scroller).is_empty());
    }

    #[test]
    fn test_short_list_in_tall_window() {
        let items = ItemList::from_identifiers(["a", "b"]);
        let scroller = make_scroller(items.len(), 10);
        let rows = visible_slice(&items, &scroller);
        assert_eq2!(rows.len(), 2);
        assert_eq2!(rows[0].is_highlighted, true);
        assert_eq2!(rows[1].to_string(), "  b");
    }
}
