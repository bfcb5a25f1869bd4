// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEVELOPMENT_MODE, Direction, EventLoopResult, Granularity, ItemList, Pane,
            PickResult, PickerCommand, SharedWindowSizeProvider, SliceScroller,
            VisibleRows, visible_slice};

/// Owns both lists, a [`SliceScroller`] per list, and the focus. Every mutation goes
/// through here so that a list and its scroller never disagree about the list length.
///
/// Commands that only make sense for one pane (eg: [`QueuePicker::prioritize_up`] for
/// the queue) do nothing when the other pane has focus, and return `false`.
#[derive(Debug, Default)]
pub struct QueuePicker {
    source: ItemList,
    queue: ItemList,
    source_scroller: SliceScroller,
    queue_scroller: SliceScroller,
    focus: Pane,
}

impl QueuePicker {
    /// Every identifier starts out in the source pane, in the given order. The queue is
    /// empty and the source pane has focus.
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let source = ItemList::from_identifiers(identifiers);
        let mut source_scroller = SliceScroller::new();
        source_scroller.set_entries_count(source.len());
        Self {
            source,
            source_scroller,
            ..Default::default()
        }
    }

    /// Use the same provider for both panes. They are drawn side by side, so they are
    /// always the same height.
    #[must_use]
    pub fn with_window_size_provider(mut self, provider: SharedWindowSizeProvider) -> Self {
        self.source_scroller
            .set_window_size_provider(provider.clone());
        self.queue_scroller.set_window_size_provider(provider);
        self
    }

    pub fn set_window_size_provider(
        &mut self,
        pane: Pane,
        provider: SharedWindowSizeProvider,
    ) {
        self.scroller_mut(pane).set_window_size_provider(provider);
    }

    #[must_use]
    pub fn focus(&self) -> Pane { self.focus }

    #[must_use]
    pub fn items(&self, pane: Pane) -> &ItemList {
        match pane {
            Pane::Source => &self.source,
            Pane::Queue => &self.queue,
        }
    }

    #[must_use]
    pub fn scroller(&self, pane: Pane) -> &SliceScroller {
        match pane {
            Pane::Source => &self.source_scroller,
            Pane::Queue => &self.queue_scroller,
        }
    }

    fn scroller_mut(&mut self, pane: Pane) -> &mut SliceScroller {
        match pane {
            Pane::Source => &mut self.source_scroller,
            Pane::Queue => &mut self.queue_scroller,
        }
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "switch_focus", focus = %self.focus);
        });
    }

    /// Move the highlighted source item to the end of the queue. Source focus only.
    /// Returns `false` if nothing moved.
    pub fn transfer_to_queue(&mut self) -> bool {
        if !self.has_focus(Pane::Source, "transfer_to_queue") {
            return false;
        }
        self.transfer_from(Pane::Source)
    }

    /// Move the highlighted queue item to the end of the source. Queue focus only.
    /// Returns `false` if nothing moved.
    pub fn transfer_to_source(&mut self) -> bool {
        if !self.has_focus(Pane::Queue, "transfer_to_source") {
            return false;
        }
        self.transfer_from(Pane::Queue)
    }

    /// Swap the highlighted queue item with the one above it, and keep it highlighted.
    /// Queue focus only. Returns `false` at the top of the queue.
    pub fn prioritize_up(&mut self) -> bool {
        if !self.has_focus(Pane::Queue, "prioritize_up") {
            return false;
        }
        let index = self.queue_scroller.index();
        if index == 0 || index >= self.queue.len() {
            return false;
        }
        self.queue.swap(index, index - 1);
        self.queue_scroller.move_up();
        self.debug_assert_invariants();
        true
    }

    /// Swap the highlighted queue item with the one below it, and keep it highlighted.
    /// Queue focus only. Returns `false` at the bottom of the queue.
    pub fn prioritize_down(&mut self) -> bool {
        if !self.has_focus(Pane::Queue, "prioritize_down") {
            return false;
        }
        let index = self.queue_scroller.index();
        if index + 1 >= self.queue.len() {
            return false;
        }
        self.queue.swap(index, index + 1);
        self.queue_scroller.move_down();
        self.debug_assert_invariants();
        true
    }

    /// Move the cursor of the focused pane. Returns `false` if neither the cursor nor
    /// the viewport moved.
    pub fn navigate(&mut self, direction: Direction, granularity: Granularity) -> bool {
        let scroller = self.scroller_mut(self.focus);
        let before = (scroller.index(), scroller.view_offset());
        match (direction, granularity) {
            (Direction::Up, Granularity::Step) => scroller.move_up(),
            (Direction::Down, Granularity::Step) => scroller.move_down(),
            (Direction::Up, Granularity::Page) => scroller.page_up(),
            (Direction::Down, Granularity::Page) => scroller.page_down(),
        }
        let after = (scroller.index(), scroller.view_offset());
        self.debug_assert_invariants();
        before != after
    }

    /// The rows of `pane` that fit in its window right now.
    #[must_use]
    pub fn visible_slice(&self, pane: Pane) -> VisibleRows<'_> {
        visible_slice(self.items(pane), self.scroller(pane))
    }

    /// Run one command against the focused pane. This is what the host's input layer
    /// calls for every key press.
    pub fn apply(&mut self, command: PickerCommand) -> EventLoopResult {
        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "apply", command = %command, focus = %self.focus);
        });

        if let Some((direction, granularity)) = command.navigation() {
            return rerender_if(self.navigate(direction, granularity));
        }

        match command {
            PickerCommand::SwitchFocus => {
                self.switch_focus();
                EventLoopResult::ContinueAndRerender
            }
            PickerCommand::Transfer => rerender_if(match self.focus {
                Pane::Source => self.transfer_to_queue(),
                Pane::Queue => self.transfer_to_source(),
            }),
            PickerCommand::PrioritizeUp => rerender_if(self.prioritize_up()),
            PickerCommand::PrioritizeDown => rerender_if(self.prioritize_down()),
            PickerCommand::Terminate => EventLoopResult::Exit,
            PickerCommand::MoveUp
            | PickerCommand::MoveDown
            | PickerCommand::PageUp
            | PickerCommand::PageDown => EventLoopResult::Continue,
        }
    }

    /// End the session and hand back both lists in their current order.
    #[must_use]
    pub fn terminate(self) -> PickResult {
        PickResult {
            queue_order: self.queue.into_identifiers(),
            remaining_order: self.source.into_identifiers(),
        }
    }

    fn has_focus(&self, required: Pane, operation: &str) -> bool {
        let it = self.focus == required;
        if !it {
            tracing::debug!(
                message = "ignored, wrong focus",
                operation = operation,
                focus = %self.focus
            );
        }
        it
    }

    /// Take the highlighted item of `from` and append it to the other list. The list
    /// that shrank gets its cursor re-anchored by replaying `move_up`, so the viewport
    /// follows the same path as normal navigation.
    fn transfer_from(&mut self, from: Pane) -> bool {
        let Self {
            source,
            queue,
            source_scroller,
            queue_scroller,
            ..
        } = self;

        let (from_list, from_scroller, to_list, to_scroller) = match from {
            Pane::Source => (source, source_scroller, queue, queue_scroller),
            Pane::Queue => (queue, queue_scroller, source, source_scroller),
        };

        let Some(item) = from_list.remove(from_scroller.index()) else {
            return false;
        };
        to_list.push(item);

        to_scroller.set_entries_count(to_list.len());
        from_scroller.set_entries_count(from_list.len());
        from_scroller.reanchor_cursor();

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "transfer",
                from = %from,
                source_len = self.source.len(),
                queue_len = self.queue.len()
            );
        });

        self.debug_assert_invariants();
        true
    }

    fn debug_assert_invariants(&self) {
        for (list, scroller) in [
            (&self.source, &self.source_scroller),
            (&self.queue, &self.queue_scroller),
        ] {
            debug_assert_eq!(list.len(), scroller.entries_count());
            debug_assert!(scroller.view_offset() <= scroller.index() || list.is_empty());
            debug_assert!(scroller.index() < list.len() || list.is_empty());
        }
    }
}

fn rerender_if(changed: bool) -> EventLoopResult {
    if changed {
        EventLoopResult::ContinueAndRerender
    } else {
        EventLoopResult::Continue
    }
}
