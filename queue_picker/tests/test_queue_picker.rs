// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive [`QueuePicker`] with long pseudo random command sequences and check that the
//! lists and scrollers stay consistent after every single command.

use std::rc::Rc;

use r3bl_queue_picker::{EventLoopResult, Pane, PickerCommand, QueuePicker,
                        ResizableWindowSize, Size, SliceScroller, assert_eq2,
                        parse_commands, run_commands};
use rand::{Rng, SeedableRng, rngs::StdRng};
use test_case::test_case;

const COMMANDS: [PickerCommand; 8] = [
    PickerCommand::MoveUp,
    PickerCommand::MoveDown,
    PickerCommand::PageUp,
    PickerCommand::PageDown,
    PickerCommand::SwitchFocus,
    PickerCommand::Transfer,
    PickerCommand::PrioritizeUp,
    PickerCommand::PrioritizeDown,
];

fn make_identifiers(count: usize) -> Vec<String> {
    (0..count).map(|it| format!("track_{it:03}.mp3")).collect()
}

fn random_command(rng: &mut StdRng) -> PickerCommand {
    // Bias towards moves so the cursor travels far enough to scroll.
    match rng.random_range(0..4) {
        0 => PickerCommand::MoveDown,
        _ => COMMANDS[rng.random_range(0..COMMANDS.len())],
    }
}

fn assert_ordering_invariants(scroller: &SliceScroller, len: usize) {
    assert_eq2!(scroller.entries_count(), len);
    if len > 0 {
        assert!(
            scroller.view_offset() <= scroller.index(),
            "view above cursor: {scroller:?}"
        );
        assert!(scroller.index() < len, "cursor past the end: {scroller:?}");
    }
}

fn assert_window_invariant(scroller: &SliceScroller, height: usize) {
    if scroller.entries_count() > 0 {
        assert!(
            scroller.index() < scroller.view_offset() + height,
            "cursor below window: {scroller:?}"
        );
    }
}

#[test_case(1, 1, 30)]
#[test_case(2, 5, 100)]
#[test_case(3, 9, 12)]
#[test_case(4, 24, 60)]
#[test_case(5, 30, 3)]
#[test_case(6, 3, 0)]
fn test_invariants_hold_after_every_command(seed: u64, height: isize, count: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let identifiers = make_identifiers(count);
    let mut picker = QueuePicker::new(identifiers.clone())
        .with_window_size_provider(Rc::new(move || Size::new(40, height)));
    let height = usize::try_from(height).unwrap();

    for _ in 0..2_000 {
        let command = random_command(&mut rng);
        let queue_before = picker.items(Pane::Queue).identifiers();
        let focus_before = picker.focus();

        picker.apply(command);

        let source_len = picker.items(Pane::Source).len();
        let queue_len = picker.items(Pane::Queue).len();
        assert_eq2!(source_len + queue_len, count);

        for pane in [Pane::Source, Pane::Queue] {
            let scroller = picker.scroller(pane);
            assert_ordering_invariants(scroller, picker.items(pane).len());
            assert_window_invariant(scroller, height);
            assert!(picker.visible_slice(pane).len() <= height);
        }

        // Reordering only ever exchanges two neighbors.
        if matches!(
            command,
            PickerCommand::PrioritizeUp | PickerCommand::PrioritizeDown
        ) {
            let queue_after = picker.items(Pane::Queue).identifiers();
            let changed = (0..queue_after.len())
                .filter(|&it| queue_after[it] != queue_before[it])
                .collect::<Vec<_>>();
            match changed.as_slice() {
                [] => {}
                [a, b] => {
                    assert_eq2!(*a + 1, *b);
                    assert_eq2!(queue_after[*a], queue_before[*b]);
                    assert_eq2!(queue_after[*b], queue_before[*a]);
                    assert_eq2!(focus_before, Pane::Queue);
                }
                other => panic!("prioritize changed {other:?}"),
            }
        }
    }

    let result = picker.terminate();
    let mut all = result.into_play_order();
    all.sort();
    assert_eq2!(all, identifiers);
}

#[test]
fn test_invariants_survive_resizes() {
    let mut rng = StdRng::seed_from_u64(42);
    let identifiers = make_identifiers(80);
    let window = ResizableWindowSize::new(Size::new(40, 20));
    let mut picker = QueuePicker::new(identifiers.clone())
        .with_window_size_provider(Rc::new(window.clone()));

    for step in 0..3_000_u32 {
        if step.is_multiple_of(7) {
            // Includes degenerate heights, which turn navigation into a no-op.
            let height = isize::try_from(rng.random_range(-2_i32..40)).unwrap();
            window.resize(Size::new(40, height));
        }

        picker.apply(random_command(&mut rng));

        for pane in [Pane::Source, Pane::Queue] {
            assert_ordering_invariants(picker.scroller(pane), picker.items(pane).len());
        }
    }

    let mut all = picker.terminate().into_play_order();
    all.sort();
    assert_eq2!(all, identifiers);
}

/// Shrinking the window does not pull a far away cursor back in. `MoveUp` only scrolls
/// when the cursor is within the margin of the top of the window, so here the cursor
/// steps up by one and stays below the window, and nothing is highlighted.
#[test]
fn test_shrink_leaves_far_cursor_below_window() {
    let window = ResizableWindowSize::new(Size::new(40, 60));
    let mut picker = QueuePicker::new(make_identifiers(100))
        .with_window_size_provider(Rc::new(window.clone()));

    for _ in 0..50 {
        picker.apply(PickerCommand::MoveDown);
    }
    let scroller = picker.scroller(Pane::Source);
    assert_eq2!((scroller.index(), scroller.view_offset()), (50, 10));

    window.resize(Size::new(40, 5));
    assert_eq2!(
        picker.apply(PickerCommand::MoveUp),
        EventLoopResult::ContinueAndRerender
    );

    let scroller = picker.scroller(Pane::Source);
    assert_eq2!((scroller.index(), scroller.view_offset()), (49, 10));
    assert_eq2!(scroller.visible_range(), 10..15);

    let rows = picker.visible_slice(Pane::Source);
    assert_eq2!(rows.len(), 5);
    assert!(rows.iter().all(|row| !row.is_highlighted));
    drop(rows);

    // Once the cursor is within the margin the view scrolls again and catches up.
    for _ in 0..19 {
        picker.apply(PickerCommand::MoveUp);
    }
    let scroller = picker.scroller(Pane::Source);
    assert_eq2!((scroller.index(), scroller.view_offset()), (30, 10));
    picker.apply(PickerCommand::MoveUp);
    let scroller = picker.scroller(Pane::Source);
    assert_eq2!((scroller.index(), scroller.view_offset()), (12, 9));
    let highlighted_count = picker
        .visible_slice(Pane::Source)
        .iter()
        .filter(|row| row.is_highlighted)
        .count();
    assert_eq2!(highlighted_count, 1);
}

#[test]
fn test_remaining_order_is_a_subsequence_of_the_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let identifiers = make_identifiers(50);
    let mut picker = QueuePicker::new(identifiers.clone())
        .with_window_size_provider(Rc::new(|| Size::new(40, 8)));

    for _ in 0..500 {
        let command = match rng.random_range(0..3) {
            0 => PickerCommand::Transfer,
            1 => PickerCommand::MoveDown,
            _ => PickerCommand::PageDown,
        };
        picker.apply(command);
    }

    let result = picker.terminate();
    let mut it = identifiers.iter();
    for remaining in &result.remaining_order {
        assert!(it.any(|input| input == remaining));
    }
}

#[test]
fn test_ten_moves_down_in_a_short_window() {
    let mut picker = QueuePicker::new(make_identifiers(100))
        .with_window_size_provider(Rc::new(|| Size::new(40, 5)));

    for _ in 0..10 {
        assert_eq2!(
            picker.apply(PickerCommand::MoveDown),
            EventLoopResult::ContinueAndRerender
        );
    }

    // The margin is larger than the window, so the view scrolls on every step and the
    // cursor stays one row below the top of the window.
    let scroller = picker.scroller(Pane::Source);
    assert_eq2!(scroller.view_offset(), 10);
    assert_eq2!(scroller.index(), 11);
}

#[test]
fn test_scripted_session() {
    let picker = QueuePicker::new(["b.mp3", "a.mp3", "c.mp3", "d_e.ogg"])
        .with_window_size_provider(Rc::new(|| Size::new(40, 10)));
    let commands =
        parse_commands("enter, down, down, enter, focus, s, focus, enter, quit, enter")
            .unwrap();

    let result = run_commands(picker, commands, |_| {});

    // Source after the first transfer is [a, c, d_e]. Two downs land on d_e. Then the
    // queue is [b, d_e], `s` swaps them, and the last transfer takes the highlighted
    // source item (c, after the source list shrank) to the end of the queue.
    assert_eq2!(result.queue_order, vec!["d_e.ogg", "b.mp3", "c.mp3"]);
    assert_eq2!(result.remaining_order, vec!["a.mp3"]);
}
