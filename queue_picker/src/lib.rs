/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # r3bl-queue-picker
//!
//! This crate lets a CLI app show the user two panes side by side:
//!
//! 1. A "source" pane with every candidate item (eg: the media files in a folder).
//! 1. A "queue" pane where the user builds an initial play queue.
//!
//! The user moves the highlighted item from one pane to the end of the other, bumps
//! items up or down inside the queue, and scrolls lists that are much longer than the
//! terminal. When the user is done, the picker hands back two ordered lists: the queue
//! order and the remaining (unpicked) order. The caller decides what to do with them,
//! eg: play the queue first and then shuffle the rest.
//!
//! # How it is put together
//!
//! - [`SliceScroller`] tracks a cursor and a scroll offset for one list. It knows
//!   nothing about the list contents, only its length, and it asks a
//!   [`WindowSizeProvider`] for the current window height every time it does
//!   something. The window can be resized between any two calls.
//! - [`format_label`] turns a raw identifier like `Some_Song.mp3` into `Some Song`.
//! - [`QueuePicker`] owns both lists, one [`SliceScroller`] per list, and the
//!   [`Pane`] that has focus. Every mutation goes through it, so the scroller
//!   invariants are repaired right after a list shrinks.
//!
//! The host (the terminal event loop) sends [`PickerCommand`]s to
//! [`QueuePicker::apply`], asks for [`QueuePicker::visible_slice`] to draw each pane,
//! and finally calls [`QueuePicker::terminate`] to get a [`PickResult`].
//!
//! ```
//! use r3bl_queue_picker::*;
//! use std::rc::Rc;
//!
//! let window = ResizableWindowSize::new(Size::new(40, 5));
//! let mut picker = QueuePicker::new(["b.mp3", "a.mp3", "c.mp3"])
//!     .with_window_size_provider(Rc::new(window.clone()));
//!
//! picker.apply(PickerCommand::Transfer);
//! let result = picker.terminate();
//!
//! assert_eq!(result.queue_order, vec!["b.mp3"]);
//! assert_eq!(result.remaining_order, vec!["a.mp3", "c.mp3"]);
//! ```
//!
//! # Binary
//!
//! The `qp` binary is a headless host for the picker. It takes identifiers as
//! arguments (or piped in via `stdin`), runs a script of commands against them, and
//! prints the resulting queue and remaining lists.
//!
//! ```shell
//! ls ~/Music | qp --commands "down enter down down enter focus w quit"
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enable verbose tracing of every command and scroll adjustment. Only has an effect
/// when logging is turned on (eg: `qp --enable-logging`). You can use `tail -f log.txt`
/// to watch the logs.
pub const DEVELOPMENT_MODE: bool = false;

// Attach sources.
pub mod cli;
pub mod constants;
pub mod error;
pub mod label;
pub mod log;
pub mod picker;
pub mod scroll;
pub mod term;

// Re-export.
pub use cli::*;
pub use constants::*;
pub use error::*;
pub use label::*;
pub use log::*;
pub use picker::*;
pub use scroll::*;
pub use term::*;

/// Wrapper around [`pretty_assertions::assert_eq!`] so that test failures show a
/// colored diff.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
