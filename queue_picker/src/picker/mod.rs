// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod item;
pub mod pane;
pub mod pick_result;
pub mod picker_command;
pub mod queue_picker;
pub mod visible_slice;

// Re-export.
pub use item::*;
pub use pane::*;
pub use pick_result::*;
pub use picker_command::*;
pub use queue_picker::*;
pub use visible_slice::*;
