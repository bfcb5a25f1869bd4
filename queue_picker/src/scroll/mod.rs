// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod size;
pub mod slice_scroller;
pub mod window_size_provider;

// Re-export.
pub use size::*;
pub use slice_scroller::*;
pub use window_size_provider::*;
