// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::Cell, rc::Rc};

use crate::Size;

/// The host capability that a [`crate::SliceScroller`] uses to find out how big its
/// window currently is. It is queried on every scroll or move operation and the result
/// is never cached, so a resize takes effect on the very next operation.
///
/// Any `Fn() -> Size` closure is a provider.
pub trait WindowSizeProvider {
    fn window_size(&self) -> Size;
}

/// Scrollers live on the single thread that runs the input / render cycle, so they
/// share the provider via [Rc].
pub type SharedWindowSizeProvider = Rc<dyn WindowSizeProvider>;

impl<F> WindowSizeProvider for F
where
    F: Fn() -> Size,
{
    fn window_size(&self) -> Size { self() }
}

/// A provider whose size can be changed from the outside at any time. Cloning it
/// produces a handle to the same size, so the host keeps one clone and resizes it, and
/// the scrollers see the new size on their next operation.
#[derive(Debug, Clone, Default)]
pub struct ResizableWindowSize {
    inner: Rc<Cell<Size>>,
}

impl ResizableWindowSize {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            inner: Rc::new(Cell::new(size)),
        }
    }

    pub fn resize(&self, new_size: Size) { self.inner.set(new_size); }

    #[must_use]
    pub fn get(&self) -> Size { self.inner.get() }
}

impl WindowSizeProvider for ResizableWindowSize {
    fn window_size(&self) -> Size { self.get() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_closure_is_a_provider() {
        let provider: SharedWindowSizeProvider = Rc::new(|| Size::new(10, 7));
        assert_eq2!(provider.window_size(), Size::new(10, 7));
    }

    #[test]
    fn test_resize_is_seen_by_every_clone() {
        let host_handle = ResizableWindowSize::new(Size::new(80, 24));
        let provider: SharedWindowSizeProvider = Rc::new(host_handle.clone());
        assert_eq2!(provider.window_size(), Size::new(80, 24));

        host_handle.resize(Size::new(80, 5));
        assert_eq2!(provider.window_size(), Size::new(80, 5));
    }
}
