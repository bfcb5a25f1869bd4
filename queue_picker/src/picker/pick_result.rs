// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// What the picker hands back when the user is done. Together the two lists hold every
/// identifier that the picker was created with, each exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickResult {
    /// Items in the queue pane, in the order the user arranged them.
    pub queue_order: Vec<String>,
    /// Items left in the source pane, in their current order.
    pub remaining_order: Vec<String>,
}

impl PickResult {
    /// The queue followed by the remaining items. Callers that want to shuffle the
    /// remaining items should do that before calling this.
    #[must_use]
    pub fn into_play_order(self) -> Vec<String> {
        let mut it = self.queue_order;
        it.extend(self.remaining_order);
        it
    }
}
