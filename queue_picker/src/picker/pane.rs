// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

use crate::{QUEUE_PANE_TITLE, SOURCE_PANE_TITLE};

/// The two panes of the picker. The focused pane is the one that receives navigation,
/// transfer, and reorder commands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Pane {
    #[default]
    Source,
    Queue,
}

impl Pane {
    /// The pane that does not have focus when `self` does.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Pane::Source => Pane::Queue,
            Pane::Queue => Pane::Source,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Pane::Source => SOURCE_PANE_TITLE,
            Pane::Queue => QUEUE_PANE_TITLE,
        }
    }
}
