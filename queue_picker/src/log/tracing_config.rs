// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the logs go, and how much gets logged. Build one directly, or convert it from
/// a level, a [`WriterConfig`], or a [`DisplayPreference`], and merge them with `+`:
///
/// ```
/// use r3bl_queue_picker::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let config: TracingConfig = TracingConfig::from(LevelFilter::INFO)
///     + TracingConfig::from(DisplayPreference::Stderr);
///
/// assert_eq!(config.level_filter, LevelFilter::DEBUG);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Set the global default subscriber. This can only be done once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer can't be created (eg: the log file can't be opened)
    /// or a global subscriber is already set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?.unwrap_or_default();
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("{error}"))
    }

    /// Set the subscriber for the current thread only. Logging stays on until the
    /// returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer can't be created (eg: the log file can't be opened).
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?.unwrap_or_default();
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level wins, and the writers are merged.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// `rhs` wins whenever both sides set the same thing (a display or a file path).
/// Otherwise the two are combined.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
            (_, DisplayAndFile(display, file)) => DisplayAndFile(display, file),
        }
    }
}
