// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::QueuePickerError;

/// Create a file appender that never rolls over, at `path_str`. A bare file name is
/// created in the current working directory.
///
/// # Errors
///
/// Returns [`QueuePickerError::LogFilePath`] if `path_str` has no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let Some(file_name) = path.file_name() else {
        return Err(QueuePickerError::LogFilePath {
            path: path.display().to_string(),
        }
        .into());
    };

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}
