// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(bin_name = "qp")]
#[command(
    about = "🎶 Pick an initial play queue from a list of media files, then hand the rest back"
)]
#[command(version)]
#[command(next_line_help = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    /// Identifiers to pick from, eg: file names. If none are given, they are read from
    /// `stdin`, one per line 👉
    #[arg(value_name = "identifier")]
    pub identifiers: Vec<String>,

    /// Commands to run, separated by commas or spaces. Eg: "down enter focus w quit".
    /// Valid commands: up, down, page-up, page-down, focus, enter, w, s, quit 💡
    #[arg(value_name = "script", long, short = 'c', default_value = "")]
    pub commands: String,

    /// Fixed height of each pane (in rows). If not set, the current terminal size is
    /// used on every command
    #[arg(value_name = "height", long, short = 't')]
    pub height: Option<u16>,

    /// How to print the result
    #[arg(value_name = "format", long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print both panes after every command that changes them
    #[arg(long, short = 'p')]
    pub show_panes: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[clap(help = "\"Will queue this:\" and \"Then this:\" lists, one `- item` per line")]
    Text,
    #[clap(help = "JSON object with `queue_order` and `remaining_order` arrays")]
    Json,
}
