//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "touchd";

/// ファイルを作成し、既存ファイルの時刻を更新するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = PROGRAM_NAME)]
#[command(
    about = "Update the access and modification times of each FILE to the current time.",
    long_about = None
)]
#[command(after_help = "A FILE argument that does not exist is created empty.\n\
If any FILE argument contains parent directories that do not exist, they are created automatically.")]
pub struct Args {
    /// Files to create or touch
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Render the help text shown for `--help` and on a missing operand
pub fn usage() -> String {
    Args::command().render_help().to_string()
}
