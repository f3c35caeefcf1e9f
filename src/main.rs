//! touchd - create files and update their timestamps

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;
use std::process::ExitCode;

use touchd::adapter::config::Config;
use touchd::driver::cli::usage;
use touchd::driver::{Args, MissingOperandError, TouchWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    // Create workflow with injected dependencies
    let workflow = TouchWorkflow::new(Config::default());

    match workflow.execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            if e.is::<MissingOperandError>() {
                eprintln!();
                eprint!("{}", usage());
            }
            ExitCode::FAILURE
        }
    }
}
