//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::fs_toucher::FsToucher;
use crate::application::use_cases::touch_files::TouchFilesUseCase;

use super::cli::{Args, PROGRAM_NAME};

/// Returned when the command line names no files
#[derive(Debug, thiserror::Error)]
#[error("{}: missing file operand", PROGRAM_NAME)]
pub struct MissingOperandError;

/// Touch Workflow
pub struct TouchWorkflow {
    touch_use_case: TouchFilesUseCase<FsToucher>,
}

impl TouchWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let toucher = Arc::new(FsToucher::new(&config));
        let touch_use_case = TouchFilesUseCase::new(toucher);

        Self { touch_use_case }
    }

    /// Execute the touch workflow
    pub fn execute(&self, args: &Args) -> Result<()> {
        if args.files.is_empty() {
            return Err(MissingOperandError.into());
        }

        info!("Starting {}...", PROGRAM_NAME);
        self.touch_use_case.execute(&args.files)?;

        Ok(())
    }
}
