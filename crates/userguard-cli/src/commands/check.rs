//! `userguard check` — validate a record and print the report.
//!
//! This is the form path: the report is always printed, and a record with
//! violations exits with the user-error code.

use tracing::{info, instrument};

use userguard_core::application::{SystemClock, UserService, ValidationReport};

use crate::{
    cli::CheckCommands,
    error::{CliError, CliResult},
    input,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(cmd: CheckCommands, output: OutputManager) -> CliResult<()> {
    let service = UserService::new(Box::new(SystemClock));

    let report = match cmd {
        CheckCommands::Create(args) => service.check_create(&input::create_input(args)?),
        CheckCommands::Update(args) => service.check_update(&input::update_input(args)?),
    };

    info!(valid = report.valid, errors = report.errors.len(), "Record checked");
    output.report(&report)?;
    verdict(&report)
}

fn verdict(report: &ValidationReport) -> CliResult<()> {
    if report.valid {
        Ok(())
    } else {
        Err(CliError::RecordRejected {
            count: report.errors.len(),
        })
    }
}
