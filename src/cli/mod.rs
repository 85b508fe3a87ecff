use std::process::ExitCode;

use anyhow::Result;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, GenerateArgs, GenerateCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    Ok(run::run(args)?.into())
}
