//! Validate command - checks CPF numbers offline

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Args;

use crate::domain::document::{self, ValidationOutcome};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Documents to check, formatted or not
    #[arg(required = true)]
    pub documents: Vec<String>,
}

/// Print one verdict per document; fails when any is invalid
pub fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let all_valid = report(&args.documents, &mut stdout.lock())?;

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn report<W: Write>(documents: &[String], out: &mut W) -> io::Result<bool> {
    let mut all_valid = true;

    for raw in documents {
        match document::validate(raw) {
            ValidationOutcome::Valid => writeln!(out, "{}\tVALID", raw)?,
            ValidationOutcome::Invalid(reason) => {
                all_valid = false;
                writeln!(out, "{}\t{}\t{}", raw, reason.as_str(), reason)?;
            }
        }
    }

    Ok(all_valid)
}
