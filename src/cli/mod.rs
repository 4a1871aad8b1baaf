//! Command line interface
//!
//! - `serve`: run the registration API
//! - `validate`: check CPF numbers without starting the server

pub mod serve;
pub mod validate;

use clap::{Parser, Subcommand};

/// User registration service with CPF validation
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Validate one or more CPF numbers
    Validate(validate::ValidateArgs),
}
