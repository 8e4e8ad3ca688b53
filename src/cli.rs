use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Radix;

/// Validates that a base is a supported radix (2..=36)
fn validate_base(s: &str) -> Result<Radix, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Radix::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shamir-recover")]
#[command(about = "Reconstruct Shamir secrets from base-encoded shares by Lagrange interpolation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover the secret from each JSON input file
    Recover {
        /// Input files, processed in order
        #[arg(default_values = ["input1.json", "input2.json"])]
        files: Vec<PathBuf>,
    },
    /// Decode a single share value to decimal
    Decode {
        /// Base of the value (2-36)
        #[arg(short, long, value_parser = validate_base)]
        base: Radix,

        /// Digits of the value
        digits: String,
    },
}
