use anyhow::Result;
use clap::Parser;
use log::info;

use shamir_recover::cli::{Cli, Commands};
use shamir_recover::commands::{decode_digits, recover_file};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recover { files } => {
            for path in &files {
                info!("Recovering secret from {}", path.display());
                let secret = recover_file(path)?;
                println!("Secret from {}: {secret}", path.display());
            }
        }
        Commands::Decode { base, digits } => {
            let value = decode_digits(&digits, base)?;
            println!("{value}");
        }
    }

    Ok(())
}
