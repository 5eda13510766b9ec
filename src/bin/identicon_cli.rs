//! Identicon CLI
//!
//! Commands: generate, inspect, encode
//! Outputs JSON to stdout
//! Returns non-zero on failure

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use identicon_core::{
    derive_state, generate_identicon, input_from_os, logger::configure_logger, render_identicon,
    save_identicon, sha256_hex, IdenticonError, OutputConfig, ENGINE_VERSION,
};

#[derive(Parser)]
#[command(name = "identicon-cli")]
#[command(about = "Identicon CLI - deterministic 5x5 identicons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log_level: log::Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Render and save `<INPUT>.png`
    Generate {
        /// String to derive the identicon from
        input: OsString,

        /// Directory to write the image into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print the derived hash, color, grid and pixel map
    Inspect {
        input: OsString,
    },

    /// Print the PNG as base64 JSON without touching the filesystem
    Encode {
        input: OsString,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    configure_logger(cli.log_level);

    match run(cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let output = serde_json::json!({
                "success": false,
                "error": e.to_string(),
            });
            println!("{}", output);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<String, IdenticonError> {
    match command {
        Commands::Generate { input, out_dir } => {
            let input = input_from_os(&input)?;
            let config = OutputConfig::in_dir(out_dir);
            let png = generate_identicon(input)?;
            let path = save_identicon(input, &png, &config)?;

            let output = serde_json::json!({
                "success": true,
                "path": path,
                "sha256": sha256_hex(&png),
                "engine_version": ENGINE_VERSION,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }

        Commands::Inspect { input } => {
            let state = derive_state(input_from_os(&input)?)?;
            Ok(serde_json::to_string_pretty(&state)?)
        }

        Commands::Encode { input } => {
            let report = render_identicon(input_from_os(&input)?)?;
            let output = serde_json::json!({
                "success": true,
                "identicon": report,
                "engine_version": ENGINE_VERSION,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}
