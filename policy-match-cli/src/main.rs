//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use policy_match_cli::CliError;

fn main() {
    match policy_match_cli::run() {
        Ok(()) => {}
        // Help and version requests are reported through clap as errors.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("policy-match: {err}");
            std::process::exit(1);
        }
    }
}
