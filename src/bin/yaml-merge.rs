//! Command-line entry point for yaml-merge.
//!
//! Usage:
//!   yaml-merge [--src SRC [--srcPath PATH] [--targetPath PATH]]... TARGET_FILE
//!
//! Exit status: 0 on success, 2 on a usage error, 1 on any other error.
use std::process::ExitCode;

use tracing::error;
use yaml_merge::cli::{self, Invocation};
use yaml_merge::logging;

fn main() -> ExitCode {
    let invocation = match cli::parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("ERROR - {}\n\n{}", e, cli::usage());
            return ExitCode::from(cli::exit_code(&e));
        }
    };

    let plan = match invocation {
        Invocation::Info(text) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        }
        Invocation::Merge(plan) => plan,
    };

    logging::init_logging(plan.verbosity);

    let stdout = std::io::stdout();
    match cli::run(&plan, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target_file = %plan.target_file.display(), "merge failed");
            eprintln!("Error: {}", e);
            ExitCode::from(cli::exit_code(&e))
        }
    }
}
