use std::process::ExitCode;

use clap::Parser;
use exprfront::cli::*;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let frontend = exprfront::Frontend;
	let mut stdout = std::io::stdout().lock();

	let result = match Cli::parse().mode {
		Mode::Tokens { path } => frontend.dump_tokens_file(&path, &mut stdout),
		Mode::Parse { path } => frontend.dump_tree_file(&path, &mut stdout),
		Mode::Repl => frontend.run_prompt(std::io::stdin().lock(), &mut stdout),
	};
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e}");
			ExitCode::FAILURE
		}
	}
}
