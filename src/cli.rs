use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "exprfront", version, after_long_help = "Set RUST_LOG=trace to watch tokens and nodes being built.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Print every token of a file
	Tokens { path: PathBuf },
	/// Parse a file as one expression and print its tree
	Parse { path: PathBuf },
	/// Parse expressions typed at a prompt
	Repl,
}
