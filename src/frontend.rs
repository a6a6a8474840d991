use std::{
	fs,
	io::{BufRead, Write},
	path::Path,
};

use anyhow::Context;
use tracing::debug;

use crate::{FrontendError, parser::Parser, tokenizer::tokenize};

/// Frontend drives the tokenizer and parser for the command line tools.
pub struct Frontend;

impl Frontend {
	/// Print every token of the file at `path`, end-of-file included.
	pub fn dump_tokens_file<P: AsRef<Path>, W: Write>(&self, path: P, out: &mut W) -> Result<(), FrontendError> {
		let source = Self::read(path.as_ref())?;
		self.dump_tokens(&source, out)
	}

	/// Parse the file at `path` as one expression and print its tree.
	pub fn dump_tree_file<P: AsRef<Path>, W: Write>(&self, path: P, out: &mut W) -> Result<(), FrontendError> {
		let source = Self::read(path.as_ref())?;
		self.dump_tree(&source, out)
	}

	pub fn dump_tokens<S, W>(&self, source: &S, out: &mut W) -> Result<(), FrontendError>
	where
		S: AsRef<[u8]> + ?Sized,
		W: Write,
	{
		for token in tokenize(source)? {
			writeln!(out, "Token type: {}", token.kind).context("Failed write token")?;
			write!(out, "Lexeme: ").context("Failed write token")?;
			out.write_all(token.lexeme.as_bytes()).context("Failed write token")?;
			writeln!(out).context("Failed write token")?;
			writeln!(out, "From: {}", token.span.from).context("Failed write token")?;
			writeln!(out, "To: {}", token.span.to).context("Failed write token")?;
			writeln!(out).context("Failed write token")?;
		}
		Ok(())
	}

	pub fn dump_tree<S, W>(&self, source: &S, out: &mut W) -> Result<(), FrontendError>
	where
		S: AsRef<[u8]> + ?Sized,
		W: Write,
	{
		let ast = Parser::new(source)?.parse()?;
		debug!(from = ast.span.from, to = ast.span.to, "parsed expression");
		ast.dump(out, 0).context("Failed write tree")?;
		Ok(())
	}

	/// Run the interactive prompt until end of input.
	pub fn run_prompt<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<(), FrontendError> {
		let mut line = Vec::new();
		loop {
			line.clear();
			write!(out, "> ").and_then(|_| out.flush()).context("Failed flush")?;
			if input.read_until(b'\n', &mut line).context("Failed read line")? == 0 {
				writeln!(out, "\nExited exprfront repl").context("Failed write")?;
				return Ok(());
			}
			let source = line.trim_ascii();
			if source.is_empty() {
				continue;
			}
			let written = match Parser::new(source).and_then(|mut parser| parser.parse()) {
				Ok(ast) => writeln!(out, "{ast}"),
				Err(e) => writeln!(out, "Error: {e}"),
			};
			written.context("Failed write")?;
		}
	}
}

impl Frontend {
	fn read(path: &Path) -> Result<Vec<u8>, FrontendError> {
		debug!(path = %path.display(), "reading source");
		Ok(fs::read(path).with_context(|| format!("Failed open source file {}", path.display()))?)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn dump_tokens(source: &str) -> String {
		let mut out = Vec::new();
		Frontend.dump_tokens(source, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn token_dump_includes_end_of_file() {
		assert_eq!(
			dump_tokens("a+\"b\""),
			"Token type: Identifier
Lexeme: a
From: 0
To: 1

Token type: Plus
Lexeme: +
From: 1
To: 2

Token type: StringLiteral
Lexeme: b
From: 2
To: 5

Token type: EndOfFile
Lexeme: 
From: 5
To: 5

"
		);
	}

	#[test]
	fn token_dump_keeps_raw_bytes() {
		let mut out = Vec::new();
		Frontend.dump_tokens(b"\"caf\xe9\"", &mut out).unwrap();
		let expected: &[u8] = b"Token type: StringLiteral\nLexeme: caf\xe9\nFrom: 0\nTo: 6\n\n\
			Token type: EndOfFile\nLexeme: \nFrom: 6\nTo: 6\n\n";
		assert_eq!(out, expected);

		let error = Frontend.dump_tokens(b"caf\xe9", &mut Vec::new()).unwrap_err();
		assert_eq!(error.to_string(), r"offset 3: Unrecognized token starting with '\xe9'");
	}

	#[test]
	fn errors_are_returned() {
		let mut out = Vec::new();
		assert!(matches!(Frontend.dump_tokens("\"open", &mut out), Err(FrontendError::Tokenizer(_))));
		assert!(matches!(Frontend.dump_tree("a.", &mut out), Err(FrontendError::Parser(_))));
		let missing = Frontend.dump_tree_file("/nonexistent/input.expr", &mut out);
		assert!(matches!(missing, Err(FrontendError::Internal(_))));
	}

	#[test]
	fn prompt_parses_each_line() {
		let input = b"1 + 2 * 3\n\na.\nf(x)[0]\n".as_slice();
		let mut out = Vec::new();
		Frontend.run_prompt(input, &mut out).unwrap();
		assert_eq!(
			String::from_utf8(out).unwrap(),
			concat!(
				"> (+ 1 (* 2 3))\n",
				"> > Error: Expected identifier, but got '' (EndOfFile) from 2 to 2.\n",
				"> ([] (call f x) 0)\n",
				"> \nExited exprfront repl\n",
			)
		);
	}
}
