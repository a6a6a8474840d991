use crate::{error::BufferError, tokenizer::Radix};

/// Tokenizer related errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
	/// Lookahead buffer invariant broken, should never happen
	#[error("{0}")]
	Internal(#[from] BufferError),
	/// Malformed input
	#[error(transparent)]
	Lexical(#[from] LexError),
}

/// A specific lexical error with the byte offset where scanning gave up.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("offset {offset}: {type}")]
pub struct LexError {
	offset: usize,
	r#type: LexErrorType,
}

impl LexError {
	pub fn new(offset: usize, r#type: LexErrorType) -> Self { Self { offset, r#type } }

	/// Byte offset into the source.
	pub fn offset(&self) -> usize { self.offset }

	pub fn r#type(&self) -> &LexErrorType { &self.r#type }
}

/// Types of lexical errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorType {
	/// `/*` without a matching `*/`.
	UnterminatedComment,
	/// String literal cut by a newline (`at_newline`) or by end-of-file.
	UnterminatedString { at_newline: bool },
	/// `0b`, `0o` or `0x` not followed by a digit of that base.
	PrefixWithoutNumber(Radix),
	/// Decimal literal starting with `0`.
	LeadingZero,
	/// Byte that cannot start any token, non-ASCII bytes included.
	UnrecognizedCharacter(u8),
}

impl std::fmt::Display for LexErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use LexErrorType::*;
		match self {
			UnterminatedComment => {
				write!(f, "Unterminated multiline comment")
			}
			UnterminatedString { at_newline: true } => {
				write!(f, "Reached end-of-line before ending string literal")
			}
			UnterminatedString { at_newline: false } => {
				write!(f, "Reached end-of-file before ending string literal")
			}
			PrefixWithoutNumber(radix) => {
				write!(f, "{radix} prefix without a number")
			}
			LeadingZero => {
				write!(f, "Decimal numbers cannot start with 0 (use \"0o\" prefix for octal base)")
			}
			UnrecognizedCharacter(c) => {
				write!(f, "Unrecognized token starting with '{}'", c.escape_ascii())
			}
		}
	}
}
