use crate::{
	error::{BufferError, LexError, TokenizerError},
	tokenizer::{Span, Token, TokenKind},
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
	#[error("{0}")]
	Internal(#[from] BufferError),
	#[error(transparent)]
	Lexical(#[from] LexError),
	#[error(transparent)]
	Syntax(#[from] SyntaxError),
}

impl From<TokenizerError> for ParserError {
	fn from(error: TokenizerError) -> Self {
		match error {
			TokenizerError::Internal(e) => ParserError::Internal(e),
			TokenizerError::Lexical(e) => ParserError::Lexical(e),
		}
	}
}

/// An unexpected token, reported with everything needed to point at it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Expected {type}, but got '{lexeme}' ({kind}) {span}.")]
pub struct SyntaxError {
	r#type: SyntaxErrorType,
	lexeme: String,
	kind:   TokenKind,
	span:   Span,
}

impl SyntaxError {
	pub fn new(r#type: SyntaxErrorType, found: &Token<'_>) -> Self {
		Self { r#type, lexeme: found.lexeme.to_string(), kind: found.kind, span: found.span }
	}

	pub fn r#type(&self) -> SyntaxErrorType { self.r#type }

	pub fn lexeme(&self) -> &str { &self.lexeme }

	pub fn kind(&self) -> TokenKind { self.kind }

	pub fn span(&self) -> Span { self.span }
}

/// What the parser was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorType {
	ExpectedTerminal,
	ExpectedIdentifier,
	ExpectedCloseParenthesis,
	ExpectedCloseBracket,
	ExpectedEndOfFile,
	/// Nesting past the given number of levels.
	TooDeep(usize),
}

impl std::fmt::Display for SyntaxErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use SyntaxErrorType::*;
		match self {
			ExpectedTerminal => write!(f, "terminal"),
			ExpectedIdentifier => write!(f, "identifier"),
			ExpectedCloseParenthesis => write!(f, "')'"),
			ExpectedCloseBracket => write!(f, "']'"),
			ExpectedEndOfFile => write!(f, "end of file"),
			TooDeep(limit) => write!(f, "at most {limit} levels of nesting"),
		}
	}
}
