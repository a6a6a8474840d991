mod buffer;
mod parser;
mod tokenizer;

pub use buffer::BufferError;
pub use parser::{ParserError, SyntaxError, SyntaxErrorType};
pub use tokenizer::{LexError, LexErrorType, TokenizerError};

/// FrontendError is the top-level error type for the expression front end.
#[derive(thiserror::Error, Debug)]
pub enum FrontendError {
	/// I/O and other failures outside the front end proper
	#[error("{0:#}")]
	Internal(#[from] anyhow::Error),
	/// Errors raised while producing tokens
	#[error(transparent)]
	Tokenizer(#[from] TokenizerError),
	/// Errors raised while building the tree
	#[error(transparent)]
	Parser(#[from] ParserError),
}
