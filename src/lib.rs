//! # From bytes to a tree
//!
//! Source: `a.b[0](1, 2) + -x`
//!
//! ## Tokenizing
//!
//! Also known as `lexing`, takes in the characters and groups them into
//! tokens: `a`, `.`, `b`, `[`, `0`, `]`, `(`, `1`, `,`, `2`, `)`, `+`, `-`,
//! `x`, and a final end-of-file marker. Whitespace and comments are dropped.
//! Each token remembers the byte range it came from.
//!
//! ## Parsing
//!
//! The parser reads tokens through a small lookahead window and builds a tree.
//! Operators bind by precedence, accessors chain to the left:
//!
//! ``` markdown
//! Addition
//! ├── FunctionCall
//! │   ├── SubscriptAccess
//! │   │   ├── MemberAccess (a . b)
//! │   │   └── 0
//! │   └── (1, 2)
//! └── Negative
//!     └── x
//! ```
//!
//! Nothing past the tree happens here: names are not resolved, literals are
//! not converted and no types are checked. [`types`] holds the type
//! vocabulary a later pass would use.

pub mod cli;
mod error;
mod frontend;
pub mod lookahead;
pub mod parser;
pub mod tokenizer;
pub mod types;

pub use error::{
	BufferError, FrontendError, LexError, LexErrorType, ParserError, SyntaxError, SyntaxErrorType, TokenizerError,
};
pub use frontend::Frontend;
pub use parser::{Expression, ExpressionKind, Parser, parse};
pub use tokenizer::{Lexeme, Span, Token, TokenKind, Tokenizer, tokenize};
