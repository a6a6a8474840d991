//! Turns source bytes into tokens, one at a time.
//!
//! The tokenizer never scans ahead of what the parser asks for: it keeps
//! exactly `N` tokens buffered, and every [`Tokenizer::skip`] lexes exactly one
//! more token to replace the one consumed. This is the parser's lookahead
//! window.
//!
//! Operators are recognized by `maximal munch`: `>>>` is one token, not three,
//! and `<=` is never `<` followed by `=`.
//!
//! Lexemes are kept verbatim. `0x1F` stays the text `0x1F`; converting it to a
//! value belongs to whoever consumes the tree. String literals are the one
//! exception: their lexeme drops the surrounding quotes while their span still
//! covers them.
//!
//! The source is raw bytes. Every token outside a string literal is ASCII, so
//! a byte that is not ASCII is only accepted between quotes.
mod token;

use TokenKind::*;
pub use token::*;
use tracing::trace;

use crate::{
	error::{BufferError, LexError, LexErrorType, TokenizerError},
	lookahead::LookaheadBuffer,
};

/// A tokenizer over `source` with an `N`-token lookahead window
pub struct Tokenizer<'a, const N: usize> {
	/// User input source bytes
	source: &'a [u8],
	/// Offset of the next unread byte
	cursor: usize,
	/// Lexed but not yet consumed tokens
	tokens: LookaheadBuffer<Token<'a>, N>,
}

impl<'a, const N: usize> Tokenizer<'a, N> {
	/// Create a tokenizer and prime its window with `N` tokens.
	pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Result<Self, TokenizerError> {
		const { assert!(N > 0, "the lookahead window needs at least one token") };

		let mut tokenizer = Self { source: source.as_ref(), cursor: 0, tokens: LookaheadBuffer::new() };
		for _ in 0..N {
			let token = tokenizer.scan_token()?;
			tokenizer.tokens.push(token)?;
		}
		Ok(tokenizer)
	}

	/// The current token.
	pub fn peek(&self) -> Result<&Token<'a>, BufferError> { self.tokens.front() }

	/// The token `index` positions ahead of the current one, `index < N`.
	pub fn lookahead(&self, index: usize) -> Result<&Token<'a>, BufferError> { self.tokens.item(index) }

	/// Consume the current token and lex one more to refill the window.
	///
	/// The new token is lexed before anything is removed, so on a lexical
	/// error the window is left untouched.
	pub fn skip(&mut self) -> Result<Token<'a>, TokenizerError> {
		let next = self.scan_token()?;
		let consumed = self.tokens.pop()?;
		self.tokens.push(next)?;
		Ok(consumed)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self) -> Result<Token<'a>, LexError> {
		self.skip_whitespace()?;

		// We are at the beginning of the next lexeme.
		let start = self.cursor;
		let Some(next_byte) = self.advance() else {
			return Ok(self.emit(EndOfFile, start));
		};
		#[rustfmt::skip]
		let kind = match next_byte {
			b'[' => OpenBracket,
			b']' => CloseBracket,
			b'(' => OpenParenthesis,
			b')' => CloseParenthesis,
			b'.' => Dot,
			b',' => Comma,
			b'*' => Star,
			b'/' => Slash,
			b'%' => Percent,
			b'~' => Tilde,
			b'+' => if self.match_next(b'+') { Increment } else { Plus },
			b'-' => if self.match_next(b'-') { Decrement } else { Minus },
			b'!' => if self.match_next(b'=') { ExclamationEquals } else { Exclamation },
			b'=' => if self.match_next(b'=') { DoubleEquals } else { Equals },
			b'<' => if self.match_next(b'<') { DoubleLessThan } else if self.match_next(b'=') { LessEquals } else { LessThan },
			b'>' => if self.match_next(b'>') {
				if self.match_next(b'>') { TripleGreaterThan } else { DoubleGreaterThan }
			} else if self.match_next(b'=') { GreaterEquals } else { GreaterThan },
			b'"' => return self.string(start),
			c if c.is_ascii_digit() => self.number(c, start)?,
			c if c.is_ascii_alphabetic() || c == b'_' => self.identifier(),
			c => return Err(LexError::new(start, LexErrorType::UnrecognizedCharacter(c))),
		};

		Ok(self.emit(kind, start))
	}

	/// Token of `kind` covering `start` up to the cursor.
	fn emit(&self, kind: TokenKind, start: usize) -> Token<'a> {
		let token = Token::new(kind, Lexeme::new(&self.source[start..self.cursor]), Span::new(start, self.cursor));
		trace!(%kind, lexeme = %token.lexeme, from = token.span.from, to = token.span.to, "lexed token");
		token
	}

	/// Skip whitespace and comments until the next token or end-of-file.
	fn skip_whitespace(&mut self) -> Result<(), LexError> {
		loop {
			while self.peek_byte().is_some_and(is_whitespace) {
				self.advance();
			}
			if self.peek_byte() != Some(b'/') {
				return Ok(());
			}
			match self.peek_second_byte() {
				Some(b'/') => {
					while self.peek_byte().is_some_and(|c| c != b'\n') {
						self.advance();
					}
				}
				Some(b'*') => {
					let start = self.cursor;
					self.cursor += 2; // consume "/*"
					self.block_comment(start)?;
				}
				// A lone slash is an operator.
				_ => return Ok(()),
			}
		}
	}

	/// Consume a block comment body through its closing `*/`
	fn block_comment(&mut self, start: usize) -> Result<(), LexError> {
		loop {
			match self.advance() {
				Some(b'*') if self.match_next(b'/') => return Ok(()),
				Some(_) => {}
				None => return Err(LexError::new(start, LexErrorType::UnterminatedComment)),
			}
		}
	}

	/// Scan a string literal, the opening `"` already consumed
	fn string(&mut self, start: usize) -> Result<Token<'a>, LexError> {
		loop {
			match self.peek_byte() {
				Some(b'"') => break,
				Some(b'\n') => {
					return Err(LexError::new(start, LexErrorType::UnterminatedString { at_newline: true }));
				}
				None => return Err(LexError::new(start, LexErrorType::UnterminatedString { at_newline: false })),
				Some(_) => {
					self.advance();
				}
			}
		}
		let content = Lexeme::new(&self.source[start + 1..self.cursor]);
		self.advance(); // The closing "
		let token = Token::new(StringLiteral, content, Span::new(start, self.cursor));
		trace!(lexeme = %token.lexeme, from = token.span.from, to = token.span.to, "lexed string");
		Ok(token)
	}

	/// Scan a numeric literal, `first` already consumed
	fn number(&mut self, first: u8, start: usize) -> Result<TokenKind, LexError> {
		if first != b'0' {
			while self.peek_byte().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
			return Ok(NumericLiteral);
		}

		if let Some(radix) = self.peek_byte().and_then(Radix::from_prefix) {
			self.advance(); // consume the prefix letter
			let digits = self.cursor;
			while self.peek_byte().is_some_and(|c| radix.is_digit(c)) {
				self.advance();
			}
			if self.cursor == digits {
				return Err(LexError::new(start, LexErrorType::PrefixWithoutNumber(radix)));
			}
		} else if self.peek_byte().is_some_and(|c| c.is_ascii_digit()) {
			return Err(LexError::new(start, LexErrorType::LeadingZero));
		}
		// Otherwise it is the number zero.
		Ok(NumericLiteral)
	}

	/// Scan an identifier, no reserved words at this layer
	fn identifier(&mut self) -> TokenKind {
		while self.peek_byte().is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_') {
			self.advance();
		}
		Identifier
	}

	/// Match the next byte if it is the expected one
	fn match_next(&mut self, expected: u8) -> bool {
		matches!(self.peek_byte(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next byte
	fn advance(&mut self) -> Option<u8> {
		let c = self.peek_byte()?;
		self.cursor += 1;
		Some(c)
	}

	/// Peek the current byte
	fn peek_byte(&self) -> Option<u8> { self.source.get(self.cursor).copied() }

	/// Peek the byte after the current one
	fn peek_second_byte(&self) -> Option<u8> { self.source.get(self.cursor + 1).copied() }
}

/// Whitespace as the C locale sees it, vertical tab and form feed included.
fn is_whitespace(c: u8) -> bool { matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c') }

/// Tokenize the whole of `source`, end-of-file token included.
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> Result<Vec<Token<'_>>, TokenizerError> {
	let mut tokenizer = Tokenizer::<'_, 1>::new(source)?;
	let mut tokens = Vec::new();
	loop {
		let token = tokenizer.skip()?;
		tokens.push(token);
		if token.kind == EndOfFile {
			return Ok(tokens);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str, ok: bool) {
		let result = tokenize(input);
		assert!(result.is_ok() == ok, "{input:?} => {result:?}");
	}

	fn kinds(input: &str) -> Vec<TokenKind> { tokenize(input).unwrap().iter().map(|token| token.kind).collect() }

	fn lex_error(input: &str) -> LexErrorType {
		match tokenize(input) {
			Err(TokenizerError::Lexical(e)) => e.r#type().clone(),
			other => panic!("expected a lexical error for {input:?}, got {other:?}"),
		}
	}

	#[test]
	fn scan_tokens() {
		scan("", true);
		scan("(", true);
		scan("()[]", true);
		scan(" ( ) ", true);
		scan("@", false);
		scan("{", false);
		scan("你好", false);
		scan(r#""世界""#, true);
		scan("12345", true);
		scan("user", true);
		scan("return", true);
	}

	#[test]
	fn scan_operators() {
		assert_eq!(kinds("+ ++ +++"), [Plus, Increment, Increment, Plus, EndOfFile]);
		assert_eq!(kinds("- -- ---"), [Minus, Decrement, Decrement, Minus, EndOfFile]);
		assert_eq!(kinds("< <= << <<="), [LessThan, LessEquals, DoubleLessThan, DoubleLessThan, Equals, EndOfFile]);
		assert_eq!(kinds("> >= >> >>> >>>>"), [
			GreaterThan,
			GreaterEquals,
			DoubleGreaterThan,
			TripleGreaterThan,
			TripleGreaterThan,
			GreaterThan,
			EndOfFile
		]);
		assert_eq!(kinds("= == ==="), [Equals, DoubleEquals, DoubleEquals, Equals, EndOfFile]);
		assert_eq!(kinds("! != !=="), [Exclamation, ExclamationEquals, ExclamationEquals, Equals, EndOfFile]);
		assert_eq!(kinds("[]().,*/%~"), [
			OpenBracket,
			CloseBracket,
			OpenParenthesis,
			CloseParenthesis,
			Dot,
			Comma,
			Star,
			Slash,
			Percent,
			Tilde,
			EndOfFile
		]);
	}

	#[test]
	fn scan_numbers() {
		scan("0", true);
		scan("42", true);
		scan("0b101", true);
		scan("0o777", true);
		scan("0x1F", true);
		scan("0xdeadBEEF", true);

		assert_eq!(lex_error("0b"), LexErrorType::PrefixWithoutNumber(Radix::Binary));
		assert_eq!(lex_error("0o8"), LexErrorType::PrefixWithoutNumber(Radix::Octal));
		assert_eq!(lex_error("0x"), LexErrorType::PrefixWithoutNumber(Radix::Hexadecimal));
		assert_eq!(lex_error("007"), LexErrorType::LeadingZero);
		assert_eq!(lex_error("01"), LexErrorType::LeadingZero);
	}

	#[test]
	fn scan_number_boundaries() {
		// Digits outside the base end the literal.
		let tokens = tokenize("0b12").unwrap();
		assert_eq!(tokens[0].lexeme, "0b1");
		assert_eq!(tokens[1].lexeme, "2");

		let tokens = tokenize("0abc 12x").unwrap();
		let lexemes: Vec<_> = tokens.iter().map(|token| token.lexeme).collect();
		assert_eq!(lexemes, ["0", "abc", "12", "x", ""]);
		assert_eq!(tokens[1].kind, Identifier);
	}

	#[test]
	fn scan_strings() {
		scan(r#""""#, true);
		scan(r#""hello world""#, true);
		assert_eq!(lex_error(r#""abc"#), LexErrorType::UnterminatedString { at_newline: false });
		assert_eq!(lex_error("\"abc\ndef\""), LexErrorType::UnterminatedString { at_newline: true });

		let tokens = tokenize(r#""abc""#).unwrap();
		assert_eq!(tokens[0].kind, StringLiteral);
		assert_eq!(tokens[0].lexeme, "abc");
		assert_eq!(tokens[0].span, Span::new(0, 5));
	}

	#[test]
	fn scan_strings_without_escapes() {
		// A backslash is an ordinary character and the next quote closes.
		let tokens = tokenize(r#""a\" b"#).unwrap();
		assert_eq!(tokens[0].lexeme, r"a\");
		assert_eq!(tokens[1].kind, Identifier);
		assert_eq!(tokens[1].lexeme, "b");
	}

	#[test]
	fn scan_raw_bytes() {
		// Bytes that are not UTF-8 are kept inside a string literal.
		let tokens = tokenize(b"\"caf\xe9\" + 1").unwrap();
		assert_eq!(tokens[0].kind, StringLiteral);
		assert_eq!(tokens[0].lexeme.as_bytes(), b"caf\xe9");
		assert_eq!(tokens[0].lexeme.to_str(), None);
		assert_eq!(tokens[0].lexeme.to_string(), r"caf\xE9");
		assert_eq!(tokens[0].span, Span::new(0, 6));
		assert_eq!(tokens[1].kind, Plus);

		// Anywhere else they cannot start a token.
		match tokenize(b"a \xe9") {
			Err(TokenizerError::Lexical(e)) => {
				assert_eq!(e.offset(), 2);
				assert_eq!(e.r#type(), &LexErrorType::UnrecognizedCharacter(0xE9));
				assert_eq!(e.to_string(), r"offset 2: Unrecognized token starting with '\xe9'");
			}
			other => panic!("unexpected {other:?}"),
		}
		assert_eq!(lex_error("é"), LexErrorType::UnrecognizedCharacter(0xC3));
	}

	#[test]
	fn scan_identifiers() {
		for input in ["x", "_name", "myVariable123", "snake_case", "CamelCase", "uint256", "while"] {
			let tokens = tokenize(input).unwrap();
			assert_eq!(tokens[0].kind, Identifier);
			assert_eq!(tokens[0].lexeme, input);
		}
	}

	#[test]
	fn scan_comments() {
		scan("// single line comment", true);
		scan("// comment with ()[]{}", true);
		scan("/* block comment */", true);
		scan("/* multi\nline\ncomment */", true);
		scan("/** nested ** comment **/", true);
		scan("/** multi ** comment ***********/", true);
		assert_eq!(lex_error("/* unterminated"), LexErrorType::UnterminatedComment);
		assert_eq!(lex_error("1 /* c"), LexErrorType::UnterminatedComment);
		assert_eq!(lex_error("/*/"), LexErrorType::UnterminatedComment);

		assert_eq!(kinds("1 /* c */ + // tail\n /* a */ /* b */ 2"), [
			NumericLiteral,
			Plus,
			NumericLiteral,
			EndOfFile
		]);
		assert_eq!(kinds("a / b"), [Identifier, Slash, Identifier, EndOfFile]);
	}

	#[test]
	fn scan_whitespace() {
		for input in [" ", "\t", "\r", "\n", "\x0b", "\x0c", "  \t\r\n  "] {
			assert_eq!(kinds(input), [EndOfFile]);
		}
	}

	#[test]
	fn scan_spans() {
		let tokens = tokenize("ab  >>>\n\"s\" 0x1").unwrap();
		let spans: Vec<_> = tokens.iter().map(|token| (token.span.from, token.span.to)).collect();
		assert_eq!(spans, [(0, 2), (4, 7), (8, 11), (12, 15), (15, 15)]);
	}

	#[test]
	fn error_offsets() {
		match tokenize("a + @") {
			Err(TokenizerError::Lexical(e)) => {
				assert_eq!(e.offset(), 4);
				assert_eq!(e.r#type(), &LexErrorType::UnrecognizedCharacter(b'@'));
			}
			other => panic!("unexpected {other:?}"),
		}
		match tokenize("x /* open") {
			Err(TokenizerError::Lexical(e)) => assert_eq!(e.offset(), 2),
			other => panic!("unexpected {other:?}"),
		}
	}

	#[test]
	fn lookahead_window() {
		let mut tokenizer = Tokenizer::<'_, 3>::new("a . b").unwrap();
		assert_eq!(tokenizer.peek().unwrap().lexeme, "a");
		assert_eq!(tokenizer.lookahead(1).unwrap().kind, Dot);
		assert_eq!(tokenizer.lookahead(2).unwrap().lexeme, "b");
		assert_eq!(tokenizer.lookahead(3), Err(BufferError::OutOfRange { index: 3, size: 3 }));

		assert_eq!(tokenizer.skip().unwrap().lexeme, "a");
		assert_eq!(tokenizer.peek().unwrap().kind, Dot);
		assert_eq!(tokenizer.lookahead(2).unwrap().kind, EndOfFile);

		tokenizer.skip().unwrap();
		tokenizer.skip().unwrap();
		// End-of-file repeats once the source is exhausted.
		for _ in 0..3 {
			assert_eq!(tokenizer.peek().unwrap().kind, EndOfFile);
			assert_eq!(tokenizer.peek().unwrap().span, Span::new(5, 5));
			tokenizer.skip().unwrap();
		}
	}

	#[test]
	fn lookahead_reports_errors_lazily() {
		// The window holds two tokens, the bad character is the fourth.
		let mut tokenizer = Tokenizer::<'_, 2>::new("a b c $").unwrap();
		tokenizer.skip().unwrap();
		assert!(matches!(tokenizer.skip(), Err(TokenizerError::Lexical(_))));
		// The window survives the failed refill.
		assert_eq!(tokenizer.peek().unwrap().lexeme, "b");
		assert_eq!(tokenizer.lookahead(1).unwrap().lexeme, "c");
	}
}
