/// Half-open `[from, to)` byte range into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
	pub from: usize,
	pub to:   usize,
}

impl Span {
	pub fn new(from: usize, to: usize) -> Self {
		debug_assert!(to >= from, "span ends before it starts: {from}..{to}");
		Self { from, to }
	}
}

impl std::fmt::Display for Span {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "from {} to {}", self.from, self.to)
	}
}

/// Source bytes a token was scanned from.
///
/// Only string literal contents can hold bytes that are not UTF-8. `Display`
/// writes those as `\xNN` escapes, the raw bytes stay in [`Lexeme::as_bytes`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lexeme<'a>(&'a [u8]);

impl<'a> Lexeme<'a> {
	pub fn new(bytes: &'a [u8]) -> Self { Self(bytes) }

	pub fn as_bytes(&self) -> &'a [u8] { self.0 }

	/// The lexeme as text, if it is valid UTF-8.
	pub fn to_str(&self) -> Option<&'a str> { std::str::from_utf8(self.0).ok() }
}

impl<'a> From<&'a str> for Lexeme<'a> {
	fn from(text: &'a str) -> Self { Self(text.as_bytes()) }
}

impl PartialEq<&str> for Lexeme<'_> {
	fn eq(&self, other: &&str) -> bool { self.0 == other.as_bytes() }
}

impl std::fmt::Display for Lexeme<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for chunk in self.0.utf8_chunks() {
			f.write_str(chunk.valid())?;
			for byte in chunk.invalid() {
				write!(f, "\\x{byte:02X}")?;
			}
		}
		Ok(())
	}
}

impl std::fmt::Debug for Lexeme<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "\"{self}\"") }
}

/// A token produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	pub kind:   TokenKind,
	/// Source bytes, verbatim. String literals exclude their quotes.
	pub lexeme: Lexeme<'a>,
	pub span:   Span,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind, lexeme: impl Into<Lexeme<'a>>, span: Span) -> Self {
		Self { kind, lexeme: lexeme.into(), span }
	}
}

/// Every token category. The names are stable and printed by the token dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	/// Zero-width marker after the last character.
	EndOfFile,
	/// `[A-Za-z_][A-Za-z0-9_]*`
	Identifier,
	/// Decimal, `0b`, `0o` or `0x` literal, unconverted.
	NumericLiteral,
	/// `"..."` without escapes.
	StringLiteral,
	/// `[`
	OpenBracket,
	/// `]`
	CloseBracket,
	/// `(`
	OpenParenthesis,
	/// `)`
	CloseParenthesis,
	/// `.`
	Dot,
	/// `,`
	Comma,
	/// `+`
	Plus,
	/// `-`
	Minus,
	/// `*`
	Star,
	/// `/`
	Slash,
	/// `%`
	Percent,
	/// `++`
	Increment,
	/// `--`
	Decrement,
	/// `!`
	Exclamation,
	/// `~`
	Tilde,
	/// `<`
	LessThan,
	/// `<=`
	LessEquals,
	/// `>`
	GreaterThan,
	/// `>=`
	GreaterEquals,
	/// `<<`
	DoubleLessThan,
	/// `>>`
	DoubleGreaterThan,
	/// `>>>`
	TripleGreaterThan,
	/// `=`
	Equals,
	/// `==`
	DoubleEquals,
	/// `!=`
	ExclamationEquals,
}

impl TokenKind {
	pub fn name(self) -> &'static str {
		use TokenKind::*;
		match self {
			EndOfFile => "EndOfFile",
			Identifier => "Identifier",
			NumericLiteral => "NumericLiteral",
			StringLiteral => "StringLiteral",
			OpenBracket => "OpenBracket",
			CloseBracket => "CloseBracket",
			OpenParenthesis => "OpenParenthesis",
			CloseParenthesis => "CloseParenthesis",
			Dot => "Dot",
			Comma => "Comma",
			Plus => "Plus",
			Minus => "Minus",
			Star => "Star",
			Slash => "Slash",
			Percent => "Percent",
			Increment => "Increment",
			Decrement => "Decrement",
			Exclamation => "Exclamation",
			Tilde => "Tilde",
			LessThan => "LessThan",
			LessEquals => "LessEquals",
			GreaterThan => "GreaterThan",
			GreaterEquals => "GreaterEquals",
			DoubleLessThan => "DoubleLessThan",
			DoubleGreaterThan => "DoubleGreaterThan",
			TripleGreaterThan => "TripleGreaterThan",
			Equals => "Equals",
			DoubleEquals => "DoubleEquals",
			ExclamationEquals => "ExclamationEquals",
		}
	}
}

impl std::fmt::Display for TokenKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

/// Base selected by a numeric literal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
	Binary,
	Octal,
	Hexadecimal,
}

impl Radix {
	/// The letter following `0`, if it selects a base.
	pub fn from_prefix(c: u8) -> Option<Self> {
		match c {
			b'b' => Some(Radix::Binary),
			b'o' => Some(Radix::Octal),
			b'x' => Some(Radix::Hexadecimal),
			_ => None,
		}
	}

	pub fn is_digit(self, c: u8) -> bool {
		match self {
			Radix::Binary => matches!(c, b'0' | b'1'),
			Radix::Octal => matches!(c, b'0'..=b'7'),
			Radix::Hexadecimal => c.is_ascii_hexdigit(),
		}
	}
}

impl std::fmt::Display for Radix {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Radix::Binary => write!(f, "Binary"),
			Radix::Octal => write!(f, "Octal"),
			Radix::Hexadecimal => write!(f, "Hexadecimal"),
		}
	}
}
