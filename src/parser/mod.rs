//! The `Tokenizer` uses the `lexical grammar`: its alphabet is characters and
//! its strings are tokens. The `Parser` uses the `syntactic grammar`: its
//! alphabet is tokens and its strings are expressions.
//!
//! Every binary level parses one operand at the next level up, then folds
//! operators of its own level to the left for as long as they keep coming.
//! Prefix operators recurse into their own level, which makes them right
//! associative. Postfix accessors are applied in a loop, which makes them left
//! associative.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equality|== !=|Left
//! Relational|< <= > >=|Left
//! Shift|<< >> >>>|Left
//! Additive|+ -|Left
//! Multiplicative|* / %|Left
//! Prefix|++ -- + - ! ~|Right
//! Postfix|. () [] ++ --|Left
//!
//! Recursion is bounded: nested expressions and stacked prefix operators may
//! go [`MAX_NESTING`] levels deep, and no tree grows taller than
//! [`MAX_HEIGHT`]. Past either limit parsing fails with
//! [`SyntaxErrorType::TooDeep`] instead of exhausting the stack.
//!
//! Expression grammar:
//!
//! ``` EBNF
//! expression     → equality ;
//! equality       → relational ( ( "==" | "!=" ) relational )* ;
//! relational     → shift ( ( "<" | "<=" | ">" | ">=" ) shift )* ;
//! shift          → additive ( ( "<<" | ">>" | ">>>" ) additive )* ;
//! additive       → multiplicative ( ( "+" | "-" ) multiplicative )* ;
//! multiplicative → prefix ( ( "*" | "/" | "%" ) prefix )* ;
//! prefix         → ( "++" | "--" | "+" | "-" | "!" | "~" ) prefix | postfix ;
//! postfix        → terminal ( "." IDENTIFIER | "(" list ")" | "[" expression "]" | "++" | "--" )* ;
//! terminal       → IDENTIFIER | NUMBER | STRING | "[" list "]" ;
//! list           → ( expression ( "," expression )* )? ;
//! ```

mod expression;

use TokenKind::*;
pub use expression::*;
use tracing::trace;

use crate::{
	error::{ParserError, SyntaxError, SyntaxErrorType},
	tokenizer::{Span, Token, TokenKind, Tokenizer},
};

/// Lookahead window the parser asks of its tokenizer.
pub const PARSER_LOOKAHEAD: usize = 2;

/// Deepest the parser recurses, counting nested expressions and stacked prefix operators.
pub const MAX_NESTING: usize = 128;

/// Tallest tree the parser builds.
pub const MAX_HEIGHT: usize = 1024;

/// Builds one expression tree from a token stream.
pub struct Parser<'a, const N: usize = PARSER_LOOKAHEAD> {
	tokenizer: Tokenizer<'a, N>,
	/// Current recursion depth
	depth:     usize,
}

impl<'a> Parser<'a> {
	pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Result<Self, ParserError> {
		Ok(Self::from_tokenizer(Tokenizer::new(source)?))
	}
}

impl<'a, const N: usize> Parser<'a, N> {
	pub fn from_tokenizer(tokenizer: Tokenizer<'a, N>) -> Self { Self { tokenizer, depth: 0 } }

	/// Parse one expression that must span the whole input.
	pub fn parse(&mut self) -> Result<Expression<'a>, ParserError> {
		let expression = self.parse_expression()?;
		let token = self.peek()?;
		if token.kind != EndOfFile {
			return Err(SyntaxError::new(SyntaxErrorType::ExpectedEndOfFile, token).into());
		}
		Ok(expression)
	}

	/// Parse one expression and stop at the first token that cannot extend it.
	pub fn parse_expression(&mut self) -> Result<Expression<'a>, ParserError> { self.nested(Self::equality) }

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.relational()?;
		loop {
			let token = *self.peek()?;
			let operator = match token.kind {
				DoubleEquals => BinaryOperator::Equals,
				ExclamationEquals => BinaryOperator::NotEquals,
				_ => return Ok(expression),
			};
			self.advance()?;
			expression = Self::grown(Expression::binary(operator, expression, self.relational()?), &token)?;
		}
	}

	/// Parse relational expressions.
	fn relational(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.shift()?;
		loop {
			let token = *self.peek()?;
			let operator = match token.kind {
				LessThan => BinaryOperator::LessThan,
				LessEquals => BinaryOperator::LessEquals,
				GreaterThan => BinaryOperator::GreaterThan,
				GreaterEquals => BinaryOperator::GreaterEquals,
				_ => return Ok(expression),
			};
			self.advance()?;
			expression = Self::grown(Expression::binary(operator, expression, self.shift()?), &token)?;
		}
	}

	/// Parse shift expressions.
	fn shift(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.additive()?;
		loop {
			let token = *self.peek()?;
			let operator = match token.kind {
				DoubleLessThan => BinaryOperator::ShiftLeft,
				DoubleGreaterThan => BinaryOperator::ShiftRight,
				TripleGreaterThan => BinaryOperator::ShiftRightLogic,
				_ => return Ok(expression),
			};
			self.advance()?;
			expression = Self::grown(Expression::binary(operator, expression, self.additive()?), &token)?;
		}
	}

	/// Parse additive expressions.
	fn additive(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.multiplicative()?;
		loop {
			let token = *self.peek()?;
			let operator = match token.kind {
				Plus => BinaryOperator::Addition,
				Minus => BinaryOperator::Subtraction,
				_ => return Ok(expression),
			};
			self.advance()?;
			expression = Self::grown(Expression::binary(operator, expression, self.multiplicative()?), &token)?;
		}
	}

	/// Parse multiplicative expressions.
	fn multiplicative(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.prefix()?;
		loop {
			let token = *self.peek()?;
			let operator = match token.kind {
				Star => BinaryOperator::Multiplication,
				Slash => BinaryOperator::Division,
				Percent => BinaryOperator::Remainder,
				_ => return Ok(expression),
			};
			self.advance()?;
			expression = Self::grown(Expression::binary(operator, expression, self.prefix()?), &token)?;
		}
	}

	/// Parse prefix expressions.
	fn prefix(&mut self) -> Result<Expression<'a>, ParserError> {
		let token = *self.peek()?;
		let operator = match token.kind {
			Increment => PrefixOperator::PreIncrement,
			Decrement => PrefixOperator::PreDecrement,
			Plus => PrefixOperator::Positive,
			Minus => PrefixOperator::Negative,
			Exclamation => PrefixOperator::LogicalNegation,
			Tilde => PrefixOperator::BitwiseNot,
			_ => return self.postfix(),
		};
		self.advance()?;
		let operand = self.nested(Self::prefix)?;
		Self::grown(Expression::prefix(operator, token.span.from, operand), &token)
	}

	/// Parse a terminal followed by any number of accessors.
	fn postfix(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.terminal()?;
		loop {
			let token = *self.peek()?;
			let accessed = match token.kind {
				Dot => {
					self.advance()?; // consume '.'
					let member = self.expect(Identifier, SyntaxErrorType::ExpectedIdentifier)?;
					Expression::member(expression, MemberName { name: member.lexeme, span: member.span })
				}
				OpenParenthesis => {
					self.advance()?; // consume '('
					let arguments = self.list(CloseParenthesis)?;
					let close = self.expect(CloseParenthesis, SyntaxErrorType::ExpectedCloseParenthesis)?;
					Expression::call(expression, arguments, close.span.to)
				}
				OpenBracket => {
					self.advance()?; // consume '['
					let subscript = self.parse_expression()?;
					let close = self.expect(CloseBracket, SyntaxErrorType::ExpectedCloseBracket)?;
					Expression::subscript(expression, subscript, close.span.to)
				}
				Increment => {
					self.advance()?;
					Expression::postfix(PostfixOperator::PostIncrement, expression, token.span.to)
				}
				Decrement => {
					self.advance()?;
					Expression::postfix(PostfixOperator::PostDecrement, expression, token.span.to)
				}
				_ => return Ok(expression),
			};
			expression = Self::grown(accessed, &token)?;
			trace!(node = expression.name(), from = expression.span.from, to = expression.span.to, "postfix");
		}
	}

	/// Parse terminal expressions.
	fn terminal(&mut self) -> Result<Expression<'a>, ParserError> {
		let token = *self.peek()?;
		let expression = match token.kind {
			Identifier => Expression::identifier(&token),
			NumericLiteral => Expression::numeric_literal(&token),
			StringLiteral => Expression::string_literal(&token),
			OpenBracket => return self.array(),
			_ => return Err(SyntaxError::new(SyntaxErrorType::ExpectedTerminal, &token).into()),
		};
		trace!(node = expression.name(), lexeme = %token.lexeme, "terminal");
		self.advance()?;
		Ok(expression)
	}

	/// Parse an array literal, the current token being its `[`.
	fn array(&mut self) -> Result<Expression<'a>, ParserError> {
		let open = self.advance()?;
		let elements = self.list(CloseBracket)?;
		let close = self.expect(CloseBracket, SyntaxErrorType::ExpectedCloseBracket)?;
		Self::grown(Expression::array(elements, Span::new(open.span.from, close.span.to)), &open)
	}

	/// Parse comma separated expressions up to, not including, `delimiter`.
	///
	/// Checking that the delimiter is really there is left to the caller.
	fn list(&mut self, delimiter: TokenKind) -> Result<Vec<Expression<'a>>, ParserError> {
		let mut list = Vec::new();
		if self.peek()?.kind == delimiter {
			return Ok(list);
		}
		list.push(self.parse_expression()?);
		while self.peek()?.kind == Comma {
			self.advance()?;
			list.push(self.parse_expression()?);
		}
		Ok(list)
	}

	/// Consume the current token if it is a `kind`, else fail with `r#type`.
	fn expect(&mut self, kind: TokenKind, r#type: SyntaxErrorType) -> Result<Token<'a>, ParserError> {
		let token = self.peek()?;
		if token.kind != kind {
			return Err(SyntaxError::new(r#type, token).into());
		}
		self.advance()
	}

	/// Run `parse` one recursion level deeper, failing past [`MAX_NESTING`].
	fn nested(
		&mut self,
		parse: fn(&mut Self) -> Result<Expression<'a>, ParserError>,
	) -> Result<Expression<'a>, ParserError> {
		if self.depth >= MAX_NESTING {
			return Err(SyntaxError::new(SyntaxErrorType::TooDeep(MAX_NESTING), self.peek()?).into());
		}
		self.depth += 1;
		let expression = parse(self);
		self.depth -= 1;
		expression
	}

	/// Keep `expression`, built at `token`, unless it is taller than [`MAX_HEIGHT`].
	fn grown(expression: Expression<'a>, token: &Token<'a>) -> Result<Expression<'a>, ParserError> {
		if expression.height() > MAX_HEIGHT {
			return Err(SyntaxError::new(SyntaxErrorType::TooDeep(MAX_HEIGHT), token).into());
		}
		Ok(expression)
	}

	/// Advance to the next token.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> { Ok(self.tokenizer.skip()?) }

	/// Peek at the current token.
	fn peek(&self) -> Result<&Token<'a>, ParserError> { Ok(self.tokenizer.peek()?) }
}

/// Parse the whole of `source` as one expression.
pub fn parse<S: AsRef<[u8]> + ?Sized>(source: &S) -> Result<Expression<'_>, ParserError> {
	Parser::new(source)?.parse()
}
