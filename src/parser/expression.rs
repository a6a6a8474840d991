//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `a.b[0](1, 2)`
//! as nested nodes. Every node owns its children and remembers the source span
//! it was parsed from. Leaves keep their lexeme verbatim.

use std::io::{self, Write};

use ExpressionKind::*;

use crate::tokenizer::{Lexeme, Span, Token};

/// A node of the tree and the bytes it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
	pub kind: ExpressionKind<'a>,
	pub span: Span,
	/// Nodes on the longest path down to a leaf, this one included
	height:   usize,
}

/// Node payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionKind<'a> {
	Identifier(Lexeme<'a>),
	NumericLiteral(Lexeme<'a>),
	/// Content without the quotes.
	StringLiteral(Lexeme<'a>),
	ArrayLiteral(Vec<Expression<'a>>),
	Binary { operator: BinaryOperator, lhs: Box<Expression<'a>>, rhs: Box<Expression<'a>> },
	Prefix { operator: PrefixOperator, operand: Box<Expression<'a>> },
	Postfix { operator: PostfixOperator, operand: Box<Expression<'a>> },
	MemberAccess { argument: Box<Expression<'a>>, member: MemberName<'a> },
	FunctionCall { function: Box<Expression<'a>>, arguments: Vec<Expression<'a>> },
	SubscriptAccess { argument: Box<Expression<'a>>, subscript: Box<Expression<'a>> },
}

/// The member side of `a.b`, which is never a general expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberName<'a> {
	pub name: Lexeme<'a>,
	pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
	Addition,
	Subtraction,
	Multiplication,
	Division,
	Remainder,
	ShiftLeft,
	ShiftRight,
	/// `>>>`, shifts in zeros.
	ShiftRightLogic,
	LessThan,
	LessEquals,
	GreaterThan,
	GreaterEquals,
	Equals,
	NotEquals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
	PreIncrement,
	PreDecrement,
	/// Unary `+`.
	Positive,
	/// Unary `-`.
	Negative,
	/// `!`
	LogicalNegation,
	/// `~`
	BitwiseNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOperator {
	PostIncrement,
	PostDecrement,
}

impl BinaryOperator {
	pub fn name(self) -> &'static str {
		use BinaryOperator::*;
		match self {
			Addition => "Addition",
			Subtraction => "Subtraction",
			Multiplication => "Multiplication",
			Division => "Division",
			Remainder => "Remainder",
			ShiftLeft => "ShiftLeft",
			ShiftRight => "ShiftRight",
			ShiftRightLogic => "ShiftRightLogic",
			LessThan => "LessThan",
			LessEquals => "LessEquals",
			GreaterThan => "GreaterThan",
			GreaterEquals => "GreaterEquals",
			Equals => "Equals",
			NotEquals => "NotEquals",
		}
	}

	pub fn symbol(self) -> &'static str {
		use BinaryOperator::*;
		match self {
			Addition => "+",
			Subtraction => "-",
			Multiplication => "*",
			Division => "/",
			Remainder => "%",
			ShiftLeft => "<<",
			ShiftRight => ">>",
			ShiftRightLogic => ">>>",
			LessThan => "<",
			LessEquals => "<=",
			GreaterThan => ">",
			GreaterEquals => ">=",
			Equals => "==",
			NotEquals => "!=",
		}
	}
}

impl PrefixOperator {
	pub fn name(self) -> &'static str {
		use PrefixOperator::*;
		match self {
			PreIncrement => "PreIncrement",
			PreDecrement => "PreDecrement",
			Positive => "Positive",
			Negative => "Negative",
			LogicalNegation => "LogicalNegation",
			BitwiseNot => "BitwiseNot",
		}
	}

	pub fn symbol(self) -> &'static str {
		use PrefixOperator::*;
		match self {
			PreIncrement => "pre++",
			PreDecrement => "pre--",
			Positive => "+",
			Negative => "-",
			LogicalNegation => "!",
			BitwiseNot => "~",
		}
	}
}

impl PostfixOperator {
	pub fn name(self) -> &'static str {
		match self {
			PostfixOperator::PostIncrement => "PostIncrement",
			PostfixOperator::PostDecrement => "PostDecrement",
		}
	}

	pub fn symbol(self) -> &'static str {
		match self {
			PostfixOperator::PostIncrement => "post++",
			PostfixOperator::PostDecrement => "post--",
		}
	}
}

impl<'a> Expression<'a> {
	pub fn identifier(token: &Token<'a>) -> Self { Self::leaf(Identifier(token.lexeme), token.span) }

	pub fn numeric_literal(token: &Token<'a>) -> Self { Self::leaf(NumericLiteral(token.lexeme), token.span) }

	pub fn string_literal(token: &Token<'a>) -> Self { Self::leaf(StringLiteral(token.lexeme), token.span) }

	/// `span` runs from the opening `[` through the closing `]`.
	pub fn array(elements: Vec<Self>, span: Span) -> Self {
		let height = Self::tallest(&elements) + 1;
		Self { kind: ArrayLiteral(elements), span, height }
	}

	pub fn binary(operator: BinaryOperator, lhs: Self, rhs: Self) -> Self {
		let span = Span::new(lhs.span.from, rhs.span.to);
		let height = lhs.height.max(rhs.height) + 1;
		Self { kind: Binary { operator, lhs: Box::new(lhs), rhs: Box::new(rhs) }, span, height }
	}

	/// `from` is where the operator token starts.
	pub fn prefix(operator: PrefixOperator, from: usize, operand: Self) -> Self {
		let span = Span::new(from, operand.span.to);
		let height = operand.height + 1;
		Self { kind: Prefix { operator, operand: Box::new(operand) }, span, height }
	}

	/// `to` is where the operator token ends.
	pub fn postfix(operator: PostfixOperator, operand: Self, to: usize) -> Self {
		let span = Span::new(operand.span.from, to);
		let height = operand.height + 1;
		Self { kind: Postfix { operator, operand: Box::new(operand) }, span, height }
	}

	pub fn member(argument: Self, member: MemberName<'a>) -> Self {
		let span = Span::new(argument.span.from, member.span.to);
		let height = argument.height + 1;
		Self { kind: MemberAccess { argument: Box::new(argument), member }, span, height }
	}

	/// `to` is the end of the closing `)`.
	pub fn call(function: Self, arguments: Vec<Self>, to: usize) -> Self {
		let span = Span::new(function.span.from, to);
		let height = function.height.max(Self::tallest(&arguments)) + 1;
		Self { kind: FunctionCall { function: Box::new(function), arguments }, span, height }
	}

	/// `to` is the end of the closing `]`.
	pub fn subscript(argument: Self, subscript: Self, to: usize) -> Self {
		let span = Span::new(argument.span.from, to);
		let height = argument.height.max(subscript.height) + 1;
		Self { kind: SubscriptAccess { argument: Box::new(argument), subscript: Box::new(subscript) }, span, height }
	}

	/// Nodes on the longest path from this one down to a leaf.
	pub fn height(&self) -> usize { self.height }

	fn leaf(kind: ExpressionKind<'a>, span: Span) -> Self { Self { kind, span, height: 1 } }

	fn tallest(expressions: &[Self]) -> usize { expressions.iter().map(Self::height).max().unwrap_or(0) }

	/// The node kind name printed by [`Expression::dump`].
	pub fn name(&self) -> &'static str {
		match &self.kind {
			Identifier(_) => "Identifier",
			NumericLiteral(_) => "NumericLiteral",
			StringLiteral(_) => "StringLiteral",
			ArrayLiteral(_) => "ArrayLiteral",
			Binary { operator, .. } => operator.name(),
			Prefix { operator, .. } => operator.name(),
			Postfix { operator, .. } => operator.name(),
			MemberAccess { .. } => "MemberAccess",
			FunctionCall { .. } => "FunctionCall",
			SubscriptAccess { .. } => "SubscriptAccess",
		}
	}

	/// Print the tree one node kind per line, children indented below their
	/// parent. Leaves add a `Value:` line; composite nodes label their
	/// sections.
	pub fn dump<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
		let pad = " ".repeat(indent);
		writeln!(out, "{pad}{}", self.name())?;
		match &self.kind {
			Identifier(value) | NumericLiteral(value) | StringLiteral(value) => {
				write!(out, "{pad}Value: ")?;
				out.write_all(value.as_bytes())?;
				writeln!(out)?;
			}
			ArrayLiteral(elements) => {
				writeln!(out, "{pad} [")?;
				for (i, element) in elements.iter().enumerate() {
					if i > 0 {
						writeln!(out)?;
					}
					element.dump(out, indent + 2)?;
				}
				writeln!(out, "{pad} ]")?;
			}
			Binary { lhs, rhs, .. } => {
				lhs.dump(out, indent + 1)?;
				rhs.dump(out, indent + 1)?;
			}
			Prefix { operand, .. } | Postfix { operand, .. } => operand.dump(out, indent + 1)?,
			MemberAccess { argument, member } => {
				writeln!(out, "{pad} Argument")?;
				argument.dump(out, indent + 2)?;
				member.dump(out, indent + 1)?;
			}
			FunctionCall { function, arguments } => {
				writeln!(out, "{pad} Function")?;
				function.dump(out, indent + 2)?;
				writeln!(out, "{pad} Arguments")?;
				for argument in arguments {
					argument.dump(out, indent + 2)?;
				}
			}
			SubscriptAccess { argument, subscript } => {
				writeln!(out, "{pad} Argument")?;
				argument.dump(out, indent + 2)?;
				writeln!(out, "{pad} Subscript")?;
				subscript.dump(out, indent + 2)?;
			}
		}
		Ok(())
	}
}

impl MemberName<'_> {
	fn dump<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
		let pad = " ".repeat(indent);
		writeln!(out, "{pad}Identifier")?;
		write!(out, "{pad}Value: ")?;
		out.write_all(self.name.as_bytes())?;
		writeln!(out)
	}
}

impl std::fmt::Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.kind {
			Identifier(name) => write!(f, "{name}"),
			NumericLiteral(literal) => write!(f, "{literal}"),
			StringLiteral(literal) => write!(f, "\"{literal}\""),
			ArrayLiteral(elements) => write!(f, "[{}]", join(elements)),
			Binary { operator, lhs, rhs } => write!(f, "({} {lhs} {rhs})", operator.symbol()),
			Prefix { operator, operand } => write!(f, "({} {operand})", operator.symbol()),
			Postfix { operator, operand } => write!(f, "({} {operand})", operator.symbol()),
			MemberAccess { argument, member } => write!(f, "(. {argument} {})", member.name),
			FunctionCall { function, arguments } if arguments.is_empty() => write!(f, "(call {function})"),
			FunctionCall { function, arguments } => write!(f, "(call {function} {})", join(arguments)),
			SubscriptAccess { argument, subscript } => write!(f, "([] {argument} {subscript})"),
		}
	}
}

fn join(expressions: &[Expression<'_>]) -> String {
	expressions.iter().map(|e| e.to_string()).collect::<Vec<String>>().join(" ")
}
