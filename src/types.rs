//! Static types an expression can have.
//!
//! Integers come in every width from 8 to 256 bits in steps of 8, signed
//! (`int24`) or unsigned (`uint24`). Arrays nest: `uint8[][]` is an array of
//! arrays of bytes. Nothing in the parser assigns these yet; they are the
//! vocabulary a later checking pass works in.

use std::{fmt::Display, str::FromStr};

/// Narrowest and widest integer widths, in bits.
pub const MIN_INTEGER_BITS: u16 = 8;
pub const MAX_INTEGER_BITS: u16 = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionType {
	Bool,
	String,
	Uint(u16),
	Int(u16),
	/// Element type of the array.
	Array(Box<ExpressionType>),
}

impl ExpressionType {
	pub fn array_of(element: ExpressionType) -> Self { ExpressionType::Array(Box::new(element)) }

	pub fn is_integer(&self) -> bool { matches!(self, ExpressionType::Uint(_) | ExpressionType::Int(_)) }

	/// Width in bits of integer types.
	pub fn bits(&self) -> Option<u16> {
		match self {
			ExpressionType::Uint(bits) | ExpressionType::Int(bits) => Some(*bits),
			_ => None,
		}
	}

	pub fn element(&self) -> Option<&ExpressionType> {
		match self {
			ExpressionType::Array(element) => Some(element),
			_ => None,
		}
	}

	fn integer_bits(digits: &str) -> Result<u16, TypeNameError> {
		let invalid = || TypeNameError::InvalidWidth(digits.to_string());
		// Digits only, and no leading zero so every width has one spelling.
		if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
			return Err(invalid());
		}
		let bits: u16 = digits.parse().map_err(|_| invalid())?;
		if bits % 8 != 0 || !(MIN_INTEGER_BITS..=MAX_INTEGER_BITS).contains(&bits) {
			return Err(invalid());
		}
		Ok(bits)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeNameError {
	#[error("Unknown type '{0}'")]
	Unknown(String),
	#[error("Integer width '{0}' is not a multiple of 8 between 8 and 256")]
	InvalidWidth(String),
}

impl FromStr for ExpressionType {
	type Err = TypeNameError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		if let Some(element) = name.strip_suffix("[]") {
			return Ok(ExpressionType::array_of(element.parse()?));
		}
		match name {
			"bool" => Ok(ExpressionType::Bool),
			"string" => Ok(ExpressionType::String),
			_ => {
				if let Some(digits) = name.strip_prefix("uint") {
					Ok(ExpressionType::Uint(Self::integer_bits(digits)?))
				} else if let Some(digits) = name.strip_prefix("int") {
					Ok(ExpressionType::Int(Self::integer_bits(digits)?))
				} else {
					Err(TypeNameError::Unknown(name.to_string()))
				}
			}
		}
	}
}

impl Display for ExpressionType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ExpressionType::Bool => write!(f, "bool"),
			ExpressionType::String => write!(f, "string"),
			ExpressionType::Uint(bits) => write!(f, "uint{bits}"),
			ExpressionType::Int(bits) => write!(f, "int{bits}"),
			ExpressionType::Array(element) => write!(f, "{element}[]"),
		}
	}
}
