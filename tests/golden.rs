use std::{fs, path::PathBuf};

use exprfront::{Frontend, FrontendError, LexErrorType, ParserError, SyntaxErrorType, TokenizerError};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name) }

fn expected(name: &str) -> String { fs::read_to_string(fixture(name)).unwrap() }

fn dump_tree(name: &str) -> String {
	let mut out = Vec::new();
	Frontend.dump_tree_file(fixture(&format!("{name}.expr")), &mut out).unwrap();
	String::from_utf8(out).unwrap()
}

#[test]
fn tree_dumps() {
	for name in ["postfix", "precedence", "unary"] {
		assert_eq!(dump_tree(name), expected(&format!("{name}.dump")), "{name}");
	}
}

#[test]
fn token_dump() {
	let mut out = Vec::new();
	Frontend.dump_tokens_file(fixture("operators.expr"), &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), expected("operators.tokens"));
}

#[test]
fn token_dump_keeps_raw_bytes() {
	let mut out = Vec::new();
	Frontend.dump_tokens_file(fixture("latin1.expr"), &mut out).unwrap();
	assert_eq!(out, fs::read(fixture("latin1.tokens")).unwrap());
}

#[test]
fn stray_byte_is_a_lexical_error() {
	let error = Frontend.dump_tokens_file(fixture("stray_byte.expr"), &mut Vec::new()).unwrap_err();
	let FrontendError::Tokenizer(TokenizerError::Lexical(lexical)) = &error else {
		panic!("expected a lexical error, got {error:?}");
	};
	assert_eq!(lexical.offset(), 3);
	assert_eq!(lexical.r#type(), &LexErrorType::UnrecognizedCharacter(0xE9));
}

#[test]
fn unclosed_call_reports_end_of_file() {
	let mut out = Vec::new();
	let error = Frontend.dump_tree_file(fixture("unclosed.expr"), &mut out).unwrap_err();
	let FrontendError::Parser(ParserError::Syntax(syntax)) = &error else {
		panic!("expected a syntax error, got {error:?}");
	};
	assert_eq!(syntax.r#type(), SyntaxErrorType::ExpectedTerminal);
	assert_eq!(error.to_string(), "Expected terminal, but got '' (EndOfFile) from 5 to 5.");
	assert!(out.is_empty());
}

#[test]
fn missing_file() {
	let mut out = Vec::new();
	let error = Frontend.dump_tokens_file(fixture("missing.expr"), &mut out).unwrap_err();
	assert!(matches!(error, FrontendError::Internal(_)));
	assert!(error.to_string().starts_with("Failed open source file"));
}
