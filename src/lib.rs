//! # dragon
//!
//! dragon is an interpreter for a small block-structured imperative language
//! written in Rust. A program is a single block of `int` and `boolean`
//! declarations (scalars and fixed-size arrays) followed by assignments,
//! conditionals, `while` and `do`-`while` loops, `break` and `print`.
//!
//! Source text is scanned, parsed into an abstract syntax tree and executed
//! directly by walking the tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    ast::Program,
    error::{Error, ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the node types of the abstract syntax tree built by the
/// parser and walked by the evaluator. The set of node kinds is closed, each
/// node owns its children, and every node carries its source position.
///
/// # Responsibilities
/// - Defines program, block, declaration, statement and expression nodes.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or executing a program, together with their categories. Every error is
/// fatal and carries the source position it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line and column numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation and the value
/// model.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses source text into a program without executing it.
///
/// # Errors
/// Returns the first lexical or syntax error in the source.
///
/// # Examples
/// ```
/// assert!(dragon::parse("{ int x; x = 1; }").is_ok());
/// assert!(dragon::parse("{ int x x; }").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse()
}

/// Parses and executes a program, writing `print` output to `out`.
///
/// The whole source is parsed before anything runs, so a syntax error produces
/// no output. A runtime error stops execution immediately; lines printed
/// before it remain in `out`. The sink is flushed once execution ends, and a
/// failed flush is reported as an output error at the program's opening brace.
///
/// # Errors
/// Returns an error if parsing or execution fails.
///
/// # Examples
/// ```
/// use dragon::{error::ErrorKind, run};
///
/// let mut out = Vec::new();
/// run("{ int i; i = 0; while (i < 3) { print(i); i = i + 1; } }", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n2\n");
///
/// // Reading a variable before assigning it is an error.
/// let err = run("{ int x; print(x); }", &mut Vec::new()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UninitializedAccess);
/// ```
pub fn run<W: Write>(source: &str, out: W) -> Result<(), Error> {
    debug!(bytes = source.len(), "parsing program");
    let program = parse(source)?;

    debug!("executing program");
    let mut context = Context::new(out);
    let result = context.interpret(&program);
    debug!(variables = context.symbols().len(),
           ok = result.is_ok(),
           "execution finished");

    let flushed = context.into_output()
                         .flush()
                         .map_err(|e| RuntimeError::Output { details:  e.to_string(),
                                                             position: program.position, });

    result.and(flushed).map_err(Error::from)
}
