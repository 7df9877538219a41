//! # Ketupa Predicates - Syntax Building Blocks
//!
//! This module holds the closed vocabularies of the predicate language: the
//! structural character classes recognised by the tokenizer and the table of
//! operations an expression may name.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Structural character classes (`,` `{` `}` `$` `[` `]` `\`)
//! - **[operators]** - Operations resolved from an operation name and arity
//!
//! ## Quick Start
//!
//! ```text
//! OR, {=, $status, active}, {>=, $retries, 3}
//! ```
//!
//! The first comma-separated piece is the operation, every following piece is
//! an argument. An argument may be a literal, a variable reference
//! (`$name[0][1]`) or a nested expression wrapped in braces.
//!
//! ## Escaping
//!
//! A backslash in front of any structural character keeps that character out
//! of argument splitting and bracket counting:
//!
//! ```text
//! =, $path, C:\\temp\, with comma
//! ```
pub mod tokens;
pub mod operators;

pub use tokens::Token;
pub use operators::Operator;
