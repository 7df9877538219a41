//! CLI support for ketupa-predicates
//!
//! Provides programmatic access to the `ketupa` command line so other tools
//! can run checks and analyses without spawning a process.

mod bindings;
mod check;
mod docs;

pub use bindings::{bindings_from_json, build_bindings, parse_variable};
pub use check::{execute_analyze, execute_check, CheckOptions, CheckReport, CheckResult};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};

use std::io;

use crate::PredicateError;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Predicate could not be prepared
    #[error("Predicate error: {0}")]
    Predicate(#[from] PredicateError),

    /// JSON bindings could not be parsed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// `--var` argument without `NAME=VALUE` shape
    #[error("Invalid variable '{0}': expected NAME=VALUE")]
    InvalidVariable(String),

    /// Same variable bound more than once
    #[error(
        "Variable is defined twice: {0}. Unable to continue, please remove duplicate definition."
    )]
    DuplicateVariable(String),

    /// JSON bindings that are not an object
    #[error("Bindings must be a JSON object of name/value pairs")]
    BindingsNotObject,

    /// No expression given on the command line or stdin
    #[error("Expression not entered.")]
    NoExpression,

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'ketupa docs' to see available categories.")]
    UnknownCategory(String),
}
