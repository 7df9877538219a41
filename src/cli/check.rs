//! Evaluate predicates from the command line

use tracing::debug;

use super::{build_bindings, CliError};
use crate::{
    output::{to_analysis, to_variable_listing},
    PredicateTree,
};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The predicate expression
    pub expression: String,
    /// `NAME=VALUE` text bindings
    pub variables: Vec<String>,
    /// JSON object with typed bindings
    pub input: Option<String>,
    /// Include the analysis trace in the report
    pub trace: bool,
    /// Only prepare the predicate, don't evaluate
    pub syntax_only: bool,
}

/// Outcome of a check operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// Predicate prepared without errors
    SyntaxValid,
    /// Predicate evaluated to the contained value
    Evaluated(bool),
}

/// Outcome plus the optional analysis trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub result: CheckResult,
    pub trace: Option<String>,
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckReport, CliError> {
    let tree = PredicateTree::build(&options.expression)?;
    let mut trace = options
        .trace
        .then(|| to_analysis(&options.expression, &tree));

    if options.syntax_only {
        return Ok(CheckReport {
            result: CheckResult::SyntaxValid,
            trace,
        });
    }

    let bindings = build_bindings(&options.variables, options.input.as_deref())?;
    debug!(variables = bindings.len(), "evaluating predicate");
    let result = tree.evaluate(&bindings);

    if let Some(trace) = trace.as_mut() {
        trace.push_str(&to_variable_listing(&bindings));
    }

    Ok(CheckReport {
        result: CheckResult::Evaluated(result),
        trace,
    })
}

/// Prepare a predicate and return its analysis
pub fn execute_analyze(expression: &str) -> Result<String, CliError> {
    let tree = PredicateTree::build(expression)?;
    Ok(to_analysis(expression, &tree))
}
