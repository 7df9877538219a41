//! Human-readable analysis of prepared predicates.
//!
//! The printer walks a [`PredicateTree`] and reports the operation, each
//! argument and what it resolved to at preparation time. Nested expressions
//! are printed in place, one indentation level deeper.
//!
//! # Examples
//!
//! ```
//! use ketupa_predicates::PredicateTree;
//! use ketupa_predicates::output::to_analysis;
//!
//! let tree: PredicateTree = "=, $var1[0], 42".parse().unwrap();
//! let text = to_analysis("=, $var1[0], 42", &tree);
//! assert!(text.contains("Operation: [=]"));
//! assert!(text.contains("Argument 1 is a variable (name=var1, indices=0)."));
//! assert!(text.contains("Argument 2: [42]"));
//! ```

use std::fmt::Write;

use crate::{
    expression::{Bindings, ExpressionNode, PredicateElement, PredicateTree},
    value::Value,
};

/// Pending output of the tree walk.
enum Step<'a> {
    Header {
        source: &'a str,
        node: ExpressionNode<'a>,
        level: usize,
    },
    Argument {
        node: ExpressionNode<'a>,
        index: usize,
        level: usize,
    },
    BlankLine,
}

pub struct AnalysisPrinter {
    indent: &'static str,
}

impl AnalysisPrinter {
    pub fn new() -> Self {
        AnalysisPrinter { indent: "\t" }
    }

    /// Walks the tree with an explicit stack, so deep nesting only grows
    /// the heap.
    pub fn print(&self, source: &str, tree: &PredicateTree) -> String {
        let mut out = String::new();
        let mut stack = vec![Step::Header {
            source,
            node: tree.root(),
            level: 0,
        }];

        while let Some(step) = stack.pop() {
            match step {
                Step::Header {
                    source,
                    node,
                    level,
                } => {
                    self.print_header(&mut out, source, node, level);
                    // reversed so argument 1 is popped first
                    for index in (0..node.arguments().len()).rev() {
                        stack.push(Step::Argument { node, index, level });
                    }
                }
                Step::Argument { node, index, level } => {
                    let item_pad = self.indent.repeat(level + 2);
                    let argument = &node.arguments()[index];
                    let number = index + 1;
                    match node.element_at(index) {
                        Some(PredicateElement::Expression(inner)) => {
                            let _ = writeln!(out, "{item_pad}Argument {number} is an expression.");
                            stack.push(Step::BlankLine);
                            stack.push(Step::Header {
                                source: argument,
                                node: inner,
                                level: level + 2,
                            });
                        }
                        Some(PredicateElement::Variable(variable)) => {
                            let indices: Vec<String> =
                                variable.indices().iter().map(i32::to_string).collect();
                            let _ = writeln!(
                                out,
                                "{item_pad}Argument {number} is a variable (name={}, indices={}).",
                                variable.name(),
                                indices.join(",")
                            );
                        }
                        None => {
                            let _ = writeln!(out, "{item_pad}Argument {number}: [{argument}]");
                        }
                    }
                }
                Step::BlankLine => out.push('\n'),
            }
        }

        out
    }

    fn print_header(&self, out: &mut String, source: &str, node: ExpressionNode<'_>, level: usize) {
        let pad = self.indent.repeat(level);
        let _ = writeln!(out, "{pad}Analysis:");
        let _ = writeln!(out, "{pad}Expression: [{source}]");
        let _ = writeln!(out, "{pad}{}Operation: [{}]", self.indent, node.operation());
        let _ = writeln!(
            out,
            "{pad}{}Arguments (count {}):",
            self.indent,
            node.arguments().len()
        );
    }

    /// Lists bindings sorted by name.
    pub fn print_variables(&self, bindings: &Bindings) -> String {
        if bindings.is_empty() {
            return "Variables not entered.\n".to_string();
        }

        let mut entries: Vec<(&String, &Value)> = bindings.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut out = format!("{}Variables:\n", self.indent);
        for (name, value) in entries {
            let _ = writeln!(
                out,
                "{0}{0}{name}={value} ({1})",
                self.indent,
                value.type_name()
            );
        }
        out
    }
}

impl Default for AnalysisPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Analysis of `tree`, printed under the original `source` text.
pub fn to_analysis(source: &str, tree: &PredicateTree) -> String {
    AnalysisPrinter::new().print(source, tree)
}

/// Sorted listing of `bindings`.
pub fn to_variable_listing(bindings: &Bindings) -> String {
    AnalysisPrinter::new().print_variables(bindings)
}
