use regex::Regex;
use tracing::{debug, trace};

use crate::{
    ast::Operator,
    expression::{Bindings, Element, Node, PredicateTree},
    value::Value,
};

/// Applies the operator table to a prepared tree.
///
/// Nodes are evaluated from the highest id down to the root. A nested
/// expression always has a larger id than its parent, so every child result
/// is known before the parent needs it and no recursion is involved.
pub struct Evaluator<'a> {
    bindings: &'a Bindings,
}

impl<'a> Evaluator<'a> {
    pub fn new(bindings: &'a Bindings) -> Self {
        Evaluator { bindings }
    }

    /// Evaluates the whole tree and returns the root result.
    pub fn evaluate(&self, tree: &PredicateTree) -> bool {
        let mut results = vec![false; tree.nodes.len()];

        for id in (0..tree.nodes.len()).rev() {
            let node = &tree.nodes[id];
            let result = self.eval_node(node, &results);
            trace!(node = id, operation = %node.operation, result, "evaluated expression");
            results[id] = result;
        }

        results.first().copied().unwrap_or(false)
    }

    /// Value of argument `index`: variable lookup, nested result or literal.
    fn resolve_argument(&self, node: &Node, index: usize, results: &[bool]) -> Value {
        match node.elements.get(&index) {
            Some(Element::Variable(variable)) => variable.resolve(self.bindings),
            Some(Element::Expression(id)) => Value::Boolean(results[*id]),
            None => node
                .arguments
                .get(index)
                .map_or(Value::Null, |literal| Value::String(literal.clone())),
        }
    }

    fn eval_node(&self, node: &Node, results: &[bool]) -> bool {
        let arity = node.arguments.len();
        let Some(op) = Operator::lookup(&node.operation, arity) else {
            debug!(operation = %node.operation, arity, "unknown operation, evaluating to false");
            return false;
        };
        trace!(operator = op.name(), arity, "applying operator");

        let arg = |index: usize| self.resolve_argument(node, index, results);

        match op {
            Operator::Not => eval_not(&arg(0)),
            Operator::Equal => eval_equal(&arg(0), &arg(1)),
            Operator::LessThan => compare_numeric(&arg(0), &arg(1), |a, b| a < b),
            Operator::GreaterThan => compare_numeric(&arg(0), &arg(1), |a, b| a > b),
            Operator::LessEqual => compare_numeric(&arg(0), &arg(1), |a, b| a <= b),
            Operator::GreaterEqual => compare_numeric(&arg(0), &arg(1), |a, b| a >= b),
            Operator::Or => arity == 0 || (0..arity).any(|i| is_text(&arg(i), "True")),
            Operator::And => (0..arity).all(|i| !is_text(&arg(i), "False")),
            Operator::In => eval_in(&arg(0), &arg(1)),
            Operator::HasFlag => eval_has_flag(&arg(0), &arg(1)),
            Operator::Matches => eval_matches(&arg(0), &arg(1)),
            Operator::StartsWith => {
                eval_text_pair(&arg(0), &arg(1), |text, prefix| text.starts_with(prefix))
            }
            Operator::EndsWith => {
                eval_text_pair(&arg(0), &arg(1), |text, suffix| text.ends_with(suffix))
            }
        }
    }
}

fn is_text(value: &Value, expected: &str) -> bool {
    value.to_text().is_some_and(|text| text == expected)
}

/// Null on either side never compares equal, not even to another null.
fn eval_equal(left: &Value, right: &Value) -> bool {
    match (left.to_text(), right.to_text()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

fn eval_not(value: &Value) -> bool {
    !value
        .to_text()
        .is_some_and(|text| text.eq_ignore_ascii_case("True"))
}

fn compare_numeric(left: &Value, right: &Value, cmp: impl Fn(i64, i64) -> bool) -> bool {
    match (left.parse_i64(), right.parse_i64()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => {
            debug!(left = %left, right = %right, "operands are not integers, comparison is false");
            false
        }
    }
}

/// Membership in a list of strings, substring containment otherwise.
fn eval_in(needle: &Value, haystack: &Value) -> bool {
    let needle = needle.to_text().unwrap_or_default();
    match haystack.as_string_list() {
        Some(items) => items.contains(&needle.as_str()),
        None => haystack.to_text().unwrap_or_default().contains(&needle),
    }
}

fn eval_has_flag(value: &Value, flag: &Value) -> bool {
    match (value.parse_i32(), flag.parse_i32()) {
        (Some(value), Some(flag)) => (value & flag) == flag,
        _ => false,
    }
}

fn eval_matches(input: &Value, pattern: &Value) -> bool {
    let (Some(input), Some(pattern)) = (input.to_text(), pattern.to_text()) else {
        return false;
    };
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(&input),
        Err(e) => {
            debug!(pattern = %pattern, error = %e, "invalid regex, match is false");
            false
        }
    }
}

fn eval_text_pair(left: &Value, right: &Value, test: impl Fn(&str, &str) -> bool) -> bool {
    match (left.to_text(), right.to_text()) {
        (Some(left), Some(right)) => test(&left, &right),
        _ => false,
    }
}
