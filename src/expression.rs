//! Expression tree construction and the prepare/evaluate lifecycle.
//!
//! A predicate is stored as an arena of nodes. Node `0` is the root and every
//! nested expression gets a larger id than its parent, because nodes are
//! appended in breadth-first order while the tree is built. Construction
//! walks a work queue instead of recursing, so nesting depth never grows the
//! call stack.

use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    str::FromStr,
};

use tracing::debug;

use crate::{
    error::PredicateError,
    evaluator::Evaluator,
    lexer::{self, Lexer},
    value::Value,
    variable::VariableReference,
};

/// Variable bindings supplied to an evaluation.
pub type Bindings = HashMap<String, Value>;

/// Index of a node inside a [`PredicateTree`].
pub type NodeId = usize;

/// Non-literal argument of a node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Element {
    Variable(VariableReference),
    Expression(NodeId),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) operation: String,
    pub(crate) arguments: Vec<String>,
    /// Argument index -> element; literal arguments have no entry.
    pub(crate) elements: BTreeMap<usize, Element>,
}

impl Node {
    /// Splits one predicate into operation and arguments.
    ///
    /// Variables are parsed on the spot. Bracketed arguments are only
    /// recorded; their indices come back for the caller to expand.
    fn parse(source: &str) -> Result<(Node, Vec<usize>), PredicateError> {
        let text = lexer::trim_outer_brackets(source);
        let mut pieces = Lexer::new(text);

        // the operation is a plain name even when it looks like `$x` or `{..}`
        let operation = pieces.next().unwrap_or_default().trim().to_string();

        let mut arguments = Vec::new();
        let mut elements = BTreeMap::new();
        let mut nested = Vec::new();

        for (index, piece) in pieces.enumerate() {
            let argument = piece.trim();
            if lexer::is_variable_reference(argument) {
                elements.insert(index, Element::Variable(VariableReference::parse(argument)?));
                arguments.push(argument.to_string());
            } else if lexer::is_bracketed_expression(argument) {
                nested.push(index);
                arguments.push(argument.to_string());
            } else {
                arguments.push(lexer::unescape(argument));
            }
        }

        let node = Node {
            operation,
            arguments,
            elements,
        };
        Ok((node, nested))
    }
}

/// A fully prepared predicate.
///
/// The tree is immutable: evaluation only reads it, so one tree can be
/// shared across threads with each caller passing its own [`Bindings`].
///
/// # Examples
///
/// ```
/// use ketupa_predicates::{Bindings, PredicateTree, Value};
///
/// let tree: PredicateTree = "OR, {=, 11, 21}, {<, 11, 21}".parse().unwrap();
/// assert_eq!(tree.operation(), "OR");
/// assert!(tree.evaluate(&Bindings::new()));
///
/// let tree: PredicateTree = "=, $var1, 42".parse().unwrap();
/// let mut bindings = Bindings::new();
/// bindings.insert("var1".to_string(), Value::from("42"));
/// assert!(tree.evaluate(&bindings));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateTree {
    pub(crate) nodes: Vec<Node>,
}

impl PredicateTree {
    /// Parses `source` and expands every nested expression breadth-first.
    pub fn build(source: &str) -> Result<Self, PredicateError> {
        let (root, nested) = Node::parse(source)?;
        let mut nodes = vec![root];
        let mut queue = VecDeque::from([(0, nested)]);

        while let Some((parent, nested)) = queue.pop_front() {
            for index in nested {
                let text = nodes[parent].arguments[index].clone();
                let (child, child_nested) = Node::parse(&text)?;
                let id = nodes.len();
                nodes.push(child);
                nodes[parent].elements.insert(index, Element::Expression(id));
                queue.push_back((id, child_nested));
            }
        }

        debug!(
            operation = %nodes[0].operation,
            nodes = nodes.len(),
            "prepared predicate"
        );
        Ok(PredicateTree { nodes })
    }

    /// Read-only view of the root expression.
    pub fn root(&self) -> ExpressionNode<'_> {
        ExpressionNode { tree: self, id: 0 }
    }

    /// Read-only view of any node.
    pub fn node(&self, id: NodeId) -> Option<ExpressionNode<'_>> {
        (id < self.nodes.len()).then_some(ExpressionNode { tree: self, id })
    }

    /// Number of expressions in the tree, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn operation(&self) -> &str {
        self.root().operation()
    }

    pub fn arguments(&self) -> &[String] {
        self.root().arguments()
    }

    pub fn element_at(&self, index: usize) -> Option<PredicateElement<'_>> {
        self.root().element_at(index)
    }

    /// Evaluates the predicate against `bindings`.
    pub fn evaluate(&self, bindings: &Bindings) -> bool {
        Evaluator::new(bindings).evaluate(self)
    }
}

impl FromStr for PredicateTree {
    type Err = PredicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PredicateTree::build(s)
    }
}

/// Borrowed view of one expression node.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionNode<'a> {
    tree: &'a PredicateTree,
    id: NodeId,
}

impl<'a> ExpressionNode<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.id]
    }

    pub fn operation(&self) -> &'a str {
        &self.node().operation
    }

    /// Arguments in source order: trimmed, literals unescaped.
    pub fn arguments(&self) -> &'a [String] {
        &self.node().arguments
    }

    /// The variable or nested expression behind argument `index`.
    ///
    /// `None` for literal arguments and for indices past the end.
    pub fn element_at(&self, index: usize) -> Option<PredicateElement<'a>> {
        let tree = self.tree;
        self.node().elements.get(&index).map(|element| match element {
            Element::Variable(variable) => PredicateElement::Variable(variable),
            Element::Expression(id) => {
                PredicateElement::Expression(ExpressionNode { tree, id: *id })
            }
        })
    }
}

/// Resolved sub-element of an argument.
#[derive(Debug, Clone, Copy)]
pub enum PredicateElement<'a> {
    Variable(&'a VariableReference),
    Expression(ExpressionNode<'a>),
}

/// A predicate with the `Unprepared -> Prepared` lifecycle.
///
/// # Examples
///
/// ```
/// use ketupa_predicates::PredicateExpression;
///
/// let mut predicate = PredicateExpression::new("HasFlag, 181, 5");
/// assert!(!predicate.is_prepared());
///
/// predicate.prepare().unwrap();
/// assert_eq!(predicate.operation(), Some("HasFlag"));
/// assert_eq!(predicate.evaluate(), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct PredicateExpression {
    source: String,
    tree: Option<PredicateTree>,
}

impl PredicateExpression {
    pub fn new(source: impl Into<String>) -> Self {
        PredicateExpression {
            source: source.into(),
            tree: None,
        }
    }

    pub fn is_prepared(&self) -> bool {
        self.tree.is_some()
    }

    /// Builds the tree from the source text, replacing any previous one.
    ///
    /// On failure the expression is left unprepared.
    pub fn prepare(&mut self) -> Result<(), PredicateError> {
        self.tree = None;
        self.tree = Some(PredicateTree::build(&self.source)?);
        Ok(())
    }

    /// The prepared tree, if [`prepare`](Self::prepare) has succeeded.
    pub fn tree(&self) -> Option<&PredicateTree> {
        self.tree.as_ref()
    }

    pub fn operation(&self) -> Option<&str> {
        self.tree.as_ref().map(PredicateTree::operation)
    }

    pub fn arguments(&self) -> Option<&[String]> {
        self.tree.as_ref().map(PredicateTree::arguments)
    }

    pub fn element_at(&self, index: usize) -> Option<PredicateElement<'_>> {
        self.tree.as_ref()?.element_at(index)
    }

    /// Evaluates without variables.
    pub fn evaluate(&mut self) -> Result<bool, PredicateError> {
        self.evaluate_with(&Bindings::new())
    }

    /// Evaluates against `bindings`, preparing first when needed.
    ///
    /// The only possible error is a failed preparation.
    pub fn evaluate_with(&mut self, bindings: &Bindings) -> Result<bool, PredicateError> {
        if self.tree.is_none() {
            self.prepare()?;
        }
        Ok(self.tree.as_ref().is_some_and(|tree| tree.evaluate(bindings)))
    }
}
