pub mod ast;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod lexer;
pub mod output;
pub mod value;
pub mod variable;

pub use ast::{Operator, Token};
pub use error::PredicateError;
pub use evaluator::Evaluator;
pub use expression::{
    Bindings, ExpressionNode, NodeId, PredicateElement, PredicateExpression, PredicateTree,
};
pub use lexer::Lexer;
pub use output::{to_analysis, to_variable_listing};
pub use value::Value;
pub use variable::VariableReference;
