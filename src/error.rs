/// Errors raised while preparing a predicate.
///
/// Evaluation itself never fails: mismatches fold into `false` or
/// [`Value::Null`](crate::Value::Null).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredicateError {
    /// A variable index is not a 32-bit signed integer.
    #[error("[Variable {variable}]: Index {index} is not a number.")]
    MalformedIndex {
        /// Name of the variable carrying the index.
        variable: String,
        /// The offending index text, trimmed.
        index: String,
    },
}
