use std::collections::HashMap;

use crate::{ast::Token, error::PredicateError, lexer, value::Value};

/// A parsed `$name[i][j]...` reference.
///
/// Indices are applied left to right. On a list an index selects an
/// element; on an integer-like value it extracts one bit as `0` / `1`.
///
/// # Examples
///
/// ```
/// use ketupa_predicates::{Value, VariableReference};
/// use std::collections::HashMap;
///
/// let reference = VariableReference::parse("$flags[2]").unwrap();
/// assert_eq!(reference.name(), "flags");
/// assert_eq!(reference.indices(), &[2]);
///
/// let mut bindings = HashMap::new();
/// bindings.insert("flags".to_string(), Value::Integer(0b100));
/// assert_eq!(reference.resolve(&bindings), Value::Integer(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    name: String,
    indices: Vec<i32>,
}

impl VariableReference {
    /// Parses reference text, failing on any index that is not an `i32`.
    pub fn parse(text: &str) -> Result<Self, PredicateError> {
        let name = lexer::extract_variable_name(text);
        let mut indices = Vec::new();

        let mut start = name_end(text);
        while let Some(range) = lexer::index_token_range(text, start) {
            // `[]` is malformed here; it does not end the index list quietly
            let token = text[range.clone()].trim();
            let index = token.parse::<i32>().map_err(|_| PredicateError::MalformedIndex {
                variable: name.to_string(),
                index: token.to_string(),
            })?;
            indices.push(index);
            start = range.end + 1;
        }

        Ok(VariableReference {
            name: name.to_string(),
            indices,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn indices(&self) -> &[i32] {
        &self.indices
    }

    /// Looks the reference up in `bindings`.
    ///
    /// Missing names, out-of-range or negative list indices and indices
    /// applied to values with no integer view all give [`Value::Null`].
    pub fn resolve(&self, bindings: &HashMap<String, Value>) -> Value {
        let Some(bound) = bindings.get(&self.name) else {
            return Value::Null;
        };

        // walk list indices by reference, clone only what is returned
        let mut current = bound;
        let mut rest = self.indices.as_slice();
        while let Some((&index, tail)) = rest.split_first() {
            let Value::Array(items) = current else {
                break;
            };
            match usize::try_from(index).ok().and_then(|i| items.get(i)) {
                Some(item) => current = item,
                None => return Value::Null,
            }
            rest = tail;
        }

        if rest.is_empty() {
            return current.clone();
        }

        // remaining indices read single bits, each result feeding the next
        let Some(mut bits) = current.as_bits() else {
            return Value::Null;
        };
        for &index in rest {
            match index {
                0..64 => bits = (bits >> index) & 1,
                _ => return Value::Null,
            }
        }
        Value::Integer(bits)
    }
}

/// Offset of the first index bracket, or the end of the text.
fn name_end(text: &str) -> usize {
    text.find(|ch: char| Token::classify(ch) == Token::IndexStart)
        .unwrap_or(text.len())
}
