use std::fmt;

/// A dynamically typed value bound to a variable or produced by an argument.
///
/// Operators compare the *text form* of a value (see [`Value::to_text`])
/// unless they explicitly parse it as a number.
///
/// # Examples
///
/// ```
/// use ketupa_predicates::Value;
///
/// assert_eq!(Value::Boolean(true).to_text().as_deref(), Some("True"));
/// assert_eq!(Value::Integer(42).to_text().as_deref(), Some("42"));
/// assert_eq!(Value::Float(4.2).to_text().as_deref(), Some("4.2"));
/// assert_eq!(Value::Null.to_text(), None);
///
/// let list = Value::from(vec!["42", "61"]);
/// assert_eq!(list.to_string(), "[42, 61]");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value (missing variable, index out of range)
    #[default]
    Null,

    /// Boolean, rendered as `True` / `False`
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Ordered list of values
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Canonical text form, `None` for [`Value::Null`].
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Parses the value as a 64-bit integer.
    ///
    /// Integers pass through; every other value goes through its text form,
    /// surrounding whitespace ignored.
    pub fn parse_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Null => None,
            other => other.to_string().trim().parse().ok(),
        }
    }

    /// Parses the value as a 32-bit integer, same rules as [`Value::parse_i64`].
    pub fn parse_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(n) => i32::try_from(*n).ok(),
            Value::Null => None,
            other => other.to_string().trim().parse().ok(),
        }
    }

    /// Integer view used for single-bit extraction.
    ///
    /// Broader than [`Value::parse_i64`]: booleans count as 0/1 and
    /// whole floats inside the `i64` range convert.
    pub fn as_bits(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Boolean(b) => Some(i64::from(*b)),
            Value::Float(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Borrows the elements when every one of them is a string.
    pub fn as_string_list(&self) -> Option<Vec<&str>> {
        match self {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// Type name for traces and printed variable listings.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Boolean(true) => f.write_str("True"),
            Value::Boolean(false) => f.write_str("False"),
            Value::Float(n) => write!(f, "{}", n),
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    /// Objects have no counterpart and are bound as their JSON text.
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            object @ serde_json::Value::Object(_) => Value::String(object.to_string()),
        }
    }
}
