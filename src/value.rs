use std::collections::BTreeMap;
use std::fmt;

/// The result carried by a [`ParseState`](crate::ParseState)
///
/// Every parser produces one of these shapes. Primitive matchers yield
/// `Token`, collecting combinators yield `Seq`, and grammars build `Int` or
/// `Record` values with [`map`](crate::MapExt::map).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// No result yet, or an optional branch that did not match
    #[default]
    Null,
    /// Text matched from the input (or produced by a mapping)
    Token(String),
    Int(i64),
    /// Ordered results of a sequence or repetition
    Seq(Vec<Value>),
    /// Named fields of a structured production
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// Build a record from key/value pairs
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Token(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Take the items out of a `Seq`, or `None` for any other shape
    pub fn into_seq(self) -> Option<Vec<Value>> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a field of a `Record`
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.get(key),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Token(text) => write!(f, "{}", text),
            Value::Int(n) => write!(f, "{}", n),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Token(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Token(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}
