use serde_json::Value;

/// Value examined by [`describe`].
///
/// `Other` keeps the set open. Any value that is not one of the named kinds lands there.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Integer(i64),
    Boolean(bool),
    Text(String),
    Other(Value),
}

pub fn describe(kind: &Kind) -> String {
    match kind {
        Kind::Integer(i) => format!("Integer type: {}", i),
        Kind::Boolean(b) => format!("Boolean type: {}", b),
        Kind::Text(s) => format!("String type: {}", s),
        Kind::Other(_) => "Unknown type".to_owned(),
    }
}

impl From<i64> for Kind {
    fn from(i: i64) -> Self {
        Kind::Integer(i)
    }
}

impl From<i32> for Kind {
    fn from(i: i32) -> Self {
        Kind::Integer(i.into())
    }
}

impl From<bool> for Kind {
    fn from(b: bool) -> Self {
        Kind::Boolean(b)
    }
}

impl From<&str> for Kind {
    fn from(s: &str) -> Self {
        Kind::Text(s.to_owned())
    }
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        Kind::Text(s)
    }
}

impl From<f64> for Kind {
    fn from(f: f64) -> Self {
        Kind::Other(Value::from(f))
    }
}

impl From<Value> for Kind {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => Kind::Boolean(b),
            Value::String(s) => Kind::Text(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Kind::Integer(i),
                None => Kind::Other(Value::Number(n)),
            },
            value => Kind::Other(value),
        }
    }
}
