use serde_json::{Map, Value};

use crate::error::DecodeError;

const ROOT: &str = "$";

// Parse walks a json object field by field, keeping the dotted path of the
// current position so that every error can name the offending field.
pub(super) struct Parse {
    path: String,
    fields: Map<String, Value>,
}

impl Parse {
    pub(super) fn root(value: Value) -> Result<Self, DecodeError> {
        Parse::object(String::new(), value)
    }

    pub(super) fn next_string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let path = join(&self.path, field);
        match self.take(field, &path)? {
            Value::String(s) => Ok(s),
            value => Err(DecodeError::Schema {
                path,
                expected: "string",
                found: kind_of(&value).to_owned(),
            }),
        }
    }

    pub(super) fn next_object(&mut self, field: &'static str) -> Result<Parse, DecodeError> {
        let path = join(&self.path, field);
        let value = self.take(field, &path)?;
        Parse::object(path, value)
    }

    // Every known field has been taken, anything left over is not part of the schema.
    pub(super) fn finish(self) -> Result<(), DecodeError> {
        let Parse { path, fields } = self;
        match fields.into_iter().next() {
            None => Ok(()),
            Some((field, value)) => Err(DecodeError::Schema {
                path: join(&path, &field),
                expected: "no such field",
                found: kind_of(&value).to_owned(),
            }),
        }
    }

    fn object(path: String, value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            value => Err(DecodeError::Schema {
                path: if path.is_empty() { ROOT.to_owned() } else { path },
                expected: "object",
                found: kind_of(&value).to_owned(),
            }),
        }
    }

    fn take(&mut self, field: &str, path: &str) -> Result<Value, DecodeError> {
        self.fields
            .remove(field)
            .ok_or_else(|| DecodeError::MissingField {
                path: path.to_owned(),
            })
    }
}

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_owned()
    } else {
        format!("{}.{}", path, field)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
