use crate::{error::ConstructError, value::Value};
use serde_json::{Number, Value as JsonValue};

impl TryFrom<JsonValue> for Value {
    type Error = ConstructError;

    /// Objects have no `Value` counterpart; records are flat.
    fn try_from(json: JsonValue) -> Result<Self, Self::Error> {
        let value = match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => from_number(&n)?,
            JsonValue::String(s) => Self::Text(s),
            JsonValue::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(_) => {
                return Err(ConstructError::invalid_input(
                    "nested JSON objects are not supported as field values",
                ));
            }
        };

        Ok(value)
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => Self::Bool(b),
            Value::Float(f) => Number::from_f64(f).map_or(Self::Null, Self::Number),
            Value::Int(i) => Self::Number(i.into()),
            Value::List(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Value::Null => Self::Null,
            Value::Text(s) => Self::String(s),
            Value::Uint(u) => Self::Number(u.into()),
        }
    }
}

// Signed first so small positive integers land in `Int`, matching how
// integer literals convert.
fn from_number(n: &Number) -> Result<Value, ConstructError> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Int(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::Uint(u))
    } else if let Some(f) = n.as_f64() {
        Ok(Value::Float(f))
    } else {
        Err(ConstructError::invalid_input(format!(
            "JSON number {n} is not representable"
        )))
    }
}
