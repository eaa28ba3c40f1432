use crate::value::{F64_SAFE_I64, F64_SAFE_U64, Value, ValueFamily};

///
/// coerce
///
/// Convert `value` towards the `target` family.
///
/// Returns `None` when no conversion applies: the value already fits,
/// is `Null`, or cannot be converted without loss. Callers keep the
/// original value in that case and let materialization report the
/// mismatch.
///
#[must_use]
pub fn coerce(value: &Value, target: ValueFamily) -> Option<Value> {
    let source = value.family();
    if source == target || target == ValueFamily::Any || value.is_null() {
        return None;
    }

    match (value, target) {
        (Value::Text(s), _) => parse_text(s.trim(), target),
        (Value::Bool(_) | Value::Float(_) | Value::Int(_) | Value::Uint(_), ValueFamily::Text) => {
            scalar_to_text(value).map(Value::Text)
        }
        (Value::Float(f), ValueFamily::Int | ValueFamily::Uint) => integral_float(*f, target),

        _ => None,
    }
}

fn parse_text(s: &str, target: ValueFamily) -> Option<Value> {
    match target {
        ValueFamily::Bool => {
            if s.eq_ignore_ascii_case("true") {
                Some(Value::Bool(true))
            } else if s.eq_ignore_ascii_case("false") {
                Some(Value::Bool(false))
            } else {
                None
            }
        }
        ValueFamily::Int => s.parse::<i64>().ok().map(Value::Int),
        ValueFamily::Uint => s.parse::<u64>().ok().map(Value::Uint),
        ValueFamily::Float => s
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Value::Float),

        ValueFamily::Any | ValueFamily::List | ValueFamily::Null | ValueFamily::Text => None,
    }
}

fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Uint(u) => Some(u.to_string()),
        _ => None,
    }
}

// Only floats with no fractional part inside the exact-integer range of f64.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn integral_float(f: f64, target: ValueFamily) -> Option<Value> {
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }

    match target {
        ValueFamily::Int if f.abs() <= F64_SAFE_I64 as f64 => Some(Value::Int(f as i64)),
        ValueFamily::Uint if f >= 0.0 && f <= F64_SAFE_U64 as f64 => Some(Value::Uint(f as u64)),
        _ => None,
    }
}

///
/// TESTS
///
