use crate::value::{Value, ValueFamily};

///
/// FieldValue
///
/// Conversion between a Rust field type and the dynamic `Value` carried in
/// inputs and slots. `from_value` returns `None` on a family mismatch or an
/// out-of-range integer; lossless numeric conversions are accepted.
///

pub trait FieldValue: Sized {
    /// Family a value must belong to (after coercion) to fit this type.
    const FAMILY: ValueFamily;

    fn to_value(&self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for Value {
    const FAMILY: ValueFamily = ValueFamily::Any;

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FieldValue for bool {
    const FAMILY: ValueFamily = ValueFamily::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// impl_field_value_signed
macro_rules! impl_field_value_signed {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                const FAMILY: ValueFamily = ValueFamily::Int;

                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }

                fn from_value(value: &Value) -> Option<Self> {
                    value.as_i64().and_then(|v| v.try_into().ok())
                }
            }
        )*
    };
}

// impl_field_value_unsigned
macro_rules! impl_field_value_unsigned {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                const FAMILY: ValueFamily = ValueFamily::Uint;

                fn to_value(&self) -> Value {
                    Value::Uint(u64::from(*self))
                }

                fn from_value(value: &Value) -> Option<Self> {
                    value.as_u64().and_then(|v| v.try_into().ok())
                }
            }
        )*
    };
}

impl_field_value_signed!(i8, i16, i32, i64);
impl_field_value_unsigned!(u8, u16, u32, u64);

impl FieldValue for f64 {
    const FAMILY: ValueFamily = ValueFamily::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FieldValue for f32 {
    const FAMILY: ValueFamily = ValueFamily::Float;

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_value(value: &Value) -> Option<Self> {
        let v = value.as_f64()?;
        let narrowed = v as Self;

        // Reject values that overflow f32 instead of saturating to infinity.
        (narrowed.is_finite() || !v.is_finite()).then_some(narrowed)
    }
}

impl FieldValue for String {
    const FAMILY: ValueFamily = ValueFamily::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().map(ToString::to_string)
    }
}

impl FieldValue for char {
    const FAMILY: ValueFamily = ValueFamily::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let mut chars = value.as_text()?.chars();
        let c = chars.next()?;

        chars.next().is_none().then_some(c)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const FAMILY: ValueFamily = T::FAMILY;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            Some(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const FAMILY: ValueFamily = ValueFamily::List;

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_list()?.iter().map(T::from_value).collect()
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    const FAMILY: ValueFamily = T::FAMILY;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Box::new)
    }
}

///
/// TESTS
///
