mod coercion;
mod json;


use derive_more::Display;
use serde::{Deserialize, Serialize};

// re-exports
pub use coercion::coerce;

///
/// CONSTANTS
///

/// Largest integer magnitude a `f64` represents without loss.
pub(crate) const F64_SAFE_I64: i64 = 1i64 << 53;
pub(crate) const F64_SAFE_U64: u64 = 1u64 << 53;

///
/// ValueFamily
///
/// Coarse type class shared by runtime values and declared field types.
/// `Any` only appears on the field side (a field typed as `Value`).
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum ValueFamily {
    Any,
    Bool,
    Float,
    Int,
    List,
    Null,
    Text,
    Uint,
}

impl ValueFamily {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Int | Self::Uint)
    }

    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::Any | Self::List)
    }
}

///
/// Value
///
/// Dynamic value carried by construction inputs and record slots.
///
/// Null → the field's value is `Option::None`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    /// Ordered list of values, used for many-cardinality fields.
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn family(&self) -> ValueFamily {
        match self {
            Self::Bool(_) => ValueFamily::Bool,
            Self::Float(_) => ValueFamily::Float,
            Self::Int(_) => ValueFamily::Int,
            Self::List(_) => ValueFamily::List,
            Self::Null => ValueFamily::Null,
            Self::Text(_) => ValueFamily::Text,
            Self::Uint(_) => ValueFamily::Uint,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.family().is_numeric()
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    /// Signed view of an integer value, if it fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Unsigned view of an integer value, if it fits.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(v) => u64::try_from(*v).ok(),
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// Float view of a numeric value; integers only when exactly representable.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) if (-F64_SAFE_I64..=F64_SAFE_I64).contains(v) => Some(*v as f64),
            Self::Uint(v) if *v <= F64_SAFE_U64 => Some(*v as f64),
            _ => None,
        }
    }
}

// impl_from_signed
macro_rules! impl_from_signed {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

// impl_from_unsigned
macro_rules! impl_from_unsigned {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::Uint(u64::from(v))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::from_list(v)
    }
}
