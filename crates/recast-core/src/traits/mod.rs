mod field_value;

pub use field_value::*;

use crate::{
    construct,
    error::ConstructError,
    input::Input,
    model::{RecordModel, Slots},
    strategy::MergeStrategy,
    value::Value,
};

// ============================================================================
// RECORD SHAPE
// ============================================================================
//
// Generated by `#[derive(Construct)]`; describes how a struct maps onto
// slots. Nothing here validates.
//

///
/// Record
///
/// A named-field struct with a static field model and slot conversions.
///

pub trait Record: Sized {
    const MODEL: &'static RecordModel;

    /// Slots for `new`: declared defaults, `Null` for optional fields,
    /// and empty slots for required fields.
    fn default_slots() -> Slots;

    /// Slots for `put`: every field of `self`.
    fn to_slots(&self) -> Slots;

    /// Materialize the struct; every slot must be filled.
    fn from_slots(slots: Slots) -> Result<Self, ConstructError>;

    /// Field name/value snapshot in model order.
    fn to_values(&self) -> Vec<(&'static str, Value)> {
        Self::MODEL
            .fields
            .iter()
            .zip(self.to_slots().into_values())
            .map(|(field, value)| (field.name, value.unwrap_or(Value::Null)))
            .collect()
    }
}

// ============================================================================
// VALIDATION HOOK
// ============================================================================

///
/// Validate
///
/// Post-construction hook run by every `new`/`put`. The default body is the
/// identity; returning `Err` aborts the call and the error reaches the
/// caller unchanged.
///

pub trait Validate: Sized {
    /// Error surfaced by `new`/`put`; construction failures convert into it.
    type Error: From<ConstructError>;

    fn validate(self) -> Result<Self, Self::Error> {
        Ok(self)
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

///
/// Construct
///
/// `new` and `put` bound to the strategy chosen at derive time.
/// Use `construct::new_with` / `construct::put_with` to pick one per call.
///

pub trait Construct: Record + Validate {
    type Strategy: MergeStrategy + Default;

    fn new(input: impl Into<Input>) -> Result<Self, Self::Error> {
        construct::new_with(&Self::Strategy::default(), input)
    }

    fn put(&self, input: impl Into<Input>) -> Result<Self, Self::Error> {
        construct::put_with(self, &Self::Strategy::default(), input)
    }
}
