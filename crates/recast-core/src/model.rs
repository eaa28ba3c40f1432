use crate::{
    error::ConstructError,
    traits::FieldValue,
    value::{Value, ValueFamily},
};

///
/// RecordModel
/// Minimal, macro-generated runtime model for one record type.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified Rust type path (for diagnostics and telemetry).
    pub path: &'static str,
    /// Ordered field list; slot indexes follow this order.
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the input-visible field whose key matches exactly.
    #[must_use]
    pub fn key_index(&self, key: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| !f.skip && f.key == key)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }
}

///
/// FieldModel
/// Runtime field metadata used by merge strategies.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Rust field identifier.
    pub name: &'static str,
    /// Input key accepted for this field (the name unless renamed).
    pub key: &'static str,
    /// Family of the declared type.
    pub family: ValueFamily,
    /// Construction fails when no value is supplied and no default exists.
    pub required: bool,
    /// Declared default or struct-level `default`; informational.
    pub has_default: bool,
    /// Never read from input; keeps its default or existing value.
    pub skip: bool,
}

///
/// Slots
///
/// Per-field staging area for one construction call, in model order.
/// `None` means no value has been supplied or defaulted yet.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slots(Vec<Option<Value>>);

impl Slots {
    #[must_use]
    pub const fn from_values(values: Vec<Option<Value>>) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index).and_then(Option::as_ref)
    }

    /// Store a value; out-of-range indexes are ignored.
    pub fn set(&mut self, index: usize, value: Value) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = Some(value);
        }
    }

    /// First required field (in model order) whose slot is still empty.
    #[must_use]
    pub fn first_missing(&self, model: &RecordModel) -> Option<&'static FieldModel> {
        model
            .fields
            .iter()
            .enumerate()
            .find(|(index, field)| field.required && self.get(*index).is_none())
            .map(|(_, field)| field)
    }

    ///
    /// take
    ///
    /// Move the value at `index` out and materialize it as `T`.
    /// Called by generated `Record::from_slots` once per field.
    ///
    pub fn take<T: FieldValue>(
        &mut self,
        model: &RecordModel,
        index: usize,
    ) -> Result<T, ConstructError> {
        let field = &model.fields[index];
        let value = self
            .0
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(ConstructError::MissingRequiredField {
                record: model.path,
                field: field.name,
            })?;

        T::from_value(&value).ok_or_else(|| ConstructError::FieldType {
            record: model.path,
            field: field.name,
            expected: T::FAMILY,
            actual: value.family(),
        })
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Option<Value>> {
        self.0
    }
}

///
/// TESTS
///
