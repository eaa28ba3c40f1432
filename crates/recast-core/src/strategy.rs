use crate::{
    error::ConstructError,
    input::Input,
    model::{FieldModel, RecordModel, Slots},
    obs::{MetricsEvent, sink::record},
    value::{Value, coerce},
};
use convert_case::{Case, Casing};

///
/// MergeStrategy
///
/// Decides how input keys map onto declared fields and how values are
/// prepared before they land in a slot. `merge_input` drives a strategy
/// over one input; the strategy itself holds no per-call state.
///

pub trait MergeStrategy {
    fn name(&self) -> &'static str;

    /// Resolve an input key to a field index.
    /// `Ok(None)` drops the key; `Err` aborts the call.
    fn resolve(&self, model: &RecordModel, key: &str) -> Result<Option<usize>, ConstructError>;

    /// Prepare a value for the resolved field.
    fn convert(&self, _model: &RecordModel, _field: &FieldModel, value: Value) -> Value {
        value
    }
}

///
/// Native
///
/// Exact field keys, unknown keys rejected, values taken as given.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Native;

impl MergeStrategy for Native {
    fn name(&self) -> &'static str {
        "native"
    }

    fn resolve(&self, model: &RecordModel, key: &str) -> Result<Option<usize>, ConstructError> {
        model
            .key_index(key)
            .map(Some)
            .ok_or_else(|| ConstructError::UnknownField {
                record: model.path,
                key: key.to_string(),
            })
    }
}

///
/// Lenient
///
/// Keys are matched case-insensitively across naming conventions
/// (`firstName`, `FirstName`, `first-name` and `FIRST_NAME` all reach
/// `first_name`), unknown keys are dropped, and values are coerced towards
/// the field's family.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Lenient;

impl MergeStrategy for Lenient {
    fn name(&self) -> &'static str {
        "lenient"
    }

    fn resolve(&self, model: &RecordModel, key: &str) -> Result<Option<usize>, ConstructError> {
        if let Some(index) = model.key_index(key) {
            return Ok(Some(index));
        }

        let wanted = key.to_case(Case::Snake);
        let index = model
            .fields
            .iter()
            .position(|f| !f.skip && f.key.to_case(Case::Snake) == wanted);

        if index.is_none() {
            record(MetricsEvent::UnknownKeyIgnored {
                record_path: model.path,
            });
        }

        Ok(index)
    }

    fn convert(&self, model: &RecordModel, field: &FieldModel, value: Value) -> Value {
        match coerce(&value, field.family) {
            Some(coerced) => {
                record(MetricsEvent::Coerced {
                    record_path: model.path,
                    field: field.name,
                });
                coerced
            }
            None => value,
        }
    }
}

///
/// merge_input
///
/// Apply `input` onto `slots` with `strategy`.
/// Two keys that resolve to the same field are a `DuplicateKey` error,
/// even when their raw spelling differs.
///
pub fn merge_input<S>(
    strategy: &S,
    model: &RecordModel,
    slots: &mut Slots,
    input: Input,
) -> Result<(), ConstructError>
where
    S: MergeStrategy + ?Sized,
{
    let mut touched = vec![false; model.len()];

    for (key, value) in input.into_entries(model.path)? {
        let Some(index) = strategy.resolve(model, &key)? else {
            continue;
        };

        // out-of-range or skipped fields are never written from input,
        // whatever the strategy resolved
        let (Some(seen), Some(field)) = (touched.get_mut(index), model.fields.get(index)) else {
            return Err(ConstructError::UnknownField {
                record: model.path,
                key,
            });
        };
        if field.skip {
            return Err(ConstructError::UnknownField {
                record: model.path,
                key,
            });
        }

        if std::mem::replace(seen, true) {
            return Err(ConstructError::DuplicateKey {
                record: model.path,
                key,
            });
        }

        slots.set(index, strategy.convert(model, field, value));
    }

    Ok(())
}

///
/// TESTS
///
