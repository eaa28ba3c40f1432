use crate::prelude::*;
use recast::{
    model::{FieldModel, RecordModel},
    strategy::{MergeStrategy, Native},
};

///
/// Dotted
///
/// User-defined strategy: accepts `settings.volume` as well as `volume`,
/// and clamps integers into `u8` fields.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Dotted;

impl MergeStrategy for Dotted {
    fn name(&self) -> &'static str {
        "dotted"
    }

    fn resolve(&self, model: &RecordModel, key: &str) -> Result<Option<usize>, ConstructError> {
        let key = key.strip_prefix("settings.").unwrap_or(key);

        Native.resolve(model, key)
    }

    fn convert(&self, _model: &RecordModel, field: &FieldModel, value: Value) -> Value {
        match (field.name, &value) {
            ("volume", Value::Int(v)) if *v > i64::from(u8::MAX) => Value::Uint(u64::from(u8::MAX)),
            ("volume", Value::Int(v)) if *v < 0 => Value::Uint(0),
            _ => value,
        }
    }
}

///
/// Settings
///
/// Trait-only surface: `new`/`put` come from `Construct`.
///

#[derive(Clone, Construct, Debug, PartialEq)]
#[construct(strategy = "Dotted", skip_inherent)]
pub struct Settings {
    pub volume: u8,

    #[construct(default = 1.0)]
    pub scale: f64,

    #[construct(default = "en")]
    pub locale: String,
}

///
/// TESTS
///
