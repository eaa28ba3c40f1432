//! Hand-written record used by core unit tests.
//! Mirrors what `#[derive(Construct)]` generates for:
//!
//! ```ignore
//! #[derive(Construct)]
//! #[construct(validate, error = ProfileError)]
//! struct Profile {
//!     first_name: String,
//!     #[construct(rename = "years", default = 0)]
//!     age: u32,
//!     #[construct(skip, default = 1)]
//!     revision: u64,
//!     nickname: Option<String>,
//! }
//! ```

use crate::{
    error::ConstructError,
    model::{FieldModel, RecordModel, Slots},
    strategy::Native,
    traits::{Construct, FieldValue, Record, Validate},
    value::Value,
};

pub(crate) static PROFILE_MODEL: RecordModel = RecordModel {
    path: "recast_core::test_fixtures::Profile",
    fields: &[
        FieldModel {
            name: "first_name",
            key: "first_name",
            family: <String as FieldValue>::FAMILY,
            required: true,
            has_default: false,
            skip: false,
        },
        FieldModel {
            name: "age",
            key: "years",
            family: <u32 as FieldValue>::FAMILY,
            required: false,
            has_default: true,
            skip: false,
        },
        FieldModel {
            name: "revision",
            key: "revision",
            family: <u64 as FieldValue>::FAMILY,
            required: false,
            has_default: true,
            skip: true,
        },
        FieldModel {
            name: "nickname",
            key: "nickname",
            family: <Option<String> as FieldValue>::FAMILY,
            required: false,
            has_default: false,
            skip: false,
        },
    ],
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Profile {
    pub(crate) first_name: String,
    pub(crate) age: u32,
    pub(crate) revision: u64,
    pub(crate) nickname: Option<String>,
}

///
/// ProfileError
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum ProfileError {
    BlankName,
    Construct(ConstructError),
}

impl From<ConstructError> for ProfileError {
    fn from(err: ConstructError) -> Self {
        Self::Construct(err)
    }
}

impl Record for Profile {
    const MODEL: &'static RecordModel = &PROFILE_MODEL;

    fn default_slots() -> Slots {
        Slots::from_values(vec![
            None,
            Some(0u32.to_value()),
            Some(1u64.to_value()),
            Some(Value::Null),
        ])
    }

    fn to_slots(&self) -> Slots {
        Slots::from_values(vec![
            Some(self.first_name.to_value()),
            Some(self.age.to_value()),
            Some(self.revision.to_value()),
            Some(self.nickname.to_value()),
        ])
    }

    fn from_slots(mut slots: Slots) -> Result<Self, ConstructError> {
        Ok(Self {
            first_name: slots.take(Self::MODEL, 0)?,
            age: slots.take(Self::MODEL, 1)?,
            revision: slots.take(Self::MODEL, 2)?,
            nickname: slots.take(Self::MODEL, 3)?,
        })
    }
}

impl Validate for Profile {
    type Error = ProfileError;

    fn validate(self) -> Result<Self, Self::Error> {
        if self.first_name.trim().is_empty() {
            return Err(ProfileError::BlankName);
        }

        Ok(self)
    }
}

impl Construct for Profile {
    type Strategy = Native;
}
