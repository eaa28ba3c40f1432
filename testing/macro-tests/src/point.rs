use crate::prelude::*;
use thiserror::Error as ThisError;

///
/// Point
///
/// `x` and `y` are required, `z` is optional. The hook rejects negative
/// coordinates.
///

#[derive(Clone, Construct, Debug, Deserialize, PartialEq, Serialize)]
#[construct(validate, error = "PointError")]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub z: Option<i64>,
}

impl Point {
    fn validate_struct(self) -> Result<Self, PointError> {
        let axes = [("x", Some(self.x)), ("y", Some(self.y)), ("z", self.z)];

        if let Some((axis, Some(value))) = axes
            .into_iter()
            .find(|(_, value)| value.is_some_and(i64::is_negative))
        {
            return Err(PointError::Negative { axis, value });
        }

        Ok(self)
    }
}

///
/// PointError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum PointError {
    #[error(transparent)]
    Construct(#[from] ConstructError),

    #[error("coordinate '{axis}' is negative ({value})")]
    Negative { axis: &'static str, value: i64 },
}

///
/// PlainPoint
///
/// Same shape, no hook.
///

#[derive(Clone, Construct, Debug, PartialEq)]
pub struct PlainPoint {
    pub x: i64,
    pub y: i64,
    pub z: Option<i64>,
}

///
/// TESTS
///
