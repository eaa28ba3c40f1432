//! Core runtime for recast: dynamic values, record models, merge strategies,
//! the `new`/`put` driver and construction telemetry.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod construct;
pub mod error;
pub mod input;
pub mod model;
pub mod obs;
pub mod strategy;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No drivers, sinks or strategies are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error::ConstructError,
        input::Input,
        traits::{Construct, FieldValue, Record, Validate},
        value::Value,
    };
}
