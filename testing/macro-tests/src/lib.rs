//! Fixture records for the derive, each module with its own unit tests.
//! Cross-cutting scenarios live under `tests/`.

pub mod account;
pub mod generic;
pub mod person;
pub mod point;
pub mod settings;

///
/// Prelude
///

pub mod prelude {
    pub use recast::prelude::*;
    pub use serde::{Deserialize, Serialize};
}
