//! ## Crate layout
//! - `core`: runtime values, record models, strategies and the `new`/`put` driver.
//! - `Construct` (derive): generates `Record`, `Validate`, `Construct` and the
//!   inherent `new`/`put` for a named-field struct.
//!
//! ```ignore
//! use recast::prelude::*;
//!
//! #[derive(Clone, Construct, Debug, PartialEq)]
//! #[construct(validate = "Point::check", error = "PointError")]
//! pub struct Point {
//!     x: i64,
//!     y: i64,
//!     z: Option<i64>,
//! }
//!
//! let p = Point::new(input! { x: 1, y: 2 })?;
//! let q = p.put(input! { z: 3 })?;
//! ```

pub use recast_core as core;

// export so generated `::recast::...` paths resolve inside this crate too
extern crate self as recast;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Modules
//

pub use recast_core::{construct, error, input, model, obs, strategy, traits, value};

//
// Types, traits and macros
//

pub use recast_core::{
    error::ConstructError,
    input::Input,
    traits::{Construct, FieldValue, Record, Validate},
    value::{Value, ValueFamily},
};
pub use recast_derive::Construct;

///
/// Prelude
/// Derive, traits and the `input!` macro.
///

pub mod prelude {
    pub use crate::{
        Construct, ConstructError, Input, Value,
        input,
        traits::{FieldValue as _, Record as _, Validate},
    };
}
