mod field;
mod record;

pub use field::*;
pub use record::*;
