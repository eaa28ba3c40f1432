use crate::prelude::*;

///
/// Tagged
///

#[derive(Clone, Construct, Debug, PartialEq)]
pub struct Tagged<T> {
    pub label: String,
    pub value: T,

    #[construct(default)]
    pub history: Vec<T>,
}

///
/// TESTS
///
