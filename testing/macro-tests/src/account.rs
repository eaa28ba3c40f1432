use crate::prelude::*;
use thiserror::Error as ThisError;

///
/// Account
///
/// Struct-level `default`, a renamed required key, a skipped field and a
/// hand-written `Validate`.
///

#[derive(Clone, Construct, Debug, PartialEq)]
#[construct(default, manual_validate)]
pub struct Account {
    #[construct(rename = "userName", required)]
    pub user_name: String,

    #[construct(default = "member")]
    pub role: String,

    pub tags: Vec<String>,
    pub score: f64,

    #[construct(skip)]
    pub revision: u64,
}

impl Validate for Account {
    type Error = AccountError;

    fn validate(mut self) -> Result<Self, Self::Error> {
        if self.role == "root" {
            return Err(AccountError::ReservedRole(self.role));
        }
        self.tags.sort();
        self.tags.dedup();

        Ok(self)
    }
}

///
/// AccountError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum AccountError {
    #[error(transparent)]
    Construct(#[from] ConstructError),

    #[error("role '{0}' is reserved")]
    ReservedRole(String),
}

///
/// TESTS
///
