use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loose::{first_truthy, to_text};

/// Records requested per page. Not configurable.
pub const PAGE_SIZE: u32 = 10;

pub const NAME_FIELDS: &[&str] = &["name", "fullName", "nome", "username", "firstName"];
pub const EMAIL_FIELDS: &[&str] = &["email", "mail", "emailAddress"];
pub const ID_FIELDS: &[&str] = &["id", "_id"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageNumber(pub u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    /// Page numbers are 1-based; `0` is read as the first page.
    pub fn new(raw: u32) -> Self {
        Self(raw.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn offset(self, page_size: u32) -> u64 {
        u64::from(self.0.saturating_sub(1)) * u64::from(page_size)
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user entry exactly as the server sent it. No schema is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(pub Value);

impl UserRecord {
    pub fn display_name(&self) -> Option<String> {
        first_truthy(&self.0, NAME_FIELDS).map(to_text)
    }

    pub fn email(&self) -> Option<String> {
        first_truthy(&self.0, EMAIL_FIELDS).map(to_text)
    }

    pub fn id(&self) -> Option<String> {
        first_truthy(&self.0, ID_FIELDS).map(to_text)
    }
}

impl From<Value> for UserRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
