use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{PageNumber, UserRecord};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Offset/limit window sent as the query string of the users request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPageQuery {
    pub offset: u64,
    pub limit: u32,
}

impl UsersPageQuery {
    pub fn for_page(page: PageNumber, page_size: u32) -> Self {
        Self {
            offset: page.offset(page_size),
            limit: page_size,
        }
    }
}

/// What the transport hands to the shape sniffers: the decoded body plus the
/// raw total-count header, if the server sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct RawUsersResponse {
    pub total_header: Option<String>,
    pub body: Value,
}

/// A page after normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersPage {
    pub users: Vec<UserRecord>,
    pub total: Option<u64>,
}
