/// Posts served by the remote API
use serde::{Deserialize, Serialize};

/// Identifier of the user who authored a post
pub type UserId = u64;

/// A post, kept exactly as the API returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier
    pub id: u64,

    /// Author of the post
    pub user_id: UserId,

    /// Title, shown as the accordion header
    pub title: String,

    /// Body text, shown when the item is expanded
    pub body: String,
}

impl Post {
    /// Create a new post
    pub fn new(id: u64, user_id: UserId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}
