use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use time::OffsetDateTime;

/// A poll with a title, an optional description, and an accumulated vote
/// count kept in the session tally. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Vote counts keyed by survey id. Entries are only ever created or
/// incremented, never decremented.
pub type VoteTally = HashMap<String, u32>;

/// Survey ids the local user has already voted on, in vote order.
pub type UserVoteRecord = Vec<String>;
