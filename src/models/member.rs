//! Member model for the chapter roster.

use serde::{Deserialize, Serialize};

/// Membership tier within the chapter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MemberRole {
    Executive,
    General,
}

/// A registered chapter member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: MemberRole,
    /// Office held; present for executives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub department: String,
    pub state_code: String,
    pub image_url: String,
}
