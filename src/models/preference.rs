//! Theme preference payload.

use serde::{Deserialize, Serialize};

/// Dark-mode flag for the portal UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkModePreference {
    pub dark_mode: bool,
}
