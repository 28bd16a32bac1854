//! Character documents

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ToTransport;

/// Longest character name the game allows.
pub const MAX_NAME_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToTransport for Character {
    type Transport = Character;

    fn to_transport(&self) -> Character {
        self.clone()
    }
}
