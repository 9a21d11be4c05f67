use serde::{Deserialize, Serialize};
use sqlx::prelude::Type;

/// Who may message this user. Stored as a typed column, defaulting to
/// `everyone` for users who never touched their settings.
#[derive(Debug, PartialEq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "allow_messages", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AllowMessages {
    Everyone,
    Members,
    Premium,
    Nobody,
}

impl Default for AllowMessages {
    fn default() -> Self {
        AllowMessages::Everyone
    }
}
