use serde::{Deserialize, Serialize};

/// Who is asking for a price. Agents (internal resellers) get their own
/// markup percentage; admins price the same as end customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Agent,
    Admin,
}
