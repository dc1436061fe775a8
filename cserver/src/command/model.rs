/// A stored trigger/response pair owned by a channel
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Command {
    pub id: String,
    pub channel: String,
    pub command: String,
    pub value: String,
}

/// Request body for creating or replacing a command
#[derive(Debug, serde::Deserialize)]
pub struct NewCommand {
    pub command: String,
    pub value: String,
}

/// Response envelope for command listings
#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Commands {
    pub commands: Vec<Command>,
}
