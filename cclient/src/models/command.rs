/// A trigger/response pair configured for a channel
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Command {
    pub id: String,
    pub channel: String,
    pub command: String,
    pub value: String,
}

/// Response envelope for a channel's command listing
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Commands {
    pub commands: Vec<Command>,
}

/// Request body for creating or replacing a command
#[derive(Debug, serde::Serialize)]
pub struct NewCommand {
    pub command: String,
    pub value: String,
}
