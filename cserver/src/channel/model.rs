/// A channel that owns at least one command
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct ChannelInfo {
    pub channel: String,
    pub commands: i64,
}

/// Response envelope for the channel index
#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Channels {
    pub channels: Vec<ChannelInfo>,
}
