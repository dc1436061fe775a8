pub mod channel;
pub mod command;

// Re-export common types for easier access
pub use channel::{ChannelInfo, Channels};
pub use command::{Command, Commands, NewCommand};
