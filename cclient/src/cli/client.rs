use crate::api::ApiClient;
use crate::cli::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Terminal-based client for interaction with the command server
pub struct Client {
    /// API client for server communication
    api: ApiClient,
    /// Command line editor for user input
    editor: DefaultEditor,
    /// Path to command history file
    history_path: PathBuf,
}

impl Client {
    /// Create a new CLI client talking to the given API client
    pub fn new(api: ApiClient) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_path = dirs::home_dir()
            .unwrap_or_default()
            .join(".cclient_history");

        // Load history if it exists
        if editor.load_history(&history_path).is_err() {
            println!("{}", "No previous history.".yellow());
        }

        Ok(Self {
            api,
            editor,
            history_path,
        })
    }

    /// Print available commands
    pub fn print_help(&self) {
        println!("\n{}", "Commands:".green().bold());
        println!("{}-ping server", "ping".cyan());
        println!("{}-list channels", "channels".cyan());
        println!("{}-list a channel's commands", "commands <channel>".cyan());
        println!("{}-look up one command", "get <channel> <name>".cyan());
        println!(
            "{}-create or replace a command",
            "add <channel> <name> <value>".cyan()
        );
        println!("{}-remove a command", "remove <channel> <name>".cyan());
        println!("{}-dump a channel as JSON", "export <channel>".cyan());
        println!("{}-help", "help".cyan());
        println!("{}-clear", "clear".cyan());
        println!("{}-exit", "exit".cyan());
        println!();
    }

    /// Process a command entered by the user
    pub async fn handle_command(&self, command: &str) -> bool {
        let parts: Vec<&str> = command.trim().split_whitespace().collect();
        match parts.first().copied() {
            Some("exit") | Some("quit") => {
                println!("{}", "Goodbye!".green());
                false
            }
            Some("help") => {
                self.print_help();
                true
            }
            Some("clear") => {
                print!("\x1B[2J\x1B[1;1H");
                true
            }
            Some("ping") => {
                self.handle_ping().await;
                true
            }
            Some("channels") => {
                self.handle_list_channels().await;
                true
            }
            Some("commands") => {
                if parts.len() != 2 {
                    println!("{}", "Usage: commands <channel>".red());
                } else {
                    self.handle_list_commands(parts[1]).await;
                }
                true
            }
            Some("get") => {
                if parts.len() != 3 {
                    println!("{}", "Usage: get <channel> <name>".red());
                } else {
                    self.handle_get_command(parts[1], parts[2]).await;
                }
                true
            }
            Some("add") => {
                if parts.len() < 4 {
                    println!("{}", "Usage: add <channel> <name> <value>".red());
                } else {
                    let value = parts[3..].join(" ");
                    self.handle_add_command(parts[1], parts[2], &value).await;
                }
                true
            }
            Some("remove") => {
                if parts.len() != 3 {
                    println!("{}", "Usage: remove <channel> <name>".red());
                } else {
                    self.handle_remove_command(parts[1], parts[2]).await;
                }
                true
            }
            Some("export") => {
                if parts.len() != 2 {
                    println!("{}", "Usage: export <channel>".red());
                } else {
                    self.handle_export(parts[1]).await;
                }
                true
            }
            Some("") => true,
            Some(cmd) => {
                println!("{} {}", "Unknown command:".red(), cmd);
                true
            }
            None => true,
        }
    }

    /// Handle the ping command
    async fn handle_ping(&self) {
        match self.api.ping().await {
            Ok(response) => {
                println!("{} {}", "Server response:".green(), response);
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    /// Handle the channels command
    async fn handle_list_channels(&self) {
        match self.api.list_channels().await {
            Ok(channels) => {
                if channels.channels.is_empty() {
                    println!("\n{} No channels have commands", "Info:".blue());
                } else {
                    println!("\n{}", "Channels:".green().bold());
                    for channel in channels.channels {
                        println!(
                            "{} ({} commands)",
                            channel.channel.cyan(),
                            channel.commands.to_string().yellow()
                        );
                    }
                }
                println!();
            }
            Err(e) => {
                println!("{}:{}", "Error".red(), e);
            }
        }
    }

    /// Handle the commands listing operation
    async fn handle_list_commands(&self, channel: &str) {
        match self.api.list_commands(channel).await {
            Ok(commands) => {
                if commands.commands.is_empty() {
                    println!(
                        "\n{} No commands found for channel {}",
                        "Info:".blue(),
                        channel
                    );
                } else {
                    println!(
                        "\n{} for channel {}:",
                        "Commands".green().bold(),
                        channel.cyan()
                    );
                    for cmd in commands.commands {
                        println!("{} {}", cmd.command.yellow(), cmd.value);
                    }
                }
                println!();
            }
            Err(e) => {
                println!("{}:{}", "Error".red(), e);
            }
        }
    }

    /// Handle the single command lookup operation
    async fn handle_get_command(&self, channel: &str, name: &str) {
        match self.api.get_command(channel, name).await {
            Ok(cmd) => {
                println!("{} {}", cmd.command.yellow(), cmd.value);
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    /// Handle the add command operation
    async fn handle_add_command(&self, channel: &str, name: &str, value: &str) {
        match self.api.add_command(channel, name, value).await {
            Ok(cmd) => {
                println!(
                    "{} Command {} stored for channel {}",
                    "Success:".green(),
                    cmd.command.yellow(),
                    cmd.channel.cyan()
                );
            }
            Err(e) => {
                println!("{} {}", "Failed to add command:".red(), e);
            }
        }
    }

    /// Handle the remove command operation
    async fn handle_remove_command(&self, channel: &str, name: &str) {
        match self.api.remove_command(channel, name).await {
            Ok(()) => {
                println!(
                    "{} Command {} removed from channel {}",
                    "Success:".green(),
                    name.yellow(),
                    channel.cyan()
                );
            }
            Err(e) => {
                println!("{} {}", "Failed to remove command:".red(), e);
            }
        }
    }

    /// Handle the export operation
    async fn handle_export(&self, channel: &str) {
        match self.api.list_commands(channel).await {
            Ok(commands) => match serde_json::to_string_pretty(&commands) {
                Ok(json) => println!("{json}"),
                Err(e) => println!("{} {}", "Failed to format commands:".red(), e),
            },
            Err(e) => {
                println!("{}:{}", "Error".red(), e);
            }
        }
    }

    /// Run the CLI client
    pub async fn run(&mut self) -> Result<()> {
        println!("\n{}", "Welcome to cclient!".green().bold());
        self.print_help();

        loop {
            let prompt = ">".cyan().bold().to_string();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    self.editor.add_history_entry(line.as_str())?;
                    if !self.handle_command(&line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C".yellow());
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "CTRL-D".yellow());
                    break;
                }
                Err(err) => {
                    println!("{} {:?}", "Error:".red(), err);
                    break;
                }
            }
        }

        // Save history
        if let Err(e) = self.editor.save_history(&self.history_path) {
            println!("{} {}", "Failed to save history:".red(), e);
        }

        Ok(())
    }
}
