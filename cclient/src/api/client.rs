use reqwest::{Client as ReqwestClient, ClientBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::models::{Channels, Command, Commands, NewCommand};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    client: Arc<ReqwestClient>,
    base_url: String,
    json_suffix: bool,
}

#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    json_suffix: bool,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Target the `.json` route spelling served by deployed instances
    pub fn json_suffix(mut self, enabled: bool) -> Self {
        self.json_suffix = enabled;
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ApiError::Config("Base URL must be provided".to_string()))?;

        let client = ClientBuilder::new()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ApiError::Network)?;

        Ok(ApiClient {
            client: Arc::new(client),
            base_url,
            json_suffix: self.json_suffix,
        })
    }
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// URL of a channel's command listing. The channel is concatenated in
    /// raw, unescaped.
    fn commands_url(&self, channel: &str) -> String {
        let suffix = if self.json_suffix { ".json" } else { "" };
        format!(
            "{}/api/v1/channel/{}/commands{}",
            self.base_url, channel, suffix
        )
    }

    fn command_url(&self, channel: &str, name: &str) -> String {
        format!(
            "{}/api/v1/channel/{}/command/{}",
            self.base_url, channel, name
        )
    }

    fn channels_url(&self) -> String {
        format!("{}/api/v1/channels", self.base_url)
    }

    fn ping_url(&self) -> String {
        format!("{}/api/v1/ping", self.base_url)
    }

    async fn request<T, R>(&self, method: reqwest::Method, url: &str, body: Option<&T>) -> Result<R>
    where
        T: Serialize + Send + Sync + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!("Making request to {}", url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::Network)?;

        if response.status().is_success() {
            return response
                .json::<R>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()));
        }

        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Unknown error"));

        error!("Server error: {} - {}", status, message);

        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<String> {
        let response = self
            .client
            .get(self.ping_url())
            .send()
            .await
            .map_err(ApiError::Network)?;

        if response.status().is_success() {
            response
                .text()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            Err(ApiError::Server {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("Unknown error")),
            })
        }
    }

    /// Fetch a channel's command listing
    #[instrument(skip(self))]
    pub async fn list_commands(&self, channel: &str) -> Result<Commands> {
        self.request::<(), _>(reqwest::Method::GET, &self.commands_url(channel), None)
            .await
    }

    /// Look up a single command by trigger name
    #[instrument(skip(self))]
    pub async fn get_command(&self, channel: &str, name: &str) -> Result<Command> {
        self.request::<(), _>(reqwest::Method::GET, &self.command_url(channel, name), None)
            .await
    }

    /// Create a command, or replace the value of an existing trigger
    #[instrument(skip(self))]
    pub async fn add_command(&self, channel: &str, name: &str, value: &str) -> Result<Command> {
        let new_command = NewCommand {
            command: name.to_string(),
            value: value.to_string(),
        };

        self.request(
            reqwest::Method::POST,
            &self.commands_url(channel),
            Some(&new_command),
        )
        .await
    }

    /// Remove a command by trigger name
    #[instrument(skip(self))]
    pub async fn remove_command(&self, channel: &str, name: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.command_url(channel, name))
            .send()
            .await
            .map_err(ApiError::Network)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Server {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("Unknown error")),
            })
        }
    }

    /// Fetch the index of channels that own commands
    #[instrument(skip(self))]
    pub async fn list_channels(&self) -> Result<Channels> {
        self.request::<(), _>(reqwest::Method::GET, &self.channels_url(), None)
            .await
    }
}
