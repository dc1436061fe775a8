use clap::Parser;
use std::env;

mod api;
mod cli;
mod models;

use api::ApiClient;
use cli::Client;

const DEV_SERVER: &str = "http://127.0.0.1:45861";

#[derive(Parser, Debug)]
#[command(about = "Terminal client for the channel command service")]
struct Args {
    /// Server base URL; falls back to CCLIENT_SERVER, then the
    /// development endpoint
    #[arg(long)]
    server: Option<String>,

    /// Request the `.json` route spelling served by deployed instances
    #[arg(long)]
    json_suffix: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let server = args
        .server
        .or_else(|| env::var("CCLIENT_SERVER").ok())
        .unwrap_or_else(|| DEV_SERVER.into());

    let api = ApiClient::builder()
        .base_url(server)
        .json_suffix(args.json_suffix)
        .build()?;

    let mut client = Client::new(api)?;
    client.run().await?;

    Ok(())
}
