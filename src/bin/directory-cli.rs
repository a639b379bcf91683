use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "directory-cli")]
#[command(about = "Query a running App Directory server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered host URLs
    Hosts {
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Check server liveness
    Health,
}

#[derive(Deserialize)]
struct HostsResponse {
    hosts: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Hosts { json } => {
            let res = client.get(format!("{}/api", base)).send().await?;
            let res = check_status(res).await?;
            if json {
                let body: Value = res.json().await?;
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                let body: HostsResponse = res.json().await?;
                for host in body.hosts {
                    println!("{}", host);
                }
            }
        }
        Commands::Health => {
            let res = client.get(format!("{}/healthz", base)).send().await?;
            let res = check_status(res).await?;
            let body: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, Box<dyn std::error::Error>> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    eprintln!("Error: server returned status {}", status);
    if let Ok(text) = res.text().await {
        eprintln!("Response: {}", text);
    }
    std::process::exit(1);
}
