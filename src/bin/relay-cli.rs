//! Command-line client: uploads a script to the relay or fetches a greeting.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Command-line client for the upload relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a script file ("-" reads stdin) and print the result
    Upload {
        file: PathBuf,

        /// Upload path on the relay
        #[arg(long, default_value = "/upload")]
        path: String,
    },
    /// Fetch a greeting route from a greeting server
    Greet {
        #[arg(default_value = "/")]
        route: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Upload { file, path } => {
            let body = read_input(&file)?;
            let res = client
                .post(format!("{}{}", cli.url, path))
                .header(CONTENT_TYPE, "text/plain")
                .body(body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Greet { route } => {
            let res = client.get(format!("{}{}", cli.url, route)).send().await?;
            let status = res.status();
            let text = res.text().await?;
            if status.is_success() {
                println!("{}", text);
            } else {
                eprintln!("Error: greeting server returned status {}", status);
                eprintln!("Response: {}", text);
            }
        }
    }

    Ok(())
}

fn read_input(file: &Path) -> std::io::Result<Vec<u8>> {
    if file.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read(file)
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => {
            if !status.is_success() {
                eprintln!("Error: relay returned status {}", status);
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Err(_) => {
            eprintln!("Error: relay returned status {} with a non-JSON body", status);
            eprintln!("Response: {}", text);
        }
    }
    Ok(())
}
