use clap::{Parser, Subcommand};
use serde_json::Value;

use cnpj_lookup::cnpj::{self, Cnpj};

#[derive(Parser)]
#[command(name = "cnpj-cli")]
#[command(about = "Command-line client for the CNPJ lookup API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the company registered under a CNPJ
    Lookup { cnpj: String },
    /// Check that the service is up
    Health,
    /// Validate a CNPJ locally, without contacting the service
    Validate { cnpj: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Lookup { cnpj } => {
            let res = client
                .post(format!("{}/", base))
                .form(&[("cnpj", cnpj.as_str())])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/healthz", base)).send().await?;
            if res.status().is_success() {
                println!("ok");
            } else {
                eprintln!("Error: health check returned status {}", res.status());
            }
        }
        Commands::Validate { cnpj: input } => match input.parse::<Cnpj>() {
            Ok(valid) => println!("{} ({}) is valid", valid.masked(), valid),
            Err(_) => {
                let digits = cnpj::unmask(&input);
                eprintln!(
                    "{} is invalid ({} digits, expected {})",
                    input,
                    digits.len(),
                    cnpj::CNPJ_LENGTH
                );
            }
        },
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if status == reqwest::StatusCode::NO_CONTENT {
        eprintln!("No company found");
        return Ok(());
    }

    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Some(message) = json.get("message").and_then(Value::as_str) {
            eprintln!("{}", message);
        }
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
