use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "regex-cli")]
#[command(about = "Smoke-test CLI for the regex test server", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RUSTC_VERSION"), ")"))]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the server's status payload
    Status,
    /// Run a regex test against the server
    Test {
        /// Pattern text
        #[arg(short, long)]
        regex: String,

        /// Replacement text
        #[arg(long, default_value = "")]
        replacement: String,

        /// Engine identifier (server default when omitted)
        #[arg(short, long)]
        engine: Option<String>,

        /// Flag such as `i`; repeatable
        #[arg(short, long = "option")]
        options: Vec<String>,

        /// Subject string; repeatable
        #[arg(short, long = "input")]
        inputs: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client
                .get(format!("{}/status.json", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Test {
            regex,
            replacement,
            engine,
            options,
            inputs,
        } => {
            let mut query: Vec<(&str, String)> = vec![("regex", regex)];
            if !replacement.is_empty() {
                query.push(("replacement", replacement));
            }
            if let Some(engine) = engine {
                query.push(("engine", engine));
            }
            for option in options {
                query.push(("option", option));
            }
            for input in inputs {
                query.push(("input", input));
            }

            let res = client
                .get(format!("{}/test.json", cli.url))
                .query(&query)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("{}", text);
        }
        std::process::exit(1);
    }

    let body: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
