//! ghsearch: gRPC front end for the GitHub code search API
//!
//! Usage:
//!   ghsearch                  - Serve on the default port
//!   ghsearch --port <port>    - Serve on a custom port
//!   ghsearch help             - Show help

use std::env;

use ghsearch::config::ServiceConfig;
use ghsearch::rpc::{self, DEFAULT_PORT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let port = match parse_port(env::args().skip(1)) {
        Ok(Some(port)) => port,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'ghsearch help' for usage");
            std::process::exit(2);
        }
    };

    tracing::info!("Using gRPC server port: {}", port);

    let config = ServiceConfig::from_env()?;
    rpc::server::start_server(config, port).await
}

/// Parse argv into a port to serve on; `Ok(None)` means help was requested.
fn parse_port(mut args: impl Iterator<Item = String>) -> Result<Option<u16>, String> {
    let mut port = DEFAULT_PORT;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" | "-p" => {
                let value = args.next().ok_or("--port requires a value")?;
                port = value
                    .parse()
                    .map_err(|_| format!("invalid port: {}", value))?;
            }
            "help" | "--help" | "-h" => return Ok(None),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(Some(port))
}

fn print_usage() {
    println!("ghsearch - gRPC front end for the GitHub code search API\n");
    println!("Usage: ghsearch [--port <port>]\n");
    println!("Options:");
    println!("  --port, -p <port>  Port to listen on (default {})", DEFAULT_PORT);
    println!("  help               Show this help message");
    println!("\nEnvironment:");
    println!("  GITHUB_BASE_URL      Base URL of the GitHub API (default https://api.github.com)");
    println!("  GITHUB_TIMEOUT_SECS  Outbound request timeout in seconds (default 5)");
    println!("\nCallers must send their GitHub token as 'github-token' request metadata.");
}
