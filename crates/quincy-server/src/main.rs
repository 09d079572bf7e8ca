//! Quincy Server CLI
//!
//! Starts the triage HTTP server.

use quincy_server::{config::ServerConfig, start_server, ServerError, API_KEY_VAR};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        if matches!(e, ServerError::MissingApiKey) {
            eprintln!("FATAL: {}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        ServerConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        // Use default test configuration
        eprintln!("Warning: No config file specified, using default test configuration");
        eprintln!("Usage: quincy-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default_test_config()
    };

    // Start the server
    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Quincy Server - AI-assisted DFIR endpoint triage");
    println!();
    println!("USAGE:");
    println!("    quincy-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    {}     Gemini API credential (required)", API_KEY_VAR);
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 3000)");
    println!("    - model: Gemini model name (default: 'gemini-2.5-flash')");
    println!("    - data_dir: Directory mock telemetry files are served from (default: '.')");
    println!();
}
