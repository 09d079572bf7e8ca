//! Quincy Client CLI
//!
//! Runs one triage analysis against a server and writes the rendered
//! report to stdout, optionally exporting the findings file.

use quincy_client::{render_findings, write_export, AnalysisClient, ClientError};
use std::env;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ClientError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    }

    if args.len() < 3 {
        eprintln!("Usage: quincy-client <server-url> <telemetry-file> [--export <dir>]");
        process::exit(2);
    }

    let server_url = &args[1];
    let input_path = &args[2];

    let export_dir: Option<PathBuf> = if args.len() > 4 && args[3] == "--export" {
        Some(PathBuf::from(&args[4]))
    } else {
        None
    };

    let raw_data = std::fs::read_to_string(input_path)?;

    let mut client = AnalysisClient::new(server_url.trim_end_matches('/'));
    let findings = client.analyze(&raw_data).await?;

    println!("{}", render_findings(findings));

    if let Some(dir) = export_dir {
        let path = write_export(client.findings(), &dir)?;
        eprintln!("Findings exported to {}", path.display());
    }

    Ok(())
}

fn print_help() {
    println!("Quincy Client - AI-assisted DFIR endpoint triage");
    println!();
    println!("USAGE:");
    println!("    quincy-client <server-url> <telemetry-file> [--export <dir>]");
    println!();
    println!("ARGUMENTS:");
    println!("    <server-url>       Triage server base URL (e.g., http://localhost:3000)");
    println!("    <telemetry-file>   Local file with raw process and network data");
    println!();
    println!("OPTIONS:");
    println!("    --export <dir>     Also write dfir_findings.json into <dir>");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    quincy-client http://localhost:3000 processes.log --export ./reports");
    println!();
}
