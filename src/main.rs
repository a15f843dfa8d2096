//! Status server entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};

use status_server::api::routes::ROUTE_TABLE;
use status_server::config::Config;
use status_server::{server, telemetry};

/// Minimal HTTP status service.
#[derive(Parser, Debug)]
#[command(name = "status-server")]
#[command(about = "Serves static root and health status endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Bind address (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the route table.
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match &args.command {
        Some(Command::CheckConfig) => cmd_check_config(&args),
        Some(Command::Routes) => {
            cmd_routes();
            Ok(())
        }
        Some(Command::Serve) | None => cmd_serve(&args).await,
    }
}

/// Load configuration and apply CLI overrides.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    Ok(Config::load()?.with_overrides(args.host.clone(), args.port))
}

/// Check configuration validity.
fn cmd_check_config(args: &Args) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("STATUS SERVER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match load_config(args) {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen: {}:{}", config.host, config.port);
    println!("  Docs: {}", if config.enable_docs { "Enabled" } else { "Disabled" });
    println!("  Log: {} ({})", config.rust_log, config.log_format());
    match config.metrics_port {
        Some(port) => println!("  Metrics: port {}", port),
        None => println!("  Metrics: Disabled"),
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the route table.
fn cmd_routes() {
    for (method, path, description) in ROUTE_TABLE {
        println!("{:<6} {:<14} {}", method, path, description);
    }
}

/// Run the HTTP server.
async fn cmd_serve(args: &Args) -> anyhow::Result<()> {
    let config = match load_config(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    if let Err(e) = telemetry::init_tracing(&config, args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Docs: {}", if config.enable_docs { "enabled" } else { "disabled" });

    server::serve(config).await?;
    Ok(())
}
