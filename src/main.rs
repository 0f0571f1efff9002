//! Command-line front end for the headers auth component.
//!
//! ```text
//! otelcol-auth-headers check   --config headers.toml
//! otelcol-auth-headers convert --config headers.toml --format json
//! otelcol-auth-headers watch   --config headers.toml
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use otelcol_auth_headers::auth::AuthArguments;
use otelcol_auth_headers::config::loader::load_config;
use otelcol_auth_headers::config::watcher::ConfigWatcher;
use otelcol_auth_headers::extension::HeadersSetterConfig;
use otelcol_auth_headers::lifecycle::{signals, Shutdown};
use otelcol_auth_headers::observability::init_logging;

#[derive(Parser)]
#[command(name = "otelcol-auth-headers")]
#[command(about = "Validate and convert otelcol.auth.headers configuration", long_about = None)]
struct Cli {
    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the headers_setter extension configuration
    Convert {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print a fresh conversion on every valid change until interrupted
    Watch {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check { config } => {
            let args = load_config(&config)?;
            println!("ok ({} headers)", args.len());
        }
        Commands::Convert { config, format } => {
            let args = load_config(&config)?;
            print_config(&args.convert(), format)?;
        }
        Commands::Watch { config, format } => watch(&config, format).await?,
    }

    Ok(())
}

async fn watch(path: &Path, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    // The initial file must be valid; later invalid edits are only logged.
    let args = load_config(path)?;
    print_config(&args.convert(), format)?;

    let (watcher, mut updates) = ConfigWatcher::new(path);
    let _watcher = watcher.run()?;

    let shutdown = Shutdown::new();
    let mut stop = shutdown.subscribe();
    tokio::spawn(async move {
        if let Err(e) = signals::shutdown_on_ctrl_c(&shutdown).await {
            tracing::error!("Failed to listen for interrupt: {}", e);
        }
    });

    loop {
        tokio::select! {
            _ = stop.recv() => break,
            update = updates.recv() => match update {
                Some(update) => {
                    if let Err(e) = print_config(&update, format) {
                        tracing::error!("Failed to print configuration: {}", e);
                    }
                }
                None => break,
            },
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn print_config(config: &HeadersSetterConfig, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(config)?,
        Format::Toml => toml::to_string_pretty(config)?,
    };
    println!("{}", rendered);
    Ok(())
}
