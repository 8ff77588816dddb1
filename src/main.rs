use crate::app_config::AppConfig;
use crate::screens::navigation::Route;
use crate::session::FileTokenStore;
use crate::wipe::{WipeForm, WipeMethod};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

mod api;
mod app_config;
mod certificate;
mod extensions;
mod health;
mod screens;
mod session;
mod verification;
mod wipe;

/// Client for the drive sanitization service: wipe drives, check their health and manage wipe certificates.
#[derive(Parser)]
#[command(name = "wipedash")]
#[command(version)]
#[command(about = "Secure drive wiping, health monitoring and certificate management")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the dashboard, or the landing page when signed out
    Overview,

    /// Securely wipe a drive and obtain a certificate
    Wipe {
        /// Drive ID or serial number, e.g. WD-WCAV12345678
        #[arg(long)]
        drive_id: String,
        /// Drive model, e.g. "WD Blue SN570 1TB"
        #[arg(long)]
        model: String,
        /// Firmware version, e.g. 233010WD
        #[arg(long)]
        firmware: String,
        /// Capacity in GB
        #[arg(long)]
        capacity: String,
        /// Device path, e.g. /dev/sda or \\?\PhysicalDrive0
        #[arg(long)]
        dev_path: String,
        #[arg(long, value_enum)]
        method: WipeMethod,
    },

    /// List certificates, optionally filtered by ID, device or issuer
    Certificates {
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show one certificate
    Certificate { id: String },

    /// Download the signed PDF of a certificate
    Download {
        id: String,
        /// Directory to save the PDF in, defaults to the configured download directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a certificate PDF
    Verify { file: PathBuf },

    /// Check the health of a drive
    Health { drive_id: String },

    /// List the sections of the dashboard
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    debug!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(base_url = config.api().base_url(), "✅ Loaded configuration");

    let tokens = Arc::new(FileTokenStore::new(config.session().token_file()));
    let api = api::new_client(&config, tokens)?;

    let output = match cli.command.unwrap_or(Commands::Overview) {
        Commands::Login { email, password } => screens::account::login(&api, &email, &password).await.to_string(),
        Commands::Register { username, email, password } => {
            screens::account::register(&api, &username, &email, &password).await.to_string()
        }
        Commands::Logout => screens::account::logout(&api).await.to_string(),
        Commands::Overview => screens::dashboard::load(&api).await.to_string(),
        Commands::Wipe {
            drive_id,
            model,
            firmware,
            capacity,
            dev_path,
            method,
        } => {
            let form = WipeForm {
                drive_id,
                model,
                firmware,
                capacity_gb: capacity,
                dev_path,
                method: Some(method),
            };
            screens::wipe::submit(&api, &form).await.to_string()
        }
        Commands::Certificates { search } => screens::certificates::load(&api, &search).await.to_string(),
        Commands::Certificate { id } => screens::certificate_detail::load(&api, &id).await.to_string(),
        Commands::Download { id, output } => {
            let directory = output.unwrap_or_else(|| config.download().directory().to_path_buf());
            screens::download::download(&api, &id, &directory).await.to_string()
        }
        Commands::Verify { file } => screens::verify::verify(&api, &file).await.to_string(),
        Commands::Health { drive_id } => screens::health::check(&api, &drive_id).await.to_string(),
        Commands::Routes => Route::ALL.iter().map(Route::to_string).collect::<Vec<_>>().join("\n"),
    };

    println!("{}", output);
    Ok(())
}
