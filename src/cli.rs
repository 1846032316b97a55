use artist_exporter::{
    clients::{errors::Result, spotify::Credentials},
    exporter::{ArtistExport, ConfigBuilder, ExportOutcome},
    server::{self, AppState},
};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(name = "artist-exporter")]
#[command(version, about = "Export hip hop artists from Spotify to an Excel file", long_about = None)]
struct Cli {
    /// Spotify application client id
    #[arg(long, env = "CLIENT_ID", hide_env_values = true)]
    client_id: String,

    /// Spotify application client secret
    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve GET /export-artists (default)
    Serve {},
    /// Run a single export and exit
    Export {},
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building config ...");
    let config = ConfigBuilder::new()
        .credentials(Credentials::new(cli.client_id, cli.client_secret))
        .build()?;
    let export = ArtistExport::new(config);

    match cli.command.unwrap_or(Commands::Serve {}) {
        Commands::Serve {} => server::serve(cli.port, AppState::new(export)).await,
        Commands::Export {} => export_once(&export).await,
    }
}

async fn export_once(export: &ArtistExport) -> Result<()> {
    match export.run().await? {
        ExportOutcome::Exported(count) => {
            info!(
                "Exported {count} artists to {:?}",
                export.config().spreadsheet.path()
            );
            Ok(())
        }
        ExportOutcome::ExportFailed(e) => Err(e),
    }
}
