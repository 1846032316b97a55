use std::sync::Arc;

use axum::{Router, extract::State, http::StatusCode, routing::get};
use log::{info, warn};
use tokio::net::TcpListener;

use crate::{
    clients::errors::{Error, Result},
    exporter::{ArtistExport, ExportOutcome},
};

/// Body of a successful export response.
pub const EXPORTED: &str = "Artists exported to Excel successfully";
/// Body returned when the token exchange fails.
pub const TOKEN_FAILED: &str = "Error retrieving access token";
/// Body returned when the search fails or comes back empty.
pub const NO_ARTISTS: &str = "No artists data found";

#[derive(Clone)]
pub struct AppState {
    export: Arc<ArtistExport>,
}

impl AppState {
    pub fn new(export: ArtistExport) -> Self {
        AppState {
            export: Arc::new(export),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/export-artists", get(export_artists))
        .with_state(state)
}

pub async fn serve(port: u16, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://localhost:{port}");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn export_artists(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.export.run().await {
        Ok(ExportOutcome::Exported(_)) => (StatusCode::OK, EXPORTED),
        // Write failures are only logged; the caller still sees success
        Ok(ExportOutcome::ExportFailed(e)) => {
            warn!("Responding 200 although the export failed: {e}");
            (StatusCode::OK, EXPORTED)
        }
        Err(Error::AuthError(_)) => (StatusCode::INTERNAL_SERVER_ERROR, TOKEN_FAILED),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, NO_ARTISTS),
    }
}
