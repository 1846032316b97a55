use std::path::PathBuf;

use log::{debug, error, info};

use crate::clients::{
    SpotifyClient, SpreadsheetExporter,
    errors::{Error, Result},
    spotify::Credentials,
};

// Configuration for the ArtistExport struct
pub struct Config {
    pub spotify: SpotifyClient,
    pub spreadsheet: SpreadsheetExporter,
}

#[derive(Default)]
pub struct ConfigBuilder {
    credentials: Option<Credentials>,
    token_url: Option<String>,
    search_url: Option<String>,
    output_path: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<Config> {
        let credentials = self.credentials.ok_or_else(|| {
            Error::ConfigurationError("Missing CLIENT_ID / CLIENT_SECRET".into())
        })?;
        if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
            return Err(Error::ConfigurationError(
                "CLIENT_ID and CLIENT_SECRET must not be empty".into(),
            ));
        }

        let mut spotify = SpotifyClient::new(credentials);
        if let Some(url) = self.token_url {
            spotify = spotify.with_token_url(url);
        }
        if let Some(url) = self.search_url {
            spotify = spotify.with_search_url(url);
        }
        let spreadsheet = match self.output_path {
            Some(path) => SpreadsheetExporter::new(path),
            None => SpreadsheetExporter::default(),
        };

        Ok(Config {
            spotify,
            spreadsheet,
        })
    }
}

/// How an export ended once both upstream calls succeeded.
#[derive(Debug)]
pub enum ExportOutcome {
    /// Workbook written with this many artist rows.
    Exported(usize),
    /// Artists were fetched but the workbook could not be written.
    ExportFailed(Error),
}

// Runs token fetch, artist search and workbook write, strictly in that order.
// Nothing is shared between runs: every call fetches a fresh token.
pub struct ArtistExport {
    config: Config,
}

impl ArtistExport {
    pub fn new(config: Config) -> Self {
        ArtistExport { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run(&self) -> Result<ExportOutcome> {
        debug!("Fetching access token ...");
        let token = self
            .config
            .spotify
            .fetch_access_token()
            .await
            .inspect_err(|e| error!("Error fetching access token: {e}"))?;

        debug!("Fetching hip hop artists ...");
        let artists = self
            .config
            .spotify
            .fetch_artists(&token)
            .await
            .inspect_err(|e| error!("Error fetching hip hop artists: {e}"))?;
        if artists.is_empty() {
            error!("No artists data found");
            return Err(Error::EmptyResult);
        }

        debug!("Exporting {} artists ...", artists.len());
        match self.config.spreadsheet.export(&artists).await {
            Ok(()) => {
                info!("Exported {} artists", artists.len());
                Ok(ExportOutcome::Exported(artists.len()))
            }
            Err(e) => {
                error!("Error writing Excel file: {e}");
                Ok(ExportOutcome::ExportFailed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::spreadsheet::OUTPUT_PATH;

    #[test]
    fn build_requires_credentials() {
        let result = ConfigBuilder::new().build();
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn build_rejects_empty_secret() {
        let result = ConfigBuilder::new()
            .credentials(Credentials::new("id", ""))
            .build();
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn build_defaults_output_path() {
        let config = ConfigBuilder::new()
            .credentials(Credentials::new("id", "secret"))
            .build()
            .unwrap();
        assert_eq!(config.spreadsheet.path(), std::path::Path::new(OUTPUT_PATH));
    }

    #[test]
    fn build_overrides_output_path() {
        let config = ConfigBuilder::new()
            .credentials(Credentials::new("id", "secret"))
            .output_path("/tmp/elsewhere.xlsx")
            .build()
            .unwrap();
        assert_eq!(
            config.spreadsheet.path(),
            std::path::Path::new("/tmp/elsewhere.xlsx")
        );
    }
}
