//! Artist exporter - export hip hop artists from Spotify to an Excel file
//!
//! This library fetches a client-credentials token from Spotify, searches the
//! catalog for hip hop artists and writes them to a spreadsheet. The `server`
//! module exposes the whole sequence behind a single HTTP route.

/// Client modules for interacting with Spotify and the local spreadsheet
pub mod clients;
/// Export configuration and the token/search/write sequence
pub mod exporter;
/// HTTP surface serving `GET /export-artists`
pub mod server;
