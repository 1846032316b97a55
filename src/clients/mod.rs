/// Data entities for exported artists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;
/// Excel workbook writer
pub mod spreadsheet;

pub use spotify::SpotifyClient;
pub use spreadsheet::SpreadsheetExporter;
