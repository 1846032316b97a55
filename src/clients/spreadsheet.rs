use std::path::{Path, PathBuf};

use log::{debug, info};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::clients::{
    entities::ArtistRecord,
    errors::{Error, Result},
};

/// Workbook written by every successful export, relative to the working directory.
pub const OUTPUT_PATH: &str = "HipHopArtistsForGregV0.xlsx";
/// Name of the single worksheet in the workbook.
pub const SHEET_NAME: &str = "Hip Hop Artists";

#[derive(Clone, Copy)]
enum Column {
    Name,
    Popularity,
    Followers,
    Genre,
}

impl Column {
    const ALL: [Column; 4] = [
        Column::Name,
        Column::Popularity,
        Column::Followers,
        Column::Genre,
    ];

    fn header(self) -> &'static str {
        match self {
            Column::Name => "Artist Name",
            Column::Popularity => "Popularity",
            Column::Followers => "Followers",
            Column::Genre => "Genre",
        }
    }

    fn width(self) -> f64 {
        match self {
            Column::Name | Column::Genre => 30.0,
            Column::Popularity | Column::Followers => 15.0,
        }
    }

    fn index(self) -> u16 {
        self as u16
    }
}

pub struct SpreadsheetExporter {
    path: PathBuf,
}

impl Default for SpreadsheetExporter {
    fn default() -> Self {
        SpreadsheetExporter::new(OUTPUT_PATH)
    }
}

impl SpreadsheetExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SpreadsheetExporter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Write one row per artist, in the order given, replacing any previous file.
    // There is no atomic replace: a failed write may leave a truncated file behind.
    pub async fn export(&self, records: &[ArtistRecord]) -> Result<()> {
        debug!("Building workbook with {} artists", records.len());
        let buffer = build_workbook(records)?;
        tokio::fs::write(&self.path, buffer)
            .await
            .map_err(|e| Error::ExportError(format!("{}: {e}", self.path.display())))?;
        info!(
            "Excel file created successfully! {} artists written to {:?}",
            records.len(),
            self.path
        );
        Ok(())
    }
}

fn build_workbook(records: &[ArtistRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for column in Column::ALL {
        worksheet.set_column_width(column.index(), column.width())?;
        worksheet.write_string(0, column.index(), column.header())?;
    }
    for (row, artist) in (1u32..).zip(records) {
        write_artist(worksheet, row, artist)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[allow(clippy::cast_precision_loss)]
fn write_artist(worksheet: &mut Worksheet, row: u32, artist: &ArtistRecord) -> Result<()> {
    worksheet.write_string(row, Column::Name.index(), &artist.name)?;
    // Absent values leave the cell blank
    if let Some(popularity) = artist.popularity {
        worksheet.write_number(row, Column::Popularity.index(), f64::from(popularity))?;
    }
    if let Some(followers) = artist.followers {
        worksheet.write_number(row, Column::Followers.index(), followers as f64)?;
    }
    if !artist.genres.is_empty() {
        worksheet.write_string(row, Column::Genre.index(), artist.genre_label())?;
    }
    Ok(())
}
