/// One artist as returned by the catalog search, flattened for export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtistRecord {
    pub name: String,
    pub popularity: Option<u32>,
    pub followers: Option<u64>,
    pub genres: Vec<String>,
}

impl ArtistRecord {
    // Genre cell content, genres kept in catalog order
    pub fn genre_label(&self) -> String {
        self.genres.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_label_joins_in_order() {
        let artist = ArtistRecord {
            genres: vec!["hip hop".into(), "rap".into(), "trap".into()],
            ..Default::default()
        };
        assert_eq!(artist.genre_label(), "hip hop, rap, trap");
    }

    #[test]
    fn genre_label_empty_without_genres() {
        assert_eq!(ArtistRecord::default().genre_label(), "");
    }
}
