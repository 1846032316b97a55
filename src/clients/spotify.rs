use std::fmt;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::clients::{
    entities::ArtistRecord,
    errors::{Error, Result},
};

/// Client-credentials token endpoint.
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Catalog search endpoint.
pub const SEARCH_URL: &str = "https://api.spotify.com/v1/search";
/// Search filter sent with every artist query.
pub const GENRE_QUERY: &str = "genre:hip-hop";
/// Page size of the artist search; no further pages are requested.
pub const SEARCH_LIMIT: usize = 50;

/// Client id/secret pair used for the client-credentials exchange.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token for a single export. Never cached or refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    artists: ArtistPage,
}

#[derive(Deserialize, Debug)]
struct ArtistPage {
    items: Option<Vec<APIArtist>>,
}

#[derive(Deserialize, Debug)]
struct Followers {
    total: Option<u64>,
}

#[derive(Deserialize, Debug)]
struct APIArtist {
    name: Option<String>,
    popularity: Option<u32>,
    followers: Option<Followers>,
    genres: Option<Vec<String>>,
}

impl From<APIArtist> for ArtistRecord {
    fn from(a: APIArtist) -> ArtistRecord {
        ArtistRecord {
            name: a.name.unwrap_or_default(),
            popularity: a.popularity,
            followers: a.followers.and_then(|f| f.total),
            genres: a.genres.unwrap_or_default(),
        }
    }
}

pub struct SpotifyClient {
    http: Client,
    credentials: Credentials,
    token_url: String,
    search_url: String,
}

impl SpotifyClient {
    pub fn new(credentials: Credentials) -> Self {
        SpotifyClient {
            http: Client::new(),
            credentials,
            token_url: TOKEN_URL.to_string(),
            search_url: SEARCH_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    #[must_use]
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    // Exchange the client id/secret for a fresh bearer token.
    // Any transport failure, non-2xx status or missing token is an AuthError.
    pub async fn fetch_access_token(&self) -> Result<AccessToken> {
        debug!("Requesting access token from {}", self.token_url);
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::AuthError(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::AuthError(e.to_string()))?;
        let token: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| Error::AuthError(format!("malformed token response: {e}")))?;

        match token.access_token {
            Some(value) if !value.is_empty() => Ok(AccessToken(value)),
            _ => Err(Error::AuthError(
                "token response carried no access_token".into(),
            )),
        }
    }

    // Fetch the first page of artists matching the genre filter.
    // An empty page is returned as-is, the caller decides what it means.
    pub async fn fetch_artists(&self, token: &AccessToken) -> Result<Vec<ArtistRecord>> {
        debug!("Searching {} for {GENRE_QUERY}", self.search_url);
        let limit = SEARCH_LIMIT.to_string();
        let response = self
            .http
            .get(&self.search_url)
            .bearer_auth(token.as_str())
            .query(&[
                ("q", GENRE_QUERY),
                ("type", "artist"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::QueryError(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::QueryError(e.to_string()))?;
        let search: SearchResponse = serde_json::from_slice(&body)
            .map_err(|e| Error::QueryError(format!("malformed search response: {e}")))?;

        let artists: Vec<ArtistRecord> = search
            .artists
            .items
            .unwrap_or_default()
            .into_iter()
            .take(SEARCH_LIMIT)
            .map(ArtistRecord::from)
            .collect();
        debug!("Search returned {} artists", artists.len());
        Ok(artists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ArtistRecord {
        let artist: APIArtist = serde_json::from_value(value).unwrap();
        ArtistRecord::from(artist)
    }

    #[test]
    fn full_artist_keeps_every_field() {
        let artist = parse(json!({
            "name": "MC Test",
            "popularity": 42,
            "followers": { "href": null, "total": 1000 },
            "genres": ["hip hop", "rap"],
            "id": "0abc",
            "type": "artist"
        }));
        assert_eq!(
            artist,
            ArtistRecord {
                name: "MC Test".into(),
                popularity: Some(42),
                followers: Some(1000),
                genres: vec!["hip hop".into(), "rap".into()],
            }
        );
    }

    #[test]
    fn absent_fields_stay_absent() {
        let artist = parse(json!({ "name": "Nobody" }));
        assert_eq!(artist.name, "Nobody");
        assert_eq!(artist.popularity, None);
        assert_eq!(artist.followers, None);
        assert!(artist.genres.is_empty());

        let artist = parse(json!({ "followers": null, "genres": null }));
        assert_eq!(artist.name, "");
        assert_eq!(artist.followers, None);
    }

    #[test]
    fn search_page_without_items_is_empty() {
        let search: SearchResponse =
            serde_json::from_value(json!({ "artists": { "total": 0 } })).unwrap();
        assert!(search.artists.items.is_none());
    }

    #[test]
    fn search_response_without_artists_is_rejected() {
        let search = serde_json::from_value::<SearchResponse>(json!({ "tracks": {} }));
        assert!(search.is_err());
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let creds = Credentials::new("my-id", "top-secret");
        let printed = format!("{creds:?}");
        assert!(printed.contains("my-id"));
        assert!(!printed.contains("top-secret"));

        let token = AccessToken("bearer-value".into());
        assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
    }
}
