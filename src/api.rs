use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
/// Local asset rendered when a movie carries no poster path.
pub const NO_POSTER_ASSET: &str = "assets/no-poster.png";

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub original_language: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Full poster URL, or the bundled placeholder when the catalog has none.
    pub fn poster_url(&self) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", POSTER_BASE_URL, path),
            _ => NO_POSTER_ASSET.to_string(),
        }
    }

    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(avg) => format!("{:.1}", avg),
            None => "N/A".to_string(),
        }
    }

    pub fn language_label(&self) -> &str {
        self.original_language.as_deref().unwrap_or("N/A")
    }

    /// Release year pulled from the `YYYY-MM-DD` date the catalog sends.
    pub fn release_year(&self) -> String {
        self.release_date
            .as_deref()
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.format("%Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub overview: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub original_language: Option<String>,
    pub tagline: Option<String>,
    pub poster_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Video {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Video {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

impl VideoList {
    /// First YouTube-hosted trailer, matching what the overlay embeds.
    pub fn trailer(&self) -> Option<&Video> {
        self.results
            .iter()
            .find(|v| v.kind == "Trailer" && v.site == "YouTube")
    }
}

/// An HTTP-success body can still encode a logical failure:
/// `{"response": "False", "Error": "..."}`.
fn sentinel_error(value: &serde_json::Value) -> Option<String> {
    if value.get("response").and_then(|v| v.as_str()) == Some("False") {
        let msg = value
            .get("Error")
            .and_then(|v| v.as_str())
            .unwrap_or("catalog refused the request");
        return Some(msg.to_string());
    }
    None
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub base_url: String,
    token: String,
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: String, token: String) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url[..base_url.len() - 1].to_string()
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .user_agent("reelscope")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url,
            token,
            client,
        }
    }

    pub async fn discover(&self, page: u32) -> Result<MoviePage, CatalogError> {
        self.get_json(
            "/discover/movie",
            &[
                ("sort_by", "popularity.desc".to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage, CatalogError> {
        self.get_json(
            "/search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    pub async fn get_movie(&self, id: i64) -> Result<MovieDetails, CatalogError> {
        self.get_json(&format!("/movie/{}", id), &[]).await
    }

    pub async fn get_videos(&self, id: i64) -> Result<VideoList, CatalogError> {
        self.get_json(&format!("/movie/{}/videos", id), &[]).await
    }

    /// Single attempt, no retry. The body is decoded through a raw value
    /// first so a sentinel failure is caught before shape-checking.
    async fn get_json<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T, CatalogError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .query(params)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Transport(path.to_string(), e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16(), path.to_string()));
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        if let Some(msg) = sentinel_error(&value) {
            return Err(CatalogError::Sentinel(msg));
        }

        serde_json::from_value(value).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
