use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::api::TMDB_BASE_URL;

pub const APPWRITE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

fn default_catalog_base_url() -> String {
    TMDB_BASE_URL.to_string()
}

fn default_trending_endpoint() -> String {
    APPWRITE_ENDPOINT.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
    /// Bearer token sent on every catalog request.
    #[serde(default)]
    pub api_token: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
            api_token: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrendingConfig {
    #[serde(default = "default_trending_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub project_id: String,
    /// Server API key; optional when the collection allows anonymous access.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub database_id: String,
    #[serde(default)]
    pub collection_id: String,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_trending_endpoint(),
            project_id: String::new(),
            api_key: None,
            database_id: String::new(),
            collection_id: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub trending: TrendingConfig,
}

impl AppConfig {
    /// Config file first, environment second; env always wins so a token
    /// never has to be written to disk.
    pub fn load() -> Result<Self, anyhow::Error> {
        let mut config = Self::load_file()?;
        config.apply_env();
        Ok(config)
    }

    fn load_file() -> Result<Self, anyhow::Error> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "reelscope", "reelscope") {
            let config_path = proj_dirs.config_dir().join("config.json");
            if config_path.exists() {
                let content = fs::read_to_string(config_path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(AppConfig::default())
    }

    fn apply_env(&mut self) {
        if let Ok(token) = env::var("TMDB_API_TOKEN") {
            self.catalog.api_token = token;
        }
        if let Ok(url) = env::var("TMDB_BASE_URL") {
            self.catalog.base_url = url;
        }
        if let Ok(endpoint) = env::var("APPWRITE_ENDPOINT") {
            self.trending.endpoint = endpoint;
        }
        if let Ok(project) = env::var("APPWRITE_PROJECT_ID") {
            self.trending.project_id = project;
        }
        if let Ok(key) = env::var("APPWRITE_API_KEY") {
            self.trending.api_key = Some(key);
        }
        if let Ok(db) = env::var("APPWRITE_DATABASE_ID") {
            self.trending.database_id = db;
        }
        if let Ok(col) = env::var("APPWRITE_COLLECTION_ID") {
            self.trending.collection_id = col;
        }
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "reelscope", "reelscope") {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;
            let config_path = config_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }

    /// The catalog is mandatory; the app refuses to start without a token.
    pub fn catalog_ready(&self) -> bool {
        !self.catalog.api_token.trim().is_empty()
    }

    /// Trending is best-effort; without store credentials the pane shows a
    /// placeholder and popularity writes are skipped.
    pub fn trending_ready(&self) -> bool {
        !self.trending.project_id.is_empty()
            && !self.trending.database_id.is_empty()
            && !self.trending.collection_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_hosted_services() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.base_url, TMDB_BASE_URL);
        assert_eq!(config.trending.endpoint, APPWRITE_ENDPOINT);
        assert!(!config.catalog_ready());
        assert!(!config.trending_ready());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let raw = r#"{"catalog":{"api_token":"tok"},"trending":{"project_id":"p","database_id":"d","collection_id":"c"}}"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.catalog.base_url, TMDB_BASE_URL);
        assert!(config.catalog_ready());
        assert!(config.trending_ready());
        assert!(config.trending.api_key.is_none());
    }
}
