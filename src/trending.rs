use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::Movie;
use crate::config::TrendingConfig;
use crate::errors::TrendingError;

/// How many trending terms the UI shows.
pub const TRENDING_LIMIT: usize = 5;

/// One popularity record, keyed by search term. Owned by the external store;
/// never cached beyond the last fetch.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrendingEntry {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: Option<i64>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingEntry>,
}

/// What `record_search` decided to do, split out so the upsert rule is
/// testable without a live store.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertPlan {
    Create {
        search_term: String,
        movie_id: i64,
        poster_url: String,
    },
    Increment {
        document_id: String,
        count: u64,
    },
}

/// First search of a term creates a count-1 record; repeats increment the
/// record `find_by_term` returned. Concurrent increments can lose an update
/// (last write wins) — accepted, not engineered around.
pub fn plan_record(existing: Option<TrendingEntry>, term: &str, movie: &Movie) -> UpsertPlan {
    match existing {
        Some(doc) => UpsertPlan::Increment {
            document_id: doc.id,
            count: doc.count + 1,
        },
        None => UpsertPlan::Create {
            search_term: term.to_string(),
            movie_id: movie.id,
            poster_url: movie.poster_url(),
        },
    }
}

fn equal_query(attribute: &str, value: &str) -> String {
    json!({"method": "equal", "attribute": attribute, "values": [value]}).to_string()
}

fn order_desc_query(attribute: &str) -> String {
    json!({"method": "orderDesc", "attribute": attribute}).to_string()
}

fn limit_query(limit: usize) -> String {
    json!({"method": "limit", "values": [limit]}).to_string()
}

#[derive(Debug, Clone)]
pub struct TrendingClient {
    endpoint: String,
    project_id: String,
    api_key: Option<String>,
    database_id: String,
    collection_id: String,
    client: reqwest::Client,
}

impl TrendingClient {
    pub fn new(cfg: &TrendingConfig) -> Self {
        let endpoint = if cfg.endpoint.ends_with('/') {
            cfg.endpoint[..cfg.endpoint.len() - 1].to_string()
        } else {
            cfg.endpoint.clone()
        };

        let client = reqwest::Client::builder()
            .user_agent("reelscope")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            endpoint,
            project_id: cfg.project_id.clone(),
            api_key: cfg.api_key.clone(),
            database_id: cfg.database_id.clone(),
            collection_id: cfg.collection_id.clone(),
            client,
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    fn apply_headers(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let req = req.header("X-Appwrite-Project", &self.project_id);
        match &self.api_key {
            Some(key) => req.header("X-Appwrite-Key", key),
            None => req,
        }
    }

    async fn list(&self, queries: &[String]) -> Result<Vec<TrendingEntry>, TrendingError> {
        let url = self.documents_url();
        let params: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        let resp = self
            .apply_headers(self.client.get(&url).query(&params))
            .send()
            .await
            .map_err(|e| TrendingError::Transport(url.clone(), e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrendingError::Status(status.as_u16(), url));
        }

        let list: DocumentList = resp
            .json()
            .await
            .map_err(|e| TrendingError::Parse(e.to_string()))?;
        Ok(list.documents)
    }

    /// Equality lookup on the term. With duplicate documents the store's
    /// first result wins; which one that is stays store-defined.
    pub async fn find_by_term(&self, term: &str) -> Result<Option<TrendingEntry>, TrendingError> {
        let queries = [equal_query("searchTerm", term)];
        let docs = self.list(&queries).await?;
        Ok(docs.into_iter().next())
    }

    /// Upsert-or-increment for a completed search. Callers treat this as
    /// fire-and-forget; the result only feeds the observability channel.
    pub async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), TrendingError> {
        let existing = self.find_by_term(term).await?;
        match plan_record(existing, term, movie) {
            UpsertPlan::Increment { document_id, count } => {
                self.update_count(&document_id, count).await
            }
            UpsertPlan::Create {
                search_term,
                movie_id,
                poster_url,
            } => self.create_entry(&search_term, movie_id, &poster_url).await,
        }
    }

    /// Up to `limit` records, highest count first. Tie order is whatever the
    /// store returns.
    pub async fn top_trending(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingError> {
        let queries = [limit_query(limit), order_desc_query("count")];
        self.list(&queries).await
    }

    async fn create_entry(
        &self,
        term: &str,
        movie_id: i64,
        poster_url: &str,
    ) -> Result<(), TrendingError> {
        let url = self.documents_url();
        let body = json!({
            "documentId": "unique()",
            "data": {
                "searchTerm": term,
                "count": 1,
                "movie_id": movie_id,
                "poster_url": poster_url,
            }
        });
        let resp = self
            .apply_headers(self.client.post(&url).json(&body))
            .send()
            .await
            .map_err(|e| TrendingError::Transport(url.clone(), e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrendingError::Status(status.as_u16(), url));
        }
        Ok(())
    }

    async fn update_count(&self, document_id: &str, count: u64) -> Result<(), TrendingError> {
        let url = format!("{}/{}", self.documents_url(), document_id);
        let body = json!({"data": {"count": count}});
        let resp = self
            .apply_headers(self.client.patch(&url).json(&body))
            .send()
            .await
            .map_err(|e| TrendingError::Transport(url.clone(), e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrendingError::Status(status.as_u16(), url));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie {
            id: 268,
            title: "Batman".to_string(),
            poster_path: Some("/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg".to_string()),
            vote_average: Some(7.2),
            original_language: Some("en".to_string()),
            release_date: Some("1989-06-21".to_string()),
            overview: None,
        }
    }

    #[test]
    fn first_search_creates_a_count_one_record() {
        let plan = plan_record(None, "bat", &sample_movie());
        assert_eq!(
            plan,
            UpsertPlan::Create {
                search_term: "bat".to_string(),
                movie_id: 268,
                poster_url: "https://image.tmdb.org/t/p/w500/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg"
                    .to_string(),
            }
        );
    }

    #[test]
    fn repeat_search_increments_the_same_document() {
        let existing = TrendingEntry {
            id: "doc-1".to_string(),
            search_term: "bat".to_string(),
            count: 1,
            movie_id: Some(268),
            poster_url: None,
        };
        let plan = plan_record(Some(existing), "bat", &sample_movie());
        assert_eq!(
            plan,
            UpsertPlan::Increment {
                document_id: "doc-1".to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn queries_serialize_in_store_syntax() {
        assert_eq!(
            equal_query("searchTerm", "bat"),
            r#"{"attribute":"searchTerm","method":"equal","values":["bat"]}"#
        );
        assert_eq!(
            order_desc_query("count"),
            r#"{"attribute":"count","method":"orderDesc"}"#
        );
        assert_eq!(limit_query(5), r#"{"method":"limit","values":[5]}"#);
    }

    #[test]
    fn entries_decode_from_store_documents() {
        let raw = r#"{
            "total": 1,
            "documents": [{
                "$id": "65a1f0",
                "searchTerm": "dune",
                "count": 7,
                "movie_id": 438631,
                "poster_url": "https://image.tmdb.org/t/p/w500/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"
            }]
        }"#;
        let list: DocumentList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.documents.len(), 1);
        let entry = &list.documents[0];
        assert_eq!(entry.search_term, "dune");
        assert_eq!(entry.count, 7);
    }
}
