use tokio::sync::mpsc;

use crate::api::{CatalogClient, Movie};
use crate::app::{App, AsyncAction, FetchPhase};
use crate::errors::DETAIL_ERROR_MESSAGE;
use crate::trending::{TrendingClient, TRENDING_LIMIT};

pub async fn handle_async_action(
    app: &mut App,
    action: AsyncAction,
    tx: &mpsc::Sender<AsyncAction>,
) {
    match action {
        AsyncAction::QueryStabilized(query) => {
            // A re-emission of the current query is a no-op unless nothing
            // has been fetched yet.
            if query == app.query && app.phase != FetchPhase::Idle {
                return;
            }
            app.begin_query(query.clone());
            spawn_page_fetch(&app.catalog, tx, query, 1);
        }
        AsyncAction::MoviesLoaded(query, page, response) => {
            let record_term = first_page_search_term(&query, page, app.config.trending_ready());
            let top_result = response.results.first().cloned();
            app.apply_page(page, response);
            if let (Some(term), Some(movie)) = (record_term, top_result) {
                spawn_record_search(&app.store, tx, term, movie);
            }
        }
        AsyncAction::MoviesFailed(_query, page, _cause) => {
            app.apply_fetch_failure(page);
        }
        AsyncAction::TrendingLoaded(entries) => {
            app.trending = entries;
            app.trending_note = None;
        }
        AsyncAction::TrendingUnavailable(note) => {
            app.trending_note = Some(note);
        }
        AsyncAction::SearchRecorded(term, succeeded) => {
            app.last_recorded_search = Some((term, succeeded));
        }
        AsyncAction::DetailLoaded(movie_id, details, videos) => {
            app.apply_detail(movie_id, details, videos);
        }
        AsyncAction::DetailFailed(movie_id, message) => {
            app.apply_detail_failure(movie_id, message);
        }
    }
}

/// Popularity is recorded only for a successful first page of a non-empty
/// search when store credentials exist.
fn first_page_search_term(query: &str, page: u32, store_ready: bool) -> Option<String> {
    if page == 1 && !query.is_empty() && store_ready {
        Some(query.to_string())
    } else {
        None
    }
}

/// One page of discover/search results. In-flight requests are never aborted
/// when the query changes; a stale response can still land (last write wins).
pub fn spawn_page_fetch(
    catalog: &CatalogClient,
    tx: &mpsc::Sender<AsyncAction>,
    query: String,
    page: u32,
) {
    let client = catalog.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = if query.is_empty() {
            client.discover(page).await
        } else {
            client.search(&query, page).await
        };
        let action = match result {
            Ok(response) => AsyncAction::MoviesLoaded(query, page, response),
            Err(e) => AsyncAction::MoviesFailed(query, page, e.to_string()),
        };
        let _ = tx.send(action).await;
    });
}

/// Details and videos race in parallel; both must succeed or the overlay
/// shows one combined error.
pub fn spawn_detail_fetch(catalog: &CatalogClient, tx: &mpsc::Sender<AsyncAction>, movie_id: i64) {
    let client = catalog.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let (details, videos) =
            futures::join!(client.get_movie(movie_id), client.get_videos(movie_id));
        let action = match (details, videos) {
            (Ok(details), Ok(videos)) => AsyncAction::DetailLoaded(movie_id, details, videos),
            _ => AsyncAction::DetailFailed(movie_id, DETAIL_ERROR_MESSAGE.to_string()),
        };
        let _ = tx.send(action).await;
    });
}

pub fn spawn_trending_fetch(store: &TrendingClient, tx: &mpsc::Sender<AsyncAction>) {
    let store = store.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let action = match store.top_trending(TRENDING_LIMIT).await {
            Ok(entries) => AsyncAction::TrendingLoaded(entries),
            Err(e) => AsyncAction::TrendingUnavailable(e.to_string()),
        };
        let _ = tx.send(action).await;
    });
}

/// Fire-and-forget popularity write. Failures are swallowed; only the
/// observability action reports what happened.
pub fn spawn_record_search(
    store: &TrendingClient,
    tx: &mpsc::Sender<AsyncAction>,
    term: String,
    movie: Movie,
) {
    let store = store.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let succeeded = store.record_search(&term, &movie).await.is_ok();
        let _ = tx.send(AsyncAction::SearchRecorded(term, succeeded)).await;
    });
}
