use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use reelscope_lib::api::{Movie, MovieDetails, MoviePage, VideoList};
use reelscope_lib::app::{App, AsyncAction, FetchPhase};
use reelscope_lib::config::AppConfig;
use reelscope_lib::errors::{DETAIL_ERROR_MESSAGE, FETCH_ERROR_MESSAGE};
use reelscope_lib::handlers::async_actions::{
    handle_async_action, spawn_detail_fetch, spawn_page_fetch,
};

// ─── Helpers ───────────────────────────────────────────────────────────────────

/// Config pointing at a closed local port so transport calls fail fast
/// instead of reaching the real services.
fn offline_config(trending: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.catalog.base_url = "http://127.0.0.1:9".to_string();
    config.catalog.api_token = "test-token".to_string();
    if trending {
        config.trending.endpoint = "http://127.0.0.1:9".to_string();
        config.trending.project_id = "proj".to_string();
        config.trending.database_id = "db".to_string();
        config.trending.collection_id = "col".to_string();
    }
    config
}

fn make_app() -> App {
    App::new(offline_config(false))
}

fn make_movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: None,
        vote_average: Some(7.0),
        original_language: Some("en".to_string()),
        release_date: Some("2020-01-01".to_string()),
        overview: None,
    }
}

fn make_page(ids: &[i64], total_pages: u32) -> MoviePage {
    MoviePage {
        page: 0,
        results: ids
            .iter()
            .map(|&id| make_movie(id, &format!("Movie {}", id)))
            .collect(),
        total_pages,
        total_results: ids.len() as u64,
    }
}

async fn recv_action(rx: &mut mpsc::Receiver<AsyncAction>) -> AsyncAction {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for async action")
        .expect("channel closed")
}

// ─── Aggregator transitions ────────────────────────────────────────────────────

#[tokio::test]
async fn query_change_clears_results_before_the_new_page_lands() {
    let (tx, _rx) = mpsc::channel(8);
    let mut app = make_app();

    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded(String::new(), 1, make_page(&[1, 2, 3], 4)),
        &tx,
    )
    .await;
    assert_eq!(app.movies.len(), 3);

    app.begin_query("bat".to_string());
    assert_eq!(app.page, 1);
    assert!(app.movies.is_empty());
    assert_eq!(app.phase, FetchPhase::LoadingFirstPage);
    assert!(app.error_message.is_none());
}

#[tokio::test]
async fn later_pages_append_without_dedup_or_truncation() {
    let (tx, _rx) = mpsc::channel(8);
    let mut app = make_app();
    app.begin_query(String::new());

    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded(String::new(), 1, make_page(&[1, 2], 5)),
        &tx,
    )
    .await;
    let before = app.movies.len();

    let _ = app.begin_next_page();
    // Page 2 repeats id 2: overlapping upstream pages are kept as-is.
    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded(String::new(), 2, make_page(&[2, 3, 4], 5)),
        &tx,
    )
    .await;

    assert_eq!(app.movies.len(), before + 3);
    assert_eq!(app.movies.iter().filter(|m| m.id == 2).count(), 2);
    assert_eq!(app.phase, FetchPhase::Ready);
}

#[tokio::test]
async fn has_more_tracks_the_latest_total_pages() {
    let (tx, _rx) = mpsc::channel(8);
    let mut app = make_app();
    app.begin_query(String::new());

    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded(String::new(), 1, make_page(&[1], 3)),
        &tx,
    )
    .await;
    assert!(app.has_more);

    let _ = app.begin_next_page();
    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded(String::new(), 2, make_page(&[2], 2)),
        &tx,
    )
    .await;
    assert!(!app.has_more);

    app.select_last();
    assert!(!app.wants_next_page());
    assert_eq!(app.begin_next_page(), None);
}

#[tokio::test]
async fn scroll_sentinel_walkthrough_for_a_search_session() {
    let (tx, _rx) = mpsc::channel(8);
    let mut app = make_app();

    app.begin_query("bat".to_string());
    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded("bat".to_string(), 1, make_page(&[268], 3)),
        &tx,
    )
    .await;
    assert!(app.has_more);
    assert_eq!(app.movies.len(), 1);

    // The single visible row is the last one: the sentinel fires once.
    app.select_last();
    assert!(app.wants_next_page());
    assert_eq!(app.begin_next_page(), Some(2));
    assert_eq!(app.phase, FetchPhase::LoadingMore);
    assert!(!app.wants_next_page());

    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded("bat".to_string(), 2, make_page(&[272], 3)),
        &tx,
    )
    .await;
    assert_eq!(app.movies.len(), 2);
    assert_eq!(app.page, 2);
    assert_eq!(app.phase, FetchPhase::Ready);
}

#[tokio::test]
async fn page_two_failure_keeps_accumulated_results() {
    let (tx, _rx) = mpsc::channel(8);
    let mut app = make_app();
    app.begin_query("bat".to_string());

    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded("bat".to_string(), 1, make_page(&[1, 2], 3)),
        &tx,
    )
    .await;
    let _ = app.begin_next_page();
    handle_async_action(
        &mut app,
        AsyncAction::MoviesFailed("bat".to_string(), 2, "connection refused".to_string()),
        &tx,
    )
    .await;

    assert_eq!(app.phase, FetchPhase::Error);
    assert_eq!(app.movies.len(), 2);
    assert_eq!(app.error_message.as_deref(), Some(FETCH_ERROR_MESSAGE));
}

// ─── Transport failures through the real fetch path ────────────────────────────

#[tokio::test]
async fn first_page_transport_failure_surfaces_the_generic_message() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = make_app();

    app.begin_query("bat".to_string());
    spawn_page_fetch(&app.catalog, &tx, "bat".to_string(), 1);

    let action = recv_action(&mut rx).await;
    match &action {
        AsyncAction::MoviesFailed(query, page, _) => {
            assert_eq!(query, "bat");
            assert_eq!(*page, 1);
        }
        other => panic!("expected MoviesFailed, got {:?}", other),
    }

    handle_async_action(&mut app, action, &tx).await;
    assert_eq!(app.phase, FetchPhase::Error);
    assert!(app.movies.is_empty());
    assert_eq!(app.error_message.as_deref(), Some(FETCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn detail_overlay_failure_stays_inline() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = make_app();

    let movie = make_movie(550, "Fight Club");
    app.open_overlay(movie.clone());
    spawn_detail_fetch(&app.catalog, &tx, movie.id);

    let action = recv_action(&mut rx).await;
    handle_async_action(&mut app, action, &tx).await;

    let overlay = app.overlay.as_ref().expect("overlay must stay open");
    assert!(!overlay.loading);
    assert_eq!(overlay.error.as_deref(), Some(DETAIL_ERROR_MESSAGE));
}

#[tokio::test]
async fn detail_success_populates_trailer_and_details() {
    let (tx, _rx) = mpsc::channel(8);
    let mut app = make_app();
    let movie = make_movie(550, "Fight Club");
    app.open_overlay(movie.clone());

    let details = MovieDetails {
        id: 550,
        title: "Fight Club".to_string(),
        overview: Some("An insomniac office worker...".to_string()),
        runtime: Some(139),
        genres: vec![],
        release_date: Some("1999-10-15".to_string()),
        vote_average: Some(8.4),
        original_language: Some("en".to_string()),
        tagline: None,
        poster_path: None,
    };
    let videos: VideoList = serde_json::from_str(
        r#"{"results":[{"key":"SUXWAEX2jlg","name":"Trailer","site":"YouTube","type":"Trailer"}]}"#,
    )
    .unwrap();

    handle_async_action(&mut app, AsyncAction::DetailLoaded(550, details, videos), &tx).await;

    let overlay = app.overlay.as_ref().unwrap();
    assert!(!overlay.loading);
    assert!(overlay.error.is_none());
    assert_eq!(overlay.details.as_ref().unwrap().runtime, Some(139));
    assert_eq!(overlay.trailer.as_ref().unwrap().key, "SUXWAEX2jlg");
}

// ─── Popularity side effect ────────────────────────────────────────────────────

#[tokio::test]
async fn search_success_attempts_a_popularity_write_without_surfacing_failures() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new(offline_config(true));

    app.begin_query("bat".to_string());
    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded("bat".to_string(), 1, make_page(&[268], 1)),
        &tx,
    )
    .await;
    assert_eq!(app.phase, FetchPhase::Ready);

    // The write was attempted fire-and-forget; the store is unreachable so
    // it fails — swallowed, observable only on the channel.
    let action = recv_action(&mut rx).await;
    match &action {
        AsyncAction::SearchRecorded(term, succeeded) => {
            assert_eq!(term, "bat");
            assert!(!succeeded);
        }
        other => panic!("expected SearchRecorded, got {:?}", other),
    }

    handle_async_action(&mut app, action, &tx).await;
    assert_eq!(app.last_recorded_search, Some(("bat".to_string(), false)));
    assert!(app.error_message.is_none());
    assert_eq!(app.phase, FetchPhase::Ready);
}

#[tokio::test]
async fn discover_and_later_pages_never_record_popularity() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new(offline_config(true));

    // Discover mode (empty query)
    app.begin_query(String::new());
    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded(String::new(), 1, make_page(&[1], 3)),
        &tx,
    )
    .await;

    // Page 2 of a search
    app.begin_query("bat".to_string());
    handle_async_action(
        &mut app,
        AsyncAction::MoviesLoaded("bat".to_string(), 2, make_page(&[2], 3)),
        &tx,
    )
    .await;

    // Neither path may have spawned a write.
    let quiet = timeout(Duration::from_millis(300), rx.recv()).await;
    assert!(quiet.is_err(), "unexpected action: {:?}", quiet);
    assert!(app.last_recorded_search.is_none());
}
