use ratatui::widgets::ListState;
use tui_input::Input;

use crate::api::{CatalogClient, Movie, MovieDetails, MoviePage, Video, VideoList};
use crate::config::AppConfig;
use crate::debounce::Debouncer;
use crate::errors::FETCH_ERROR_MESSAGE;
use crate::trending::{TrendingClient, TrendingEntry};

/// Completions of background work, applied to the [`App`] between frames.
#[derive(Debug, Clone)]
pub enum AsyncAction {
    /// The search input survived the quiet interval with this value.
    QueryStabilized(String),
    /// (query, page, response)
    MoviesLoaded(String, u32, MoviePage),
    /// (query, page, detailed cause — surfaced only as the generic message)
    MoviesFailed(String, u32, String),
    TrendingLoaded(Vec<TrendingEntry>),
    TrendingUnavailable(String),
    /// Popularity write attempt finished; the bool is success. Failures are
    /// swallowed here — this exists so the attempt stays observable.
    SearchRecorded(String, bool),
    DetailLoaded(i64, MovieDetails, VideoList),
    DetailFailed(i64, String),
}

/// Fetch lifecycle of the result list.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FetchPhase {
    Idle,
    LoadingFirstPage,
    LoadingMore,
    Error,
    Ready,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Transient state for the detail overlay; at most one, cleared on close.
pub struct DetailOverlay {
    pub movie: Movie,
    pub details: Option<MovieDetails>,
    pub trailer: Option<Video>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DetailOverlay {
    pub fn opening(movie: Movie) -> Self {
        Self {
            movie,
            details: None,
            trailer: None,
            loading: true,
            error: None,
        }
    }
}

pub struct App {
    pub config: AppConfig,
    pub catalog: CatalogClient,
    pub store: TrendingClient,

    pub input_mode: InputMode,
    pub should_quit: bool,
    pub show_help: bool,
    pub loading_tick: u64,

    // Search
    pub search_input: Input,
    pub debouncer: Debouncer,
    /// Effective (debounced) query. Empty means discover mode.
    pub query: String,

    // Result aggregation
    pub phase: FetchPhase,
    pub page: u32,
    pub total_pages: u32,
    pub has_more: bool,
    pub movies: Vec<Movie>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub error_message: Option<String>,

    // Trending
    pub trending: Vec<TrendingEntry>,
    pub trending_note: Option<String>,
    /// Last popularity write attempt: (term, succeeded).
    pub last_recorded_search: Option<(String, bool)>,

    // Detail overlay
    pub overlay: Option<DetailOverlay>,
}

impl App {
    pub fn new(config: AppConfig) -> App {
        let catalog = CatalogClient::new(
            config.catalog.base_url.clone(),
            config.catalog.api_token.clone(),
        );
        let store = TrendingClient::new(&config.trending);

        App {
            config,
            catalog,
            store,
            input_mode: InputMode::Normal,
            should_quit: false,
            show_help: false,
            loading_tick: 0,
            search_input: Input::default(),
            debouncer: Debouncer::new(),
            query: String::new(),
            phase: FetchPhase::Idle,
            page: 1,
            total_pages: 0,
            has_more: false,
            movies: vec![],
            selected_index: 0,
            list_state: ListState::default(),
            error_message: None,
            trending: vec![],
            trending_note: None,
            last_recorded_search: None,
            overlay: None,
        }
    }

    // ── Aggregator transitions ─────────────────────────────────────────────

    /// Query changed (possibly to empty): page resets to 1 and the result
    /// list is cleared before the new first page arrives.
    pub fn begin_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
        self.total_pages = 0;
        self.has_more = false;
        self.movies.clear();
        self.selected_index = 0;
        self.list_state.select(None);
        self.error_message = None;
        self.phase = FetchPhase::LoadingFirstPage;
    }

    /// Arm the next page if the sentinel is allowed to fire. Returns the page
    /// to fetch; the immediate switch to `LoadingMore` blocks re-triggering
    /// until the in-flight request completes.
    pub fn begin_next_page(&mut self) -> Option<u32> {
        if self.phase == FetchPhase::Ready && self.has_more {
            self.page += 1;
            self.phase = FetchPhase::LoadingMore;
            Some(self.page)
        } else {
            None
        }
    }

    /// Merge a page response: page 1 replaces, later pages append. No
    /// deduplication — overlapping upstream pages may repeat an id, so UI
    /// keys combine id and position.
    pub fn apply_page(&mut self, page: u32, mut response: MoviePage) {
        if page <= 1 {
            self.movies = std::mem::take(&mut response.results);
            self.selected_index = 0;
            if self.movies.is_empty() {
                self.list_state.select(None);
            } else {
                self.list_state.select(Some(0));
            }
        } else {
            self.movies.append(&mut response.results);
        }
        self.page = page;
        self.total_pages = response.total_pages;
        self.has_more = page < response.total_pages;
        self.error_message = None;
        self.phase = FetchPhase::Ready;
    }

    /// Any fetch failure surfaces the same generic message. First-page
    /// failures clear the list; later pages leave accumulated results intact.
    pub fn apply_fetch_failure(&mut self, page: u32) {
        self.phase = FetchPhase::Error;
        self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
        if page <= 1 {
            self.movies.clear();
            self.selected_index = 0;
            self.list_state.select(None);
            self.has_more = false;
        }
    }

    /// Scroll sentinel: selection sits on the last rendered row and more
    /// pages remain.
    pub fn wants_next_page(&self) -> bool {
        self.phase == FetchPhase::Ready
            && self.has_more
            && !self.movies.is_empty()
            && self.selected_index + 1 >= self.movies.len()
    }

    // ── Selection ──────────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        if self.selected_index + 1 < self.movies.len() {
            self.selected_index += 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_previous(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        self.selected_index = self.selected_index.saturating_sub(1);
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_first(&mut self) {
        if !self.movies.is_empty() {
            self.selected_index = 0;
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.movies.is_empty() {
            self.selected_index = self.movies.len() - 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.get(self.selected_index)
    }

    // ── Detail overlay ─────────────────────────────────────────────────────

    pub fn open_overlay(&mut self, movie: Movie) {
        self.overlay = Some(DetailOverlay::opening(movie));
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn apply_detail(&mut self, movie_id: i64, details: MovieDetails, videos: VideoList) {
        if let Some(overlay) = &mut self.overlay {
            if overlay.movie.id == movie_id {
                overlay.trailer = videos.trailer().cloned();
                overlay.details = Some(details);
                overlay.loading = false;
                overlay.error = None;
            }
        }
    }

    /// Either request failing shows one combined error inside the overlay
    /// without closing it.
    pub fn apply_detail_failure(&mut self, movie_id: i64, message: String) {
        if let Some(overlay) = &mut self.overlay {
            if overlay.movie.id == movie_id {
                overlay.loading = false;
                overlay.error = Some(message);
            }
        }
    }
}
