pub mod api;
pub mod app;
pub mod config;
pub mod debounce;
pub mod errors;
pub mod handlers;
pub mod trending;
pub mod ui;
