pub mod aggregation;
pub mod app;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod errors;
pub mod flash;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod state;
pub mod storage;
pub mod ui;
pub mod validation;

pub use app::router;
pub use catalog::ActivityCatalog;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_store;
