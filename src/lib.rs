pub mod app;
pub mod config;
pub mod day;
pub mod errors;
pub mod events;
pub mod habits;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod rollover;
pub mod seed;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod tasks;
pub mod timers;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use day::DayKey;
pub use state::AppState;
pub use storage::{load_storage, persist_storage, save_store};
pub use store::{LocalStorage, Store};
