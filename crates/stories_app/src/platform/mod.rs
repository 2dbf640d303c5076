mod app;
mod effects;
pub mod logging;
mod persistence;
mod ui;

pub use app::run_app;
pub use persistence::DEFAULT_STORE_FILENAME;
