mod app;
mod dom;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
