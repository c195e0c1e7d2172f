mod app;
mod config;

pub use app::Viewer;
use config::Config;
