pub mod config;
pub mod filter;
pub mod score;
pub mod tui;

pub use config::run_config;
pub use filter::run_filter;
pub use score::run_score;
pub use tui::run_tui;
