pub mod config;
pub mod logging;
pub mod rewrite;
pub mod utils;

pub use config::*;
pub use rewrite::*;
