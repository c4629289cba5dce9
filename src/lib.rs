pub mod app;
pub mod config;
pub mod errors;
pub mod io;
pub mod logging;
pub mod wrap;

// Re-export commonly used types
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use wrap::{wrap, Breakpoint, CjkWidth, DisplayWidth, UnicodeWidth, Wrapped, Wrapper};
