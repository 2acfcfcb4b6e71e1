pub mod environment;
pub mod format;
pub mod logging;
pub mod paths;

pub use environment::{default_sessions_dir, find_sessions_dir, get_factory_dir, sessions_dir_under};
pub use format::{format_count, format_megabytes};
pub use logging::init_tracing;
pub use paths::format_path_with_tilde;
