pub mod io;
pub mod schema;

pub use io::{config_dir, config_file_path, load_config};
pub use schema::{HostConfig, LoggingConfig, ModuleConfig, PageConfig};
