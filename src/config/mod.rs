mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{Config, CountConfig, CustomLanguageConfig, OutputConfig, ScannerConfig};
pub use validation::validate_config;
