pub mod config;
pub mod dataset;
pub mod directory;
pub mod intent;
pub mod models;
pub mod resolver;

pub use config::{AssistantConfig, ConfigError};
pub use directory::{DirectoryConfig, DirectoryIndex};
pub use intent::{is_similar, normalize_text, tokenize};
pub use models::*;
pub use resolver::IntentResolver;
