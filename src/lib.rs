pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ArkClient, LocalManualSource, StdoutSink};
pub use config::{toml_config::TomlConfig, AppConfig};
pub use crate::core::{engine::PromptEngine, pipeline::ManualPipeline};
pub use utils::error::{PromptError, Result};
