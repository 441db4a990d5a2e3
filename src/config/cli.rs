#![cfg(feature = "cli")]

use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::domain::model::ThinkingMode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "manual-prompt")]
#[command(about = "Send a local manual to a chat-completion model and print the answer")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// API key for the completion endpoint
    #[arg(long, env = "ARK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completion API
    #[arg(long, env = "ARK_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum)]
    pub thinking: Option<ThinkingMode>,

    /// Directory next to the working directory that holds the manual
    #[arg(long)]
    pub manual_dir: Option<String>,

    #[arg(long)]
    pub manual_file: Option<String>,

    /// Text placed before the manual content
    #[arg(long)]
    pub instruction: Option<String>,

    /// Print the request that would be sent without sending it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Log CPU and memory usage after each stage")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 預設值 → 設定檔 → 命令列/環境變數，後者優先
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            config.merge_toml(TomlConfig::from_file(path)?);
        }

        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// 解析並驗證；只有實際送出請求時才要求憑證
    pub fn resolve_for_run(&self) -> Result<AppConfig> {
        let config = self.resolve()?;
        config.validate()?;
        if !self.dry_run {
            config.require_api_key()?;
        }
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(thinking) = self.thinking {
            config.thinking = thinking;
        }
        if let Some(manual_dir) = &self.manual_dir {
            config.manual_dir = manual_dir.clone();
        }
        if let Some(manual_file) = &self.manual_file {
            config.manual_file = manual_file.clone();
        }
        if let Some(instruction) = &self.instruction {
            config.instruction = instruction.clone();
        }
    }
}
