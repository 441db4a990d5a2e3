pub mod cli;
pub mod toml_config;

use crate::core::prompt::DEFAULT_INSTRUCTION;
use crate::domain::model::ThinkingMode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::fmt;
use std::time::Duration;
use self::toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";
pub const DEFAULT_MODEL: &str = "doubao-seed-1-6-251015";
// 深度思考模型回應較慢，預設給足 30 分鐘
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 1800;
pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
pub const DEFAULT_MANUAL_DIR: &str = "rustscript";
pub const DEFAULT_MANUAL_FILE: &str = "RustScript手册.md";

/// 合併預設值、設定檔與命令列後的最終配置
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub thinking: ThinkingMode,
    pub manual_dir: String,
    pub manual_file: String,
    pub instruction: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            thinking: ThinkingMode::Disabled,
            manual_dir: DEFAULT_MANUAL_DIR.to_string(),
            manual_file: DEFAULT_MANUAL_FILE.to_string(),
            instruction: DEFAULT_INSTRUCTION.to_string(),
        }
    }
}

impl AppConfig {
    /// 以設定檔中出現的欄位覆蓋目前值
    pub fn merge_toml(&mut self, file: TomlConfig) {
        let TomlConfig { api, manual, prompt } = file;

        if api.api_key.is_some() {
            self.api_key = api.api_key;
        }
        if let Some(base_url) = api.base_url {
            self.base_url = base_url;
        }
        if let Some(model) = api.model {
            self.model = model;
        }
        if let Some(timeout) = api.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(thinking) = api.thinking {
            self.thinking = thinking;
        }
        if let Some(directory) = manual.directory {
            self.manual_dir = directory;
        }
        if let Some(file_name) = manual.file_name {
            self.manual_file = file_name;
        }
        if let Some(instruction) = prompt.instruction {
            self.instruction = instruction;
        }
    }

    /// 實際發送請求前才要求憑證（dry run 不需要）
    pub fn require_api_key(&self) -> Result<()> {
        validation::validate_credential("api.api_key", self.api_key.as_deref())
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("thinking", &self.thinking)
            .field("manual_dir", &self.manual_dir)
            .field("manual_file", &self.manual_file)
            .field("instruction", &self.instruction)
            .finish()
    }
}

impl ConfigProvider for AppConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn thinking(&self) -> ThinkingMode {
        self.thinking
    }

    fn manual_dir(&self) -> &str {
        &self.manual_dir
    }

    fn manual_file(&self) -> &str {
        &self.manual_file
    }

    fn instruction(&self) -> &str {
        &self.instruction
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;
        validation::validate_non_empty_string("api.model", &self.model)?;
        validation::validate_range(
            "api.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_path_segment("manual.directory", &self.manual_dir)?;
        validation::validate_path_segment("manual.file_name", &self.manual_file)?;
        Ok(())
    }
}
