use crate::domain::model::{ChatRequest, ChatResponse, ThinkingMode};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 手冊來源（本地檔案或測試替身）
pub trait ManualSource: Send + Sync {
    fn read_text(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

pub trait OutputSink: Send + Sync {
    fn emit(&self, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn thinking(&self) -> ThinkingMode;
    fn manual_dir(&self) -> &str;
    fn manual_file(&self) -> &str;
    fn instruction(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn resolve(&self, working_dir: &Path) -> PathBuf;
    async fn load(&self, manual_path: &Path) -> Result<String>;
    fn compose(&self, content: &str) -> ChatRequest;
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}
