use crate::domain::ports::ManualSource;
use crate::utils::error::{PromptError, Result};
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalManualSource;

impl LocalManualSource {
    pub fn new() -> Self {
        Self
    }
}

impl ManualSource for LocalManualSource {
    async fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => PromptError::ManualNotFound {
                path: path.to_path_buf(),
            },
            _ => PromptError::IoError(e),
        })?;

        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

        String::from_utf8(bytes).map_err(|_| PromptError::InvalidEncoding {
            path: path.to_path_buf(),
        })
    }
}
