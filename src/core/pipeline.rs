use crate::core::prompt::compose_prompt;
use crate::core::resolver::resolve_manual_path;
use crate::core::{ChatRequest, CompletionClient, ConfigProvider, ManualSource, Pipeline};
use crate::utils::error::{PromptError, Result};
use std::path::{Path, PathBuf};

pub struct ManualPipeline<S: ManualSource, K: CompletionClient, C: ConfigProvider> {
    source: S,
    client: K,
    config: C,
}

impl<S: ManualSource, K: CompletionClient, C: ConfigProvider> ManualPipeline<S, K, C> {
    pub fn new(source: S, client: K, config: C) -> Self {
        Self {
            source,
            client,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: ManualSource, K: CompletionClient, C: ConfigProvider> Pipeline for ManualPipeline<S, K, C> {
    fn resolve(&self, working_dir: &Path) -> PathBuf {
        resolve_manual_path(
            working_dir,
            self.config.manual_dir(),
            self.config.manual_file(),
        )
    }

    async fn load(&self, manual_path: &Path) -> Result<String> {
        tracing::debug!("Reading manual from: {}", manual_path.display());
        self.source.read_text(manual_path).await
    }

    fn compose(&self, content: &str) -> ChatRequest {
        let prompt = compose_prompt(self.config.instruction(), content);
        ChatRequest::user(self.config.model(), prompt, self.config.thinking())
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let response = self.client.complete(request).await?;

        if let Some(choice) = response.choices.first() {
            if let Some(reasoning) = &choice.message.reasoning_content {
                tracing::debug!("Model returned {} chars of reasoning", reasoning.chars().count());
            }
        }

        response
            .first_content()
            .map(str::to_string)
            .ok_or(PromptError::EmptyResponseError)
    }
}
