use crate::core::{ChatRequest, OutputSink, Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::path::{Path, PathBuf};

/// 依序執行 解析路徑 → 讀取手冊 → 組合提示 → 請求模型，並把每一步的結果交給輸出端
pub struct PromptEngine<P: Pipeline, O: OutputSink> {
    pipeline: P,
    sink: O,
    monitor: SystemMonitor,
}

impl<P: Pipeline, O: OutputSink> PromptEngine<P, O> {
    pub fn new(pipeline: P, sink: O) -> Self {
        Self::new_with_monitoring(pipeline, sink, false)
    }

    pub fn new_with_monitoring(pipeline: P, sink: O, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            sink,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self, working_dir: &Path) -> Result<RunSummary> {
        let (manual_path, request) = self.prepare(working_dir).await?;

        tracing::info!("🤖 Requesting completion from model {}", request.model);
        let answer = self.pipeline.complete(&request).await?;
        self.monitor.log_stage("Completion");
        tracing::info!("Received {} chars", answer.chars().count());

        self.sink.emit(&answer)?;
        self.monitor.log_final_stats();

        Ok(RunSummary {
            manual_path,
            prompt_chars: request.prompt().map(|p| p.chars().count()).unwrap_or(0),
            answer,
        })
    }

    /// Dry run: same output as `run` up to the prompt, then the request body instead of the answer.
    pub async fn preview(&self, working_dir: &Path) -> Result<ChatRequest> {
        let (_, request) = self.prepare(working_dir).await?;

        let body = serde_json::to_string_pretty(&request)?;
        self.sink.emit(&body)?;
        self.monitor.log_final_stats();

        Ok(request)
    }

    async fn prepare(&self, working_dir: &Path) -> Result<(PathBuf, ChatRequest)> {
        self.sink.emit(&working_dir.display().to_string())?;

        let manual_path = self.pipeline.resolve(working_dir);
        self.sink.emit(&manual_path.display().to_string())?;

        tracing::info!("📖 Loading manual...");
        let content = self.pipeline.load(&manual_path).await?;
        self.monitor.log_stage("Load");
        tracing::info!("Loaded {} chars from {}", content.chars().count(), manual_path.display());
        self.sink.emit(&content)?;

        let request = self.pipeline.compose(&content);
        Ok((manual_path, request))
    }
}
