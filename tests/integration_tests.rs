use anyhow::Result;
use httpmock::prelude::*;
use manual_prompt::domain::model::ThinkingMode;
use manual_prompt::domain::ports::OutputSink;
use manual_prompt::{
    AppConfig, ArkClient, LocalManualSource, ManualPipeline, PromptEngine, PromptError,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const INSTRUCTION: &str = "<instruction>\n";

#[derive(Clone, Default)]
struct CollectingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CollectingSink {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl OutputSink for CollectingSink {
    fn emit(&self, text: &str) -> manual_prompt::Result<()> {
        self.lines.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// `<tmp>/project/llm_test` 為工作目錄，`<tmp>/project/rustscript/manual.md` 為手冊
fn project_layout(manual: Option<&str>) -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let project = temp_dir.path().join("project");
    let working_dir = project.join("llm_test");
    std::fs::create_dir_all(&working_dir)?;

    let manual_path = project.join("rustscript").join("manual.md");
    if let Some(content) = manual {
        std::fs::create_dir_all(project.join("rustscript"))?;
        std::fs::write(&manual_path, content)?;
    }

    Ok((temp_dir, working_dir, manual_path))
}

fn config_for(server: &MockServer, thinking: ThinkingMode) -> AppConfig {
    AppConfig {
        api_key: Some("integration-key".to_string()),
        base_url: server.url("/api/v3"),
        model: "doubao-seed-1-6-251015".to_string(),
        timeout_seconds: 30,
        thinking,
        manual_dir: "rustscript".to_string(),
        manual_file: "manual.md".to_string(),
        instruction: INSTRUCTION.to_string(),
    }
}

fn build_engine(
    config: AppConfig,
    sink: CollectingSink,
) -> Result<PromptEngine<ManualPipeline<LocalManualSource, ArkClient, AppConfig>, CollectingSink>>
{
    let client = ArkClient::new(&config)?;
    let pipeline = ManualPipeline::new(LocalManualSource::new(), client, config);
    Ok(PromptEngine::new(pipeline, sink))
}

#[tokio::test]
async fn test_end_to_end_prints_cwd_path_content_answer() -> Result<()> {
    let (_temp_dir, working_dir, manual_path) = project_layout(Some("Hello"))?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v3/chat/completions")
            .header("Authorization", "Bearer integration-key")
            .json_body(serde_json::json!({
                "model": "doubao-seed-1-6-251015",
                "messages": [{"role": "user", "content": "<instruction>\nHello"}],
                "thinking": {"type": "disabled"}
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "021-integration",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "潮流计算结果"},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 12, "completion_tokens": 6, "total_tokens": 18}
            }));
    });

    let sink = CollectingSink::default();
    let engine = build_engine(config_for(&server, ThinkingMode::Disabled), sink.clone())?;

    let summary = engine.run(&working_dir).await?;

    api_mock.assert();
    assert_eq!(summary.answer, "潮流计算结果");
    assert_eq!(summary.manual_path, manual_path);
    assert_eq!(
        sink.lines(),
        vec![
            working_dir.display().to_string(),
            manual_path.display().to_string(),
            "Hello".to_string(),
            "潮流计算结果".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_manual_sends_no_request() -> Result<()> {
    let (_temp_dir, working_dir, manual_path) = project_layout(None)?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v3/chat/completions");
        then.status(200).json_body(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "unreachable"}}]
        }));
    });

    let sink = CollectingSink::default();
    let engine = build_engine(config_for(&server, ThinkingMode::Disabled), sink.clone())?;

    let err = engine.run(&working_dir).await.unwrap_err();

    match err {
        PromptError::ManualNotFound { path } => assert_eq!(path, manual_path),
        other => panic!("unexpected error: {other:?}"),
    }
    api_mock.assert_hits(0);
    assert_eq!(
        sink.lines(),
        vec![
            working_dir.display().to_string(),
            manual_path.display().to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_configured_thinking_mode_is_sent() -> Result<()> {
    let manual = "# RustScript\n\nfn main() {}\n";
    let (_temp_dir, working_dir, _) = project_layout(Some(manual))?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v3/chat/completions")
            .json_body_partial(r#"{"thinking": {"type": "enabled"}}"#)
            .body_contains("fn main() {}");
        then.status(200).json_body(serde_json::json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "done",
                    "reasoning_content": "thinking hard"
                }
            }]
        }));
    });

    let sink = CollectingSink::default();
    let engine = build_engine(config_for(&server, ThinkingMode::Enabled), sink.clone())?;

    let summary = engine.run(&working_dir).await?;

    api_mock.assert();
    assert_eq!(summary.answer, "done");
    assert_eq!(sink.lines()[2], manual);
    Ok(())
}

#[tokio::test]
async fn test_api_rejection_is_fatal_after_content_printed() -> Result<()> {
    let (_temp_dir, working_dir, _) = project_layout(Some("Hello"))?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v3/chat/completions");
        then.status(401).json_body(serde_json::json!({
            "error": {"code": "AuthenticationError", "message": "invalid api key"}
        }));
    });

    let sink = CollectingSink::default();
    let engine = build_engine(config_for(&server, ThinkingMode::Disabled), sink.clone())?;

    let err = engine.run(&working_dir).await.unwrap_err();

    api_mock.assert_hits(1);
    assert!(matches!(err, PromptError::ApiStatusError { status: 401, .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(sink.lines().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_empty_answer_is_an_error() -> Result<()> {
    let (_temp_dir, working_dir, _) = project_layout(Some("Hello"))?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v3/chat/completions");
        then.status(200).json_body(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": ""}}]
        }));
    });

    let sink = CollectingSink::default();
    let engine = build_engine(config_for(&server, ThinkingMode::Auto), sink.clone())?;

    let err = engine.run(&working_dir).await.unwrap_err();

    assert!(matches!(err, PromptError::EmptyResponseError));
    assert_eq!(sink.lines().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_dry_run_never_contacts_server() -> Result<()> {
    let (_temp_dir, working_dir, _) = project_layout(Some("Hello"))?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST);
        then.status(500);
    });

    let sink = CollectingSink::default();
    let engine = build_engine(config_for(&server, ThinkingMode::Disabled), sink.clone())?;

    let request = engine.preview(Path::new(&working_dir)).await?;

    api_mock.assert_hits(0);
    assert_eq!(request.prompt(), Some("<instruction>\nHello"));
    let lines = sink.lines();
    assert_eq!(lines.len(), 4);
    assert!(!lines[3].contains("integration-key"));
    Ok(())
}
