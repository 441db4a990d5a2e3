use anyhow::Context;
use clap::Parser;
use manual_prompt::utils::logger;
use manual_prompt::{
    ArkClient, CliConfig, LocalManualSource, ManualPipeline, PromptEngine, PromptError,
    StdoutSink,
};

fn report_and_exit(e: &PromptError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting manual-prompt");

    // 載入並驗證配置
    let config = match cli.resolve_for_run() {
        Ok(config) => config,
        Err(e) => report_and_exit(&e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    let working_dir =
        std::env::current_dir().context("Failed to determine the current working directory")?;

    let client = match ArkClient::new(&config) {
        Ok(client) => client,
        Err(e) => report_and_exit(&e),
    };
    tracing::debug!("Completion client: {:?}", client);

    let pipeline = ManualPipeline::new(LocalManualSource::new(), client, config);
    let engine = PromptEngine::new_with_monitoring(pipeline, StdoutSink::new(), cli.monitor);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the request will not be sent");
        if let Err(e) = engine.preview(&working_dir).await {
            report_and_exit(&e);
        }
        return Ok(());
    }

    match engine.run(&working_dir).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Completed: {} prompt chars from {}",
                summary.prompt_chars,
                summary.manual_path.display()
            );
            Ok(())
        }
        Err(e) => report_and_exit(&e),
    }
}
