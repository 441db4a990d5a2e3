pub mod engine;
pub mod pipeline;
pub mod prompt;
pub mod resolver;

pub use crate::domain::model::{ChatRequest, ChatResponse, RunSummary, ThinkingMode};
pub use crate::domain::ports::{
    CompletionClient, ConfigProvider, ManualSource, OutputSink, Pipeline,
};
pub use crate::utils::error::Result;
pub use pipeline::ManualPipeline;
