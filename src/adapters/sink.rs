use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::Write;

/// 逐項寫到 stdout，每項後接換行
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn emit(&self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}
