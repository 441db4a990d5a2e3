// Adapters layer: concrete implementations for external systems (filesystem, http, stdout).

pub mod http;
pub mod sink;
pub mod storage;

pub use http::ArkClient;
pub use sink::StdoutSink;
pub use storage::LocalManualSource;
