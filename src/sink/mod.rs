pub mod echo;
pub mod file_sink;

pub use echo::{MemoryEcho, NoopEcho, StdoutEcho};
pub use file_sink::LogSink;

/// Secondary, interactive sink that receives every line written to the
/// destination. Called with the sink lock held, so lines arrive in the same
/// order they were appended.
pub trait Echo: Send + Sync {
    fn emit(&self, line: &str) -> std::io::Result<()>;
}
