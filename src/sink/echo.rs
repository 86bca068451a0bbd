use super::Echo;
use parking_lot::Mutex;
use std::io::Write;

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutEcho;

impl Echo for StdoutEcho {
    fn emit(&self, line: &str) -> std::io::Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEcho;

impl Echo for NoopEcho {
    fn emit(&self, _line: &str) -> std::io::Result<()> {
        Ok(())
    }
}

/// Captures echoed lines in memory.
#[derive(Debug, Default)]
pub struct MemoryEcho {
    lines: Mutex<Vec<String>>,
}

impl MemoryEcho {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Echo for MemoryEcho {
    fn emit(&self, line: &str) -> std::io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
